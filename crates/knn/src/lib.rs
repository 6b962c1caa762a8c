//! k-th nearest neighbor distance queries.
//!
//! This crate answers one question for many query points at once: how far is
//! the k-th nearest point of a reference set, for each of several orders k?
//! The answer feeds nearest-neighbor volume statistics, so the crate supports
//!
//! | Feature | Type |
//! |---------|------|
//! | Several orders per query, one pass | [`NeighborOrders`] |
//! | Periodic (minimum-image) boundaries | [`Periodic`] |
//! | Self-set queries with or without self-match | [`SelfMatch`] |
//! | Order-preserving rayon parallelism | [`QueryConfig::with_parallel`] |
//!
//! # Quick start
//!
//! ```
//! use cellcount_knn::{BruteForceIndex, NeighborOrders, NeighborQuery, PointSet, QueryConfig};
//!
//! let points = PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 2.0]]).unwrap();
//! let config = QueryConfig::new(NeighborOrders::new(vec![1, 2]).unwrap());
//!
//! let d = BruteForceIndex::new(&points).query_self(&config).unwrap();
//! assert_eq!(d.row(0), &[1.0, 2.0]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! NeighborQuery::query() / query_self()
//!   ├─ validate config, dimensions, available neighbors
//!   └─ per query point (rayon, order preserving)
//!        ├─ sq_distances()     (distance.rs)
//!        ├─ drop own index     (self-set, SelfMatch::Exclude)
//!        └─ select_orders()    (select.rs)
//! ```
//!
//! [`NeighborQuery`] is the seam for faster spatial indexes; the
//! [`BruteForceIndex`] shipped here is exact and needs no build step.

pub mod config;
pub mod error;
pub mod index;
pub mod points;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;

pub use config::{NeighborOrders, Periodic, QueryConfig, SelfMatch};
pub use error::KnnError;
pub use index::{BruteForceIndex, NeighborQuery, QueryScratch};
pub use points::PointSet;
pub use result::DistanceMatrix;
