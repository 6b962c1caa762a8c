//! Nearest-neighbor volume statistics.
//!
//! For each query point and neighbor order `k`, the distance `d_k` to the
//! k-th nearest reference point becomes the volume of the enclosing ball,
//! `V_k = C_D · d_k^D`:
//!
//! | D | `C_D` |
//! |---|-------|
//! | 1 | 2 |
//! | 2 | π |
//! | 3 | 4π/3 |
//!
//! The volumes of each order can then be turned into an empirical
//! distribution through any [`cellcount_ecdf::DistributionBuilder`].
//!
//! # Quick start
//!
//! ```
//! use cellcount_ecdf::{EcdfBuilder, EcdfConfig};
//! use cellcount_knn::{PointSet, QueryConfig};
//! use cellcount_volume::build_empirical_cdfs_self;
//!
//! let points = PointSet::from_rows(&[[0.0], [1.0], [3.0], [6.0]]).unwrap();
//! let cdfs = build_empirical_cdfs_self(
//!     &points, &QueryConfig::new(1), &EcdfConfig::default(), &EcdfBuilder,
//! ).unwrap();
//!
//! // First-neighbor intervals: 2, 2, 4, 6.
//! assert_eq!(cdfs[&1].cdf(2.0), 0.5);
//! ```

mod assemble;
mod error;
mod geometry;
mod volume;

pub use assemble::{
    DistributionMap, assemble_cdfs, build_empirical_cdfs, build_empirical_cdfs_self,
};
pub use error::VolumeError;
pub use geometry::{ball_prefactor, ball_radius, ball_volume};
pub use volume::{
    VolumeMatrix, extract_volumes, extract_volumes_self, extract_volumes_self_with,
    extract_volumes_with,
};
