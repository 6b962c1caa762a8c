//! Counts-in-cells statistics from nearest-neighbor volumes and analytic
//! point-process models.
//!
//! Two independent routes lead to the distribution of point counts in
//! randomly placed cells:
//!
//! | Route | Entry points | Crate |
//! |-------|--------------|-------|
//! | Empirical | [`extract_volumes`], [`build_empirical_cdfs`], [`build_empirical_cdfs_self`] | [`cellcount_volume`] |
//! | Analytic | [`poisson_pmf`], [`gaussian_pmf`], [`gaussian_survival`] | [`cellcount_analytic`] |
//!
//! [`analytic_volume_cdf`] maps an analytic model onto the k-th neighbor
//! volume distribution so the two routes can be compared.
//!
//! # Quick start
//!
//! ```
//! use cellcount::{
//!     CellCountConfig, EcdfBuilder, PointSet, Poisson, analytic_volume_cdf,
//!     build_empirical_cdfs_self,
//! };
//!
//! let config = CellCountConfig::from_toml_str("[query]\norders = [1, 2]\nbox_size = [4.0]\n")
//!     .unwrap();
//! let points = PointSet::from_rows(&[[0.0], [1.0], [2.0], [3.0]]).unwrap();
//!
//! let cdfs = build_empirical_cdfs_self(
//!     &points,
//!     &config.query_config().unwrap(),
//!     &config.ecdf_config().unwrap(),
//!     &EcdfBuilder,
//! )
//! .unwrap();
//!
//! // Evenly spaced on a ring: every first-neighbor interval has length 2.
//! assert_eq!(cdfs[&1].cdf(2.0), 1.0);
//! let poisson = analytic_volume_cdf(&Poisson, 1, 1.0, 2.0);
//! assert!(poisson < 1.0);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod logging;

mod crossval;

pub use config::CellCountConfig;
pub use crossval::analytic_volume_cdf;
pub use error::ConfigError;

pub use cellcount_analytic::{
    AnalyticError, CountModel, GaussianField, GaussianOrder, Poisson, gaussian_cdf,
    gaussian_cdf_array, gaussian_pmf, gaussian_pmf_array, gaussian_survival,
    gaussian_survival_array, poisson_pmf, poisson_pmf_array, poisson_survival,
    poisson_survival_array,
};
pub use cellcount_ecdf::{Compression, DistributionBuilder, EcdfBuilder, EcdfConfig, EmpiricalCdf};
pub use cellcount_knn::{NeighborOrders, Periodic, PointSet, QueryConfig, SelfMatch};
pub use cellcount_volume::{
    VolumeError, VolumeMatrix, build_empirical_cdfs, build_empirical_cdfs_self, extract_volumes,
    extract_volumes_self,
};
