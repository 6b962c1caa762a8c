//! Empirical distributions of one-dimensional samples.
//!
//! A sample (for example the k-th nearest neighbor volumes of a point set)
//! becomes an [`EmpiricalCdf`] that can be evaluated anywhere. Large samples
//! may be compressed to a fixed number of interpolation knots.
//!
//! | Mode | Storage | `cdf(x)` |
//! |------|---------|----------|
//! | [`Compression::None`] | every sample | exact step function |
//! | [`Compression::Interpolate`] | `n_interpolants` quantile knots | piecewise linear |
//!
//! # Quick start
//!
//! ```
//! use cellcount_ecdf::{Compression, DistributionBuilder, EcdfBuilder};
//!
//! let samples: Vec<f64> = (1..=1000).map(|i| i as f64).collect();
//! let cdf = EcdfBuilder.build(&samples, Compression::Interpolate, 11).unwrap();
//! assert!((cdf.cdf(500.5) - 0.5).abs() < 1e-9);
//! ```

mod builder;
mod config;
mod distribution;
mod error;

pub use builder::{DistributionBuilder, EcdfBuilder};
pub use config::{Compression, EcdfConfig};
pub use distribution::EmpiricalCdf;
pub use error::EcdfError;
