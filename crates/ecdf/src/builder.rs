//! The distribution construction seam.

use crate::config::Compression;
use crate::distribution::EmpiricalCdf;
use crate::error::EcdfError;

/// Turns a raw sample into a queryable distribution.
///
/// Volume statistics hand one sample per neighbor order to a builder; plug a
/// different implementation in here to change how distributions are stored.
pub trait DistributionBuilder {
    /// The distribution handle produced.
    type Output;
    /// Construction failure.
    type Error: std::error::Error;

    /// Builds a distribution from `samples`.
    fn build(
        &self,
        samples: &[f64],
        compression: Compression,
        n_interpolants: usize,
    ) -> Result<Self::Output, Self::Error>;
}

/// Builds [`EmpiricalCdf`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdfBuilder;

impl DistributionBuilder for EcdfBuilder {
    type Output = EmpiricalCdf;
    type Error = EcdfError;

    fn build(
        &self,
        samples: &[f64],
        compression: Compression,
        n_interpolants: usize,
    ) -> Result<EmpiricalCdf, EcdfError> {
        EmpiricalCdf::build(samples, compression, n_interpolants)
    }
}
