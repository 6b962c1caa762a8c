//! Configuration for empirical distribution construction.

use crate::error::EcdfError;

/// How a sample is stored once the distribution is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Keep every sample; the CDF is the exact right-continuous step function.
    #[default]
    None,
    /// Keep `n_interpolants` quantile knots at evenly spaced probabilities and
    /// interpolate linearly between them.
    Interpolate,
}

/// Configuration for building empirical distributions.
///
/// # Example
///
/// ```
/// use cellcount_ecdf::{Compression, EcdfConfig};
///
/// let config = EcdfConfig::new()
///     .with_compression(Compression::Interpolate)
///     .with_n_interpolants(200);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcdfConfig {
    compression: Compression,
    n_interpolants: usize,
}

impl EcdfConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `compression = None`, `n_interpolants = 500`.
    pub fn new() -> Self {
        Self {
            compression: Compression::None,
            n_interpolants: 500,
        }
    }

    /// Sets the compression mode.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Sets the number of interpolation knots.
    pub fn with_n_interpolants(mut self, n: usize) -> Self {
        self.n_interpolants = n;
        self
    }

    /// Returns the compression mode.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the number of interpolation knots.
    pub fn n_interpolants(&self) -> usize {
        self.n_interpolants
    }

    /// Validates this configuration.
    ///
    /// The interpolant count is checked even when compression is off, so a
    /// config stays valid when the mode is switched later.
    pub fn validate(&self) -> Result<(), EcdfError> {
        if self.n_interpolants < 2 {
            return Err(EcdfError::InvalidInterpolantCount {
                count: self.n_interpolants,
            });
        }
        Ok(())
    }
}

impl Default for EcdfConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EcdfConfig::default();
        assert_eq!(cfg.compression(), Compression::None);
        assert_eq!(cfg.n_interpolants(), 500);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = EcdfConfig::new()
            .with_compression(Compression::Interpolate)
            .with_n_interpolants(64);
        assert_eq!(cfg.compression(), Compression::Interpolate);
        assert_eq!(cfg.n_interpolants(), 64);
    }

    #[test]
    fn test_validate_interpolants() {
        for n in [0, 1] {
            let result = EcdfConfig::new().with_n_interpolants(n).validate();
            assert!(matches!(
                result,
                Err(EcdfError::InvalidInterpolantCount { count }) if count == n
            ));
        }
        assert!(EcdfConfig::new().with_n_interpolants(2).validate().is_ok());
    }
}
