//! Error types for the cellcount facade.

use cellcount_ecdf::EcdfError;
use cellcount_knn::KnnError;

/// Error type for loading a [`crate::CellCountConfig`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the TOML text cannot be parsed into the config layout.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parser message, including the location.
        message: String,
    },

    /// Returned when `self_match` names no known policy.
    #[error("unknown self_match policy: {value:?} (expected \"exclude\" or \"include\")")]
    UnknownSelfMatch {
        /// The unrecognized value.
        value: String,
    },

    /// Returned when `compression` names no known mode.
    #[error("unknown compression: {value:?} (expected \"none\" or \"interpolate\")")]
    UnknownCompression {
        /// The unrecognized value.
        value: String,
    },

    /// Returned when the `[query]` section is invalid.
    #[error(transparent)]
    Query(#[from] KnnError),

    /// Returned when the `[empirical]` section is invalid.
    #[error(transparent)]
    Empirical(#[from] EcdfError),
}
