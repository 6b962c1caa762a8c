//! Error types for the cellcount-volume crate.

use cellcount_ecdf::EcdfError;
use cellcount_knn::KnnError;

/// Error type for all fallible operations in the cellcount-volume crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VolumeError {
    /// Returned when points are not 1-, 2- or 3-dimensional.
    #[error("no ball volume prefactor for dimension {n_dims} (supported: 1, 2, 3)")]
    UnsupportedDimension {
        /// The unsupported dimension.
        n_dims: usize,
    },

    /// Returned when the neighbor query fails validation.
    #[error(transparent)]
    Knn(#[from] KnnError),

    /// Returned when the distribution settings are invalid.
    #[error(transparent)]
    Ecdf(#[from] EcdfError),

    /// Returned when the distribution for one neighbor order cannot be built.
    ///
    /// The `message` field is a `String` because builder error types need not
    /// implement `Clone`.
    #[error("distribution construction failed for neighbor order {order}: {message}")]
    DistributionConstruction {
        /// The neighbor order whose sample was rejected.
        order: usize,
        /// The builder's error message.
        message: String,
    },
}
