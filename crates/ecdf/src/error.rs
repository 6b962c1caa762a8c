//! Error types for the cellcount-ecdf crate.

/// Error type for all fallible operations in the cellcount-ecdf crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EcdfError {
    /// Returned when the sample is empty.
    #[error("sample is empty")]
    EmptySample,

    /// Returned when a sample value is NaN or infinite.
    #[error("non-finite sample value at index {index}")]
    NonFiniteSample {
        /// Position of the first offending value.
        index: usize,
    },

    /// Returned when fewer than two interpolants are requested.
    #[error("interpolant count must be >= 2, got {count}")]
    InvalidInterpolantCount {
        /// The invalid count.
        count: usize,
    },
}
