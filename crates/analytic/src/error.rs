//! Error types for the cellcount-analytic crate.

/// Error type for the array entry points of the cellcount-analytic crate.
///
/// The scalar functions never fail; they return `NaN` for negative
/// parameters instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyticError {
    /// Returned when an expected count is negative.
    #[error("expected count must be >= 0, got {value} at index {index}")]
    NegativeExpectedCount {
        /// Position in the input array.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when a fluctuation amplitude is negative.
    #[error("sigma must be >= 0, got {value} at index {index}")]
    NegativeSigma {
        /// Position in the input array.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when an input contains NaN or infinity.
    #[error("{input} contains a non-finite value at index {index}")]
    NonFiniteInput {
        /// Which input.
        input: &'static str,
        /// Position in the input array.
        index: usize,
    },

    /// Returned when the expected-count and sigma arrays cannot be broadcast.
    #[error("cannot broadcast arrays of length {n_v_len} and {sigma_len}")]
    ShapeMismatch {
        /// Length of the expected-count array.
        n_v_len: usize,
        /// Length of the sigma array.
        sigma_len: usize,
    },
}
