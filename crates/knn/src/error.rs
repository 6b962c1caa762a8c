//! Error types for the cellcount-knn crate.

/// Error type for all fallible operations in the cellcount-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when a point set has no points.
    #[error("{input} point set is empty")]
    EmptyPoints {
        /// Label of the empty set; [`PointSet::new`](crate::PointSet::new)
        /// reports `"point"`.
        input: &'static str,
    },

    /// Returned when the coordinate count is not divisible by the dimension.
    #[error("coordinate length {len} is not divisible by n_dims {n_dims}")]
    ShapeMismatch {
        /// Length of the flat coordinate slice.
        len: usize,
        /// Requested number of dimensions.
        n_dims: usize,
    },

    /// Returned when the dimension is zero.
    #[error("n_dims must be >= 1, got {n_dims}")]
    InvalidDimension {
        /// The invalid dimension.
        n_dims: usize,
    },

    /// Returned when the reference and query sets differ in dimension.
    #[error("query dimension {query} does not match reference dimension {reference}")]
    DimensionMismatch {
        /// Dimension of the reference set.
        reference: usize,
        /// Dimension of the query set.
        query: usize,
    },

    /// Returned when the neighbor order list is empty.
    #[error("neighbor order list is empty")]
    EmptyOrders,

    /// Returned when a neighbor order is zero.
    #[error("neighbor order must be >= 1, got {k}")]
    InvalidOrder {
        /// The invalid order.
        k: usize,
    },

    /// Returned when the order list is unsorted or contains duplicates.
    #[error("neighbor orders must be strictly increasing, got {previous} followed by {next}")]
    NonMonotonicOrders {
        /// The earlier order in the list.
        previous: usize,
        /// The order that did not exceed it.
        next: usize,
    },

    /// Returned when an order exceeds the number of reachable neighbors.
    #[error("neighbor order {k} exceeds the {available} available neighbors")]
    OrderExceedsAvailable {
        /// The requested order.
        k: usize,
        /// Number of neighbors a query point can reach.
        available: usize,
    },

    /// Returned when a periodic box length is non-finite or negative.
    #[error("periodic box length on axis {axis} must be finite and non-negative, got {length}")]
    InvalidBoxLength {
        /// Axis index.
        axis: usize,
        /// The invalid length.
        length: f64,
    },

    /// Returned when the periodic box has the wrong number of axes.
    #[error("periodic box has {box_dims} axes but points have {n_dims} dimensions")]
    BoxDimensionMismatch {
        /// Number of box lengths supplied.
        box_dims: usize,
        /// Dimension of the points.
        n_dims: usize,
    },

    /// Returned when a coordinate is NaN or infinite.
    #[error("non-finite coordinate in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}
