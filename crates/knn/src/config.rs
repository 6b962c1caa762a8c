//! Configuration for neighbor-distance queries.

use crate::error::KnnError;

/// A strictly increasing, non-empty list of neighbor orders (1-based ranks).
///
/// Unsorted or duplicated lists are rejected rather than silently sorted, so
/// that column `c` of every result always refers to `orders()[c]` as given.
///
/// # Example
///
/// ```
/// use cellcount_knn::NeighborOrders;
///
/// let orders = NeighborOrders::new(vec![1, 4, 8]).unwrap();
/// assert_eq!(orders.max(), 8);
/// assert!(NeighborOrders::new(vec![4, 1]).is_err());
/// assert_eq!(NeighborOrders::single(2).as_slice(), &[2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborOrders(Vec<usize>);

impl NeighborOrders {
    /// Validates and wraps a list of orders.
    ///
    /// # Errors
    ///
    /// [`KnnError::EmptyOrders`], [`KnnError::InvalidOrder`] for a zero order,
    /// or [`KnnError::NonMonotonicOrders`] for the first non-increasing pair.
    pub fn new(orders: Vec<usize>) -> Result<Self, KnnError> {
        check_orders(&orders)?;
        Ok(Self(orders))
    }

    /// A list holding one order. `k = 0` is kept and rejected by
    /// [`QueryConfig::validate`].
    pub fn single(k: usize) -> Self {
        Self(vec![k])
    }

    /// The orders in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a validated list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest requested order.
    pub fn max(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    fn validate(&self) -> Result<(), KnnError> {
        check_orders(&self.0)
    }
}

fn check_orders(orders: &[usize]) -> Result<(), KnnError> {
    let Some(&first) = orders.first() else {
        return Err(KnnError::EmptyOrders);
    };
    if first == 0 {
        return Err(KnnError::InvalidOrder { k: 0 });
    }
    for w in orders.windows(2) {
        if w[1] <= w[0] {
            return Err(KnnError::NonMonotonicOrders {
                previous: w[0],
                next: w[1],
            });
        }
    }
    Ok(())
}

impl From<usize> for NeighborOrders {
    fn from(k: usize) -> Self {
        Self::single(k)
    }
}

impl TryFrom<Vec<usize>> for NeighborOrders {
    type Error = KnnError;

    fn try_from(orders: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(orders)
    }
}

/// Boundary treatment for distance computations.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Periodic {
    /// Plain Euclidean metric.
    #[default]
    Open,
    /// Minimum-image metric on a box with one length per axis. A length of
    /// zero leaves that axis open.
    Box(Vec<f64>),
}

impl Periodic {
    /// Cubic box with the same length on every one of `n_dims` axes.
    pub fn cube(length: f64, n_dims: usize) -> Self {
        Periodic::Box(vec![length; n_dims])
    }

    /// Box lengths, or `None` for the open metric.
    pub fn lengths(&self) -> Option<&[f64]> {
        match self {
            Periodic::Open => None,
            Periodic::Box(l) => Some(l),
        }
    }

    /// Checks box lengths against the point dimension.
    ///
    /// # Errors
    ///
    /// [`KnnError::BoxDimensionMismatch`] or [`KnnError::InvalidBoxLength`].
    pub fn validate(&self, n_dims: usize) -> Result<(), KnnError> {
        let Periodic::Box(lengths) = self else {
            return Ok(());
        };
        if lengths.len() != n_dims {
            return Err(KnnError::BoxDimensionMismatch {
                box_dims: lengths.len(),
                n_dims,
            });
        }
        for (axis, &length) in lengths.iter().enumerate() {
            if !length.is_finite() || length < 0.0 {
                return Err(KnnError::InvalidBoxLength { axis, length });
            }
        }
        Ok(())
    }
}

/// Whether a point is its own neighbor in a self-set query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelfMatch {
    /// Drop the query point's own index from its candidates. Other points at
    /// identical coordinates remain neighbors at distance 0.
    #[default]
    Exclude,
    /// Keep the query point; its first neighbor is itself at distance 0.
    Include,
}

/// Configuration for a neighbor-distance query.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use cellcount_knn::{NeighborOrders, Periodic, QueryConfig, SelfMatch};
///
/// let config = QueryConfig::new(NeighborOrders::new(vec![1, 2]).unwrap())
///     .with_periodic(Periodic::cube(1.0, 3))
///     .with_self_match(SelfMatch::Exclude);
///
/// assert!(config.validate(3).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Neighbor orders to report.
    orders: NeighborOrders,
    /// Distance metric boundary treatment.
    periodic: Periodic,
    /// Self-exclusion policy for self-set queries.
    self_match: SelfMatch,
    /// Spread query points over the rayon pool.
    parallel: bool,
}

impl QueryConfig {
    /// Creates a new configuration for the given orders.
    ///
    /// Defaults: `periodic = Open`, `self_match = Exclude`, `parallel = true`.
    pub fn new(orders: impl Into<NeighborOrders>) -> Self {
        Self {
            orders: orders.into(),
            periodic: Periodic::Open,
            self_match: SelfMatch::Exclude,
            parallel: true,
        }
    }

    /// Sets the boundary treatment.
    pub fn with_periodic(mut self, periodic: Periodic) -> Self {
        self.periodic = periodic;
        self
    }

    /// Sets the self-exclusion policy.
    pub fn with_self_match(mut self, self_match: SelfMatch) -> Self {
        self.self_match = self_match;
        self
    }

    /// Enables or disables parallel evaluation across query points.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the neighbor orders.
    pub fn orders(&self) -> &NeighborOrders {
        &self.orders
    }

    /// Returns the boundary treatment.
    pub fn periodic(&self) -> &Periodic {
        &self.periodic
    }

    /// Returns the self-exclusion policy.
    pub fn self_match(&self) -> SelfMatch {
        self.self_match
    }

    /// Returns whether query points are processed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration for points of dimension `n_dims`.
    ///
    /// Orders are checked before the periodic box.
    pub fn validate(&self, n_dims: usize) -> Result<(), KnnError> {
        self.orders.validate()?;
        self.periodic.validate(n_dims)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
