//! Output type for neighbor-distance queries.

/// Distances to the requested neighbor orders, one row per query point.
///
/// Stored row-major: `get(i, c)` is the distance from query point `i` to its
/// `orders()[c]`-th nearest reference point. Rows follow the input order of
/// the query points.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    values: Vec<f64>,
    orders: Vec<usize>,
}

impl DistanceMatrix {
    /// Creates a new `DistanceMatrix`.
    pub(crate) fn new(values: Vec<f64>, orders: Vec<usize>) -> Self {
        debug_assert!(!orders.is_empty());
        debug_assert_eq!(values.len() % orders.len(), 0);
        Self { values, orders }
    }

    /// Number of query points (rows).
    pub fn n_queries(&self) -> usize {
        self.values.len() / self.orders.len()
    }

    /// Neighbor orders (columns).
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Distance for query `i` at column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `c` is out of range.
    pub fn get(&self, i: usize, c: usize) -> f64 {
        assert!(c < self.orders.len(), "column {c} out of range");
        self.values[i * self.orders.len() + c]
    }

    /// All distances of query `i`, one per order.
    pub fn row(&self, i: usize) -> &[f64] {
        let m = self.orders.len();
        &self.values[i * m..(i + 1) * m]
    }

    /// Distances of every query point at column `c`.
    pub fn column(&self, c: usize) -> Vec<f64> {
        self.values
            .chunks_exact(self.orders.len())
            .map(|row| row[c])
            .collect()
    }

    /// Flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the matrix, returning the flat values and the orders.
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>) {
        (self.values, self.orders)
    }
}
