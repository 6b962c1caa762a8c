//! k-th nearest neighbor volume extraction.

use cellcount_knn::{BruteForceIndex, DistanceMatrix, NeighborQuery, PointSet, QueryConfig};
use tracing::debug;

use crate::error::VolumeError;
use crate::geometry::ball_prefactor;

/// Enclosed ball volumes, one row per query point and one column per
/// neighbor order.
///
/// For a fixed row, values are non-decreasing along the columns because the
/// orders are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMatrix {
    values: Vec<f64>,
    orders: Vec<usize>,
    n_dims: usize,
}

impl VolumeMatrix {
    /// Converts neighbor distances to volumes `C_D · d^D`.
    ///
    /// # Errors
    ///
    /// [`VolumeError::UnsupportedDimension`] outside `1..=3`.
    pub fn from_distances(distances: DistanceMatrix, n_dims: usize) -> Result<Self, VolumeError> {
        let c = ball_prefactor(n_dims)?;
        let exponent = n_dims as i32;
        let (mut values, orders) = distances.into_parts();
        for v in values.iter_mut() {
            *v = c * v.powi(exponent);
        }
        Ok(Self {
            values,
            orders,
            n_dims,
        })
    }

    /// Number of query points (rows).
    pub fn n_queries(&self) -> usize {
        self.values.len() / self.orders.len()
    }

    /// Neighbor orders (columns).
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Dimension the volumes were computed in.
    pub fn n_dims(&self) -> usize {
        self.n_dims
    }

    /// Volume for query `i` at column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `c` is out of range.
    pub fn get(&self, i: usize, c: usize) -> f64 {
        assert!(c < self.orders.len(), "column {c} out of range");
        self.values[i * self.orders.len() + c]
    }

    /// Volumes of query `i`, one per order.
    pub fn row(&self, i: usize) -> &[f64] {
        let m = self.orders.len();
        &self.values[i * m..(i + 1) * m]
    }

    /// Volumes of every query point at column `c`.
    pub fn column(&self, c: usize) -> Vec<f64> {
        self.values
            .chunks_exact(self.orders.len())
            .map(|row| row[c])
            .collect()
    }

    /// Volumes of every query point for neighbor order `k`, if requested.
    pub fn column_for_order(&self, k: usize) -> Option<Vec<f64>> {
        self.orders
            .iter()
            .position(|&o| o == k)
            .map(|c| self.column(c))
    }

    /// Flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Volumes of the k-th neighbor balls around each query point, using any
/// [`NeighborQuery`] implementation (cross-set mode).
///
/// # Errors
///
/// [`VolumeError::UnsupportedDimension`] is checked before the query runs;
/// query failures arrive as [`VolumeError::Knn`].
#[tracing::instrument(skip_all, fields(
    n_queries = queries.len(),
    n_reference = index.reference().len(),
    orders = ?config.orders().as_slice(),
))]
pub fn extract_volumes_with<Q: NeighborQuery + ?Sized>(
    index: &Q,
    queries: &PointSet,
    config: &QueryConfig,
) -> Result<VolumeMatrix, VolumeError> {
    let n_dims = index.reference().n_dims();
    ball_prefactor(n_dims)?;
    let distances = index.query(queries, config)?;
    debug!(n_dims, "converting neighbor distances to volumes");
    VolumeMatrix::from_distances(distances, n_dims)
}

/// Self-set counterpart of [`extract_volumes_with`]: every reference point
/// is a query point, with self-match handled per [`QueryConfig::self_match`].
///
/// # Errors
///
/// As for [`extract_volumes_with`].
#[tracing::instrument(skip_all, fields(
    n_points = index.reference().len(),
    orders = ?config.orders().as_slice(),
))]
pub fn extract_volumes_self_with<Q: NeighborQuery + ?Sized>(
    index: &Q,
    config: &QueryConfig,
) -> Result<VolumeMatrix, VolumeError> {
    let n_dims = index.reference().n_dims();
    ball_prefactor(n_dims)?;
    let distances = index.query_self(config)?;
    debug!(n_dims, "converting neighbor distances to volumes");
    VolumeMatrix::from_distances(distances, n_dims)
}

/// Volumes of the k-th neighbor balls of `reference` around each point of
/// `queries`, by exhaustive search.
///
/// # Errors
///
/// As for [`extract_volumes_with`].
///
/// # Example
///
/// ```
/// use cellcount_knn::{PointSet, QueryConfig};
/// use cellcount_volume::extract_volumes;
///
/// let reference = PointSet::from_rows(&[[0.0], [1.0]]).unwrap();
/// let queries = PointSet::from_rows(&[[0.25]]).unwrap();
///
/// let v = extract_volumes(&reference, &queries, &QueryConfig::new(1)).unwrap();
/// assert_eq!(v.get(0, 0), 0.5); // interval of half-width 0.25
/// ```
pub fn extract_volumes(
    reference: &PointSet,
    queries: &PointSet,
    config: &QueryConfig,
) -> Result<VolumeMatrix, VolumeError> {
    extract_volumes_with(&BruteForceIndex::new(reference), queries, config)
}

/// Volumes of the k-th neighbor balls of `points` around each of its own
/// points, by exhaustive search.
///
/// # Errors
///
/// As for [`extract_volumes_with`].
pub fn extract_volumes_self(
    points: &PointSet,
    config: &QueryConfig,
) -> Result<VolumeMatrix, VolumeError> {
    extract_volumes_self_with(&BruteForceIndex::new(points), config)
}
