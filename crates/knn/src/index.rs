//! Neighbor query capability and its brute-force implementation.

use rayon::prelude::*;
use tracing::debug;

use crate::config::{QueryConfig, SelfMatch};
use crate::distance::sq_distances;
use crate::error::KnnError;
use crate::points::PointSet;
use crate::result::DistanceMatrix;
use crate::select::select_orders;

/// Distances to k-th nearest neighbors in a fixed reference set.
///
/// Implementations must return rows in the same order as the query points,
/// whatever their internal scheduling.
pub trait NeighborQuery {
    /// The reference point set queries are answered against.
    fn reference(&self) -> &PointSet;

    /// Distances from every point of `queries` to its requested-order
    /// neighbors in the reference set (cross-set mode).
    ///
    /// # Errors
    ///
    /// Returns [`KnnError`] for an invalid config, a dimension mismatch, or
    /// an order larger than the reference set.
    fn query(&self, queries: &PointSet, config: &QueryConfig)
    -> Result<DistanceMatrix, KnnError>;

    /// Distances from every reference point to its requested-order neighbors
    /// in the reference set itself (self-set mode), honoring
    /// [`QueryConfig::self_match`].
    ///
    /// # Errors
    ///
    /// As for [`NeighborQuery::query`]; with [`SelfMatch::Exclude`] one fewer
    /// neighbor is available.
    fn query_self(&self, config: &QueryConfig) -> Result<DistanceMatrix, KnnError>;
}

/// Pre-allocated scratch buffer for a single neighbor query.
///
/// Reuse across calls to [`BruteForceIndex::query_point_with_scratch`] to
/// avoid per-call heap allocation. Parallel queries keep one per worker.
///
/// # Example
///
/// ```
/// use cellcount_knn::QueryScratch;
///
/// let mut scratch = QueryScratch::new(1000);
/// // Use with BruteForceIndex::query_point_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone)]
pub struct QueryScratch {
    /// Squared distances to every candidate.
    pub(crate) d2_sq: Vec<f64>,
}

impl QueryScratch {
    /// Creates a new scratch buffer with capacity for `max_reference` points.
    pub fn new(max_reference: usize) -> Self {
        Self {
            d2_sq: Vec::with_capacity(max_reference),
        }
    }
}

/// Exhaustive k-th nearest neighbor search over a borrowed reference set.
///
/// Each query costs `O(n)` distance evaluations plus a partial selection.
/// Queries are independent and are spread over the rayon pool unless
/// [`QueryConfig::with_parallel`] turns that off.
///
/// # Example
///
/// ```
/// use cellcount_knn::{BruteForceIndex, NeighborQuery, PointSet, QueryConfig};
///
/// let reference = PointSet::from_rows(&[[0.0], [1.0], [3.0]]).unwrap();
/// let queries = PointSet::from_rows(&[[0.5]]).unwrap();
/// let index = BruteForceIndex::new(&reference);
///
/// let d = index.query(&queries, &QueryConfig::new(2)).unwrap();
/// assert_eq!(d.get(0, 0), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BruteForceIndex<'a> {
    reference: &'a PointSet,
}

impl<'a> BruteForceIndex<'a> {
    /// Wraps a reference set.
    pub fn new(reference: &'a PointSet) -> Self {
        Self { reference }
    }

    /// Distances from a single `target` to its requested-order neighbors,
    /// written into `out`, reusing `scratch`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError`] if the config is invalid, `target` has the wrong
    /// dimension or non-finite coordinates, `out` does not hold one value per
    /// order, or an order exceeds the reference size.
    pub fn query_point_with_scratch(
        &self,
        target: &[f64],
        config: &QueryConfig,
        scratch: &mut QueryScratch,
        out: &mut [f64],
    ) -> Result<(), KnnError> {
        validate_config(self.reference, config, self.reference.len())?;
        if target.len() != self.reference.n_dims() {
            return Err(KnnError::DimensionMismatch {
                reference: self.reference.n_dims(),
                query: target.len(),
            });
        }
        if target.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "target" });
        }
        if out.len() != config.orders().len() {
            return Err(KnnError::ShapeMismatch {
                len: out.len(),
                n_dims: config.orders().len(),
            });
        }
        fill_row(
            self.reference,
            target,
            None,
            config.orders().as_slice(),
            config.periodic().lengths(),
            scratch,
            out,
        );
        Ok(())
    }

    fn run(&self, queries: &PointSet, exclude_own: bool, config: &QueryConfig) -> DistanceMatrix {
        let orders = config.orders().as_slice();
        let lengths = config.periodic().lengths();
        let reference = self.reference;
        let n_ref = reference.len();
        let m = orders.len();
        let mut values = vec![0.0; queries.len() * m];

        let fill = |scratch: &mut QueryScratch, (i, row): (usize, &mut [f64])| {
            let own = exclude_own.then_some(i);
            fill_row(reference, queries.point(i), own, orders, lengths, scratch, row);
        };

        if config.parallel() {
            values
                .par_chunks_mut(m)
                .enumerate()
                .for_each_init(|| QueryScratch::new(n_ref), fill);
        } else {
            let mut scratch = QueryScratch::new(n_ref);
            for item in values.chunks_mut(m).enumerate() {
                fill(&mut scratch, item);
            }
        }

        DistanceMatrix::new(values, orders.to_vec())
    }
}

impl NeighborQuery for BruteForceIndex<'_> {
    fn reference(&self) -> &PointSet {
        self.reference
    }

    #[tracing::instrument(skip_all, fields(
        n_queries = queries.len(),
        n_reference = self.reference.len(),
        n_orders = config.orders().len(),
    ))]
    fn query(
        &self,
        queries: &PointSet,
        config: &QueryConfig,
    ) -> Result<DistanceMatrix, KnnError> {
        if queries.n_dims() != self.reference.n_dims() {
            return Err(KnnError::DimensionMismatch {
                reference: self.reference.n_dims(),
                query: queries.n_dims(),
            });
        }
        validate_config(self.reference, config, self.reference.len())?;
        debug!(parallel = config.parallel(), "cross-set neighbor query");
        Ok(self.run(queries, false, config))
    }

    #[tracing::instrument(skip_all, fields(
        n_points = self.reference.len(),
        n_orders = config.orders().len(),
        self_match = ?config.self_match(),
    ))]
    fn query_self(&self, config: &QueryConfig) -> Result<DistanceMatrix, KnnError> {
        let exclude_own = config.self_match() == SelfMatch::Exclude;
        let available = self.reference.len() - usize::from(exclude_own);
        validate_config(self.reference, config, available)?;
        debug!(parallel = config.parallel(), "self-set neighbor query");
        Ok(self.run(self.reference, exclude_own, config))
    }
}

/// Validates the config against the reference set and the neighbor count a
/// query can reach.
fn validate_config(
    reference: &PointSet,
    config: &QueryConfig,
    available: usize,
) -> Result<(), KnnError> {
    config.validate(reference.n_dims())?;
    let k = config.orders().max();
    if k > available {
        return Err(KnnError::OrderExceedsAvailable { k, available });
    }
    Ok(())
}

/// Computes one output row. Assumes all inputs are validated.
fn fill_row(
    reference: &PointSet,
    target: &[f64],
    own: Option<usize>,
    orders: &[usize],
    lengths: Option<&[f64]>,
    scratch: &mut QueryScratch,
    row: &mut [f64],
) {
    scratch.d2_sq.clear();
    scratch.d2_sq.resize(reference.len(), 0.0);
    sq_distances(
        reference.coords(),
        reference.n_dims(),
        target,
        lengths,
        &mut scratch.d2_sq,
    );
    if let Some(i) = own {
        scratch.d2_sq.swap_remove(i);
    }
    select_orders(&mut scratch.d2_sq, orders, row);
}
