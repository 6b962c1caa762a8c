//! Per-order empirical distributions of neighbor volumes.

use std::collections::BTreeMap;

use cellcount_ecdf::{DistributionBuilder, EcdfConfig};
use cellcount_knn::{PointSet, QueryConfig};
use tracing::debug;

use crate::error::VolumeError;
use crate::volume::{VolumeMatrix, extract_volumes, extract_volumes_self};

/// One distribution per neighbor order, keyed by order.
pub type DistributionMap<T> = BTreeMap<usize, T>;

/// Builds the distribution of k-th neighbor volumes for every requested
/// order, measured from `queries` into `reference`.
///
/// # Errors
///
/// Invalid [`EcdfConfig`] settings are reported before any neighbor search.
/// Query failures arrive as [`VolumeError::Knn`] or
/// [`VolumeError::UnsupportedDimension`]; the first rejected sample as
/// [`VolumeError::DistributionConstruction`].
///
/// # Example
///
/// ```
/// use cellcount_ecdf::{EcdfBuilder, EcdfConfig};
/// use cellcount_knn::{NeighborOrders, PointSet, QueryConfig};
/// use cellcount_volume::build_empirical_cdfs;
///
/// let reference = PointSet::from_rows(&[[0.0], [1.0], [2.0]]).unwrap();
/// let queries = PointSet::from_rows(&[[0.5], [1.75]]).unwrap();
/// let config = QueryConfig::new(NeighborOrders::new(vec![1, 2]).unwrap());
///
/// let cdfs = build_empirical_cdfs(
///     &reference, &queries, &config, &EcdfConfig::default(), &EcdfBuilder,
/// ).unwrap();
/// assert_eq!(cdfs.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
/// // First-neighbor intervals: 1.0 and 0.5.
/// assert_eq!(cdfs[&1].cdf(0.5), 0.5);
/// assert_eq!(cdfs[&1].cdf(1.0), 1.0);
/// ```
#[tracing::instrument(skip_all, fields(
    n_queries = queries.len(),
    n_reference = reference.len(),
))]
pub fn build_empirical_cdfs<B: DistributionBuilder>(
    reference: &PointSet,
    queries: &PointSet,
    query_config: &QueryConfig,
    ecdf_config: &EcdfConfig,
    builder: &B,
) -> Result<DistributionMap<B::Output>, VolumeError> {
    ecdf_config.validate()?;
    let volumes = extract_volumes(reference, queries, query_config)?;
    assemble_cdfs(&volumes, ecdf_config, builder)
}

/// Self-set counterpart of [`build_empirical_cdfs`].
///
/// # Errors
///
/// As for [`build_empirical_cdfs`].
#[tracing::instrument(skip_all, fields(n_points = points.len()))]
pub fn build_empirical_cdfs_self<B: DistributionBuilder>(
    points: &PointSet,
    query_config: &QueryConfig,
    ecdf_config: &EcdfConfig,
    builder: &B,
) -> Result<DistributionMap<B::Output>, VolumeError> {
    ecdf_config.validate()?;
    let volumes = extract_volumes_self(points, query_config)?;
    assemble_cdfs(&volumes, ecdf_config, builder)
}

/// Hands each column of `volumes` to `builder`, in ascending order.
///
/// Stops at the first failure and reports its order.
///
/// # Errors
///
/// [`VolumeError::Ecdf`] for invalid settings,
/// [`VolumeError::DistributionConstruction`] for a rejected sample.
pub fn assemble_cdfs<B: DistributionBuilder>(
    volumes: &VolumeMatrix,
    ecdf_config: &EcdfConfig,
    builder: &B,
) -> Result<DistributionMap<B::Output>, VolumeError> {
    ecdf_config.validate()?;
    let mut out = BTreeMap::new();
    for (c, &order) in volumes.orders().iter().enumerate() {
        let sample = volumes.column(c);
        let dist = builder
            .build(
                &sample,
                ecdf_config.compression(),
                ecdf_config.n_interpolants(),
            )
            .map_err(|e| VolumeError::DistributionConstruction {
                order,
                message: e.to_string(),
            })?;
        debug!(order, n_samples = sample.len(), "built volume distribution");
        out.insert(order, dist);
    }
    Ok(out)
}
