//! Pure conversion functions: TOML config structs -> crate API config types.

use cellcount_ecdf::{Compression, EcdfConfig};
use cellcount_knn::{NeighborOrders, Periodic, QueryConfig, SelfMatch};
use tracing::debug;

use crate::config::{EmpiricalToml, QueryToml};
use crate::error::ConfigError;

/// Parses a self-match policy name into the corresponding enum variant.
pub fn parse_self_match(s: &str) -> Result<SelfMatch, ConfigError> {
    match s.to_lowercase().as_str() {
        "exclude" => Ok(SelfMatch::Exclude),
        "include" => Ok(SelfMatch::Include),
        other => Err(ConfigError::UnknownSelfMatch {
            value: other.to_string(),
        }),
    }
}

/// Parses a compression mode name into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression, ConfigError> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "interpolate" => Ok(Compression::Interpolate),
        other => Err(ConfigError::UnknownCompression {
            value: other.to_string(),
        }),
    }
}

/// Converts box lengths to a periodic spec. Absent, empty or all-zero
/// lengths mean no wrapping; a single zero leaves only that axis open.
pub fn parse_periodic(box_size: Option<&[f64]>) -> Periodic {
    match box_size {
        Some(lengths) if lengths.iter().any(|&l| l != 0.0) => Periodic::Box(lengths.to_vec()),
        _ => Periodic::Open,
    }
}

/// Builds a [`QueryConfig`] from the TOML query configuration.
///
/// Box lengths are checked against the point dimension only when a query
/// runs.
pub fn build_query_config(query: &QueryToml) -> Result<QueryConfig, ConfigError> {
    let orders = NeighborOrders::new(query.orders.clone())?;
    let self_match = parse_self_match(&query.self_match)?;
    let periodic = parse_periodic(query.box_size.as_deref());
    debug!(
        orders = ?orders.as_slice(),
        periodic = periodic.lengths().is_some(),
        ?self_match,
        parallel = query.parallel,
        "built query config"
    );
    Ok(QueryConfig::new(orders)
        .with_periodic(periodic)
        .with_self_match(self_match)
        .with_parallel(query.parallel))
}

/// Builds an [`EcdfConfig`] from the TOML empirical configuration.
pub fn build_ecdf_config(empirical: &EmpiricalToml) -> Result<EcdfConfig, ConfigError> {
    let cfg = EcdfConfig::new()
        .with_compression(parse_compression(&empirical.compression)?)
        .with_n_interpolants(empirical.n_interpolants);
    cfg.validate()?;
    debug!(
        compression = ?cfg.compression(),
        n_interpolants = cfg.n_interpolants(),
        "built empirical config"
    );
    Ok(cfg)
}
