use cellcount_ecdf::EcdfConfig;
use cellcount_knn::QueryConfig;
use serde::Deserialize;

use crate::convert::{build_ecdf_config, build_query_config};
use crate::error::ConfigError;

/// Top-level run configuration.
///
/// # Example
///
/// ```
/// use cellcount::CellCountConfig;
///
/// let config = CellCountConfig::from_toml_str(
///     r#"
///     [query]
///     orders = [1, 4, 8]
///     box_size = [1.0, 1.0, 1.0]
///
///     [empirical]
///     compression = "interpolate"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.query.orders, vec![1, 4, 8]);
/// assert_eq!(config.empirical.n_interpolants, 500);
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellCountConfig {
    /// Neighbor query settings.
    #[serde(default)]
    pub query: QueryToml,

    /// Empirical distribution settings.
    #[serde(default)]
    pub empirical: EmpiricalToml,
}

impl CellCountConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML, unknown keys or wrong
    /// value types.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// The `[query]` section as a [`QueryConfig`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Query`] for an invalid order list,
    /// [`ConfigError::UnknownSelfMatch`] for an unknown policy.
    pub fn query_config(&self) -> Result<QueryConfig, ConfigError> {
        build_query_config(&self.query)
    }

    /// The `[empirical]` section as an [`EcdfConfig`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::Empirical`] or [`ConfigError::UnknownCompression`].
    pub fn ecdf_config(&self) -> Result<EcdfConfig, ConfigError> {
        build_ecdf_config(&self.empirical)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryToml {
    #[serde(default = "default_orders")]
    pub orders: Vec<usize>,
    /// One length per axis; absent or all zero means no periodic wrapping.
    #[serde(default)]
    pub box_size: Option<Vec<f64>>,
    #[serde(default = "default_self_match")]
    pub self_match: String,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for QueryToml {
    fn default() -> Self {
        Self {
            orders: default_orders(),
            box_size: None,
            self_match: default_self_match(),
            parallel: true,
        }
    }
}

fn default_orders() -> Vec<usize> {
    vec![1]
}
fn default_self_match() -> String {
    "exclude".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmpiricalToml {
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_n_interpolants")]
    pub n_interpolants: usize,
}

impl Default for EmpiricalToml {
    fn default() -> Self {
        Self {
            compression: default_compression(),
            n_interpolants: default_n_interpolants(),
        }
    }
}

fn default_compression() -> String {
    "none".to_string()
}
fn default_n_interpolants() -> usize {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let cfg = CellCountConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.query.orders, vec![1]);
        assert!(cfg.query.box_size.is_none());
        assert_eq!(cfg.query.self_match, "exclude");
        assert!(cfg.query.parallel);
        assert_eq!(cfg.empirical.compression, "none");
        assert_eq!(cfg.empirical.n_interpolants, 500);
    }

    #[test]
    fn test_full_document() {
        let cfg = CellCountConfig::from_toml_str(
            r#"
            [query]
            orders = [2, 3]
            box_size = [10.0, 20.0]
            self_match = "include"
            parallel = false

            [empirical]
            compression = "interpolate"
            n_interpolants = 64
            "#,
        )
        .unwrap();
        assert_eq!(cfg.query.orders, vec![2, 3]);
        assert_eq!(cfg.query.box_size, Some(vec![10.0, 20.0]));
        assert_eq!(cfg.query.self_match, "include");
        assert!(!cfg.query.parallel);
        assert_eq!(cfg.empirical.compression, "interpolate");
        assert_eq!(cfg.empirical.n_interpolants, 64);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = CellCountConfig::from_toml_str("[query]\nk = 3\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = CellCountConfig::from_toml_str("[query]\norders = \"1\"\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
