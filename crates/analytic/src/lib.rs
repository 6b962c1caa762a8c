//! Closed-form counts-in-cells probabilities.
//!
//! Given the expected number of points `nV` in a cell, this crate returns
//! the probability of finding exactly `k` points (point mass) and of finding
//! more than `k` points (survival function) for two point processes:
//!
//! | Model | Point mass | Survival `P(count > k)` |
//! |-------|------------|-------------------------|
//! | [`Poisson`] | [`poisson_pmf`], any `k` | [`poisson_survival`], any `k` |
//! | [`GaussianField`] | [`gaussian_pmf`], `k ≤ 20` | [`gaussian_survival`], `k ≤ 13` |
//!
//! Gaussian orders outside their table do **not** fail: they silently use
//! the order-0 expression (with a `warn` log). Check [`GaussianOrder`] first
//! if that matters.
//!
//! Scalar functions return `NaN` for negative parameters. The `*_array`
//! functions validate their inputs, broadcast length-1 arrays and run in
//! parallel.
//!
//! # Quick start
//!
//! ```
//! use cellcount_analytic::{gaussian_pmf, gaussian_survival, poisson_pmf};
//!
//! let n_v = 2.0;
//! let p_poisson = poisson_pmf(2, n_v);
//! let p_field = gaussian_pmf(2, n_v, 0.3);
//! assert!(p_field < p_poisson); // fluctuations flatten the distribution
//!
//! let tail = gaussian_survival(2, n_v, 0.3);
//! assert!(tail > 0.0 && tail < 1.0);
//! ```

mod array;
mod error;
mod gaussian;
mod model;
mod poisson;
mod table;

pub use array::{
    gaussian_cdf_array, gaussian_pmf_array, gaussian_survival_array, poisson_pmf_array,
    poisson_survival_array,
};
pub use error::AnalyticError;
pub use gaussian::{
    GaussianOrder, MAX_PMF_ORDER, MAX_SURVIVAL_ORDER, base_terms, gaussian_cdf, gaussian_pmf,
    gaussian_survival,
};
pub use model::{CountModel, GaussianField, Poisson};
pub use poisson::{erlang_pdf, poisson_cdf, poisson_pmf, poisson_survival};
