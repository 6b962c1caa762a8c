//! Counts in cells of a Gaussian random density field.
//!
//! Probabilities are written as `A + B·Q_k`, where the base terms
//!
//! ```text
//! B(nV, σ) = exp(−nV + nV²σ²/2)
//! A(nV, σ) = 1 − B(nV, σ)
//! ```
//!
//! are shared by every order and `Q_k` comes from one shared table of
//! series coefficients. The point mass is tabulated for `k = 0..=20` and the
//! survival function `P(count > k)` for `k = 0..=13`. Any other order falls
//! back to the order-0 expression: `B` for the point mass and `A` for the
//! survival function. The fallback never errors; it is logged at `warn`
//! level and can be detected up front with [`GaussianOrder`].
//!
//! The survival function subtracts a partial sum from `A`, so for large `k`
//! and small `nV` the result carries an absolute rounding error of a few
//! `1e-16`.

use tracing::warn;

use crate::table::{coefficient, generating_params, partial_sum};

/// Highest order with a tabulated point mass.
pub const MAX_PMF_ORDER: usize = 20;

/// Highest order with a tabulated survival function.
pub const MAX_SURVIVAL_ORDER: usize = 13;

/// Which closed form an order dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaussianOrder {
    /// The order has its own closed form.
    Supported(usize),
    /// The order is outside the table; the order-0 form is used instead.
    Fallback,
}

impl GaussianOrder {
    /// Dispatch for the point mass.
    pub fn for_pmf(k: usize) -> Self {
        if k <= MAX_PMF_ORDER {
            Self::Supported(k)
        } else {
            Self::Fallback
        }
    }

    /// Dispatch for the survival function.
    pub fn for_survival(k: usize) -> Self {
        if k <= MAX_SURVIVAL_ORDER {
            Self::Supported(k)
        } else {
            Self::Fallback
        }
    }

    /// Whether the order has its own closed form.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

/// `(A, B)` base terms. `A + B = 1`.
///
/// Negative `n_v` or `sigma` give `NaN` for both.
pub fn base_terms(n_v: f64, sigma: f64) -> (f64, f64) {
    if n_v < 0.0 || sigma < 0.0 {
        return (f64::NAN, f64::NAN);
    }
    let exponent = -n_v + 0.5 * n_v * n_v * sigma * sigma;
    let b = exponent.exp();
    (-exponent.exp_m1(), b)
}

/// Point mass for an already dispatched order. Does not log.
pub(crate) fn pmf_dispatched(order: GaussianOrder, n_v: f64, sigma: f64) -> f64 {
    let (_, b) = base_terms(n_v, sigma);
    match order {
        GaussianOrder::Supported(0) | GaussianOrder::Fallback => b,
        GaussianOrder::Supported(k) => {
            let (ga, gb) = generating_params(n_v, sigma);
            b * coefficient(k, ga, gb)
        }
    }
}

/// Survival function for an already dispatched order. Does not log.
pub(crate) fn survival_dispatched(order: GaussianOrder, n_v: f64, sigma: f64) -> f64 {
    let (a, b) = base_terms(n_v, sigma);
    match order {
        GaussianOrder::Supported(0) | GaussianOrder::Fallback => a,
        GaussianOrder::Supported(k) => {
            let (ga, gb) = generating_params(n_v, sigma);
            a + b * -partial_sum(k, ga, gb)
        }
    }
}

pub(crate) fn warn_pmf_fallback(k: usize) {
    warn!(
        k,
        max_supported = MAX_PMF_ORDER,
        "gaussian point mass order out of range, using order 0"
    );
}

pub(crate) fn warn_survival_fallback(k: usize) {
    warn!(
        k,
        max_supported = MAX_SURVIVAL_ORDER,
        "gaussian survival order out of range, using order 0"
    );
}

/// Probability of exactly `k` points in a cell with expected count `n_v`
/// and normalized density fluctuation `sigma`.
///
/// Orders above [`MAX_PMF_ORDER`] return the order-0 value `B(nV, σ)`.
///
/// # Example
///
/// ```
/// use cellcount_analytic::{gaussian_pmf, poisson_pmf};
///
/// // No fluctuations: Poisson.
/// let g = gaussian_pmf(3, 2.0, 0.0);
/// assert!((g - poisson_pmf(3, 2.0)).abs() < 1e-15);
/// ```
pub fn gaussian_pmf(k: usize, n_v: f64, sigma: f64) -> f64 {
    let order = GaussianOrder::for_pmf(k);
    if !order.is_supported() {
        warn_pmf_fallback(k);
    }
    pmf_dispatched(order, n_v, sigma)
}

/// `P(count > k)` for the Gaussian field.
///
/// Orders above [`MAX_SURVIVAL_ORDER`] return the order-0 value `A(nV, σ)`.
pub fn gaussian_survival(k: usize, n_v: f64, sigma: f64) -> f64 {
    let order = GaussianOrder::for_survival(k);
    if !order.is_supported() {
        warn_survival_fallback(k);
    }
    survival_dispatched(order, n_v, sigma)
}

/// `P(count ≤ k)` for the Gaussian field, `1 − gaussian_survival`.
pub fn gaussian_cdf(k: usize, n_v: f64, sigma: f64) -> f64 {
    1.0 - gaussian_survival(k, n_v, sigma)
}
