//! Count models behind one interface.

use crate::gaussian::{
    MAX_PMF_ORDER, MAX_SURVIVAL_ORDER, gaussian_pmf, gaussian_survival,
};
use crate::poisson::{poisson_pmf, poisson_survival};

/// A counts-in-cells probability model parameterized by the expected count
/// `nV` of a cell.
///
/// # Example
///
/// ```
/// use cellcount_analytic::{CountModel, GaussianField, Poisson};
///
/// let models: [&dyn CountModel; 2] = [&Poisson, &GaussianField::new(0.2)];
/// for model in models {
///     let p: f64 = (0..=5).map(|k| model.pmf(k, 1.0)).sum();
///     assert!((p + model.survival(5, 1.0) - 1.0).abs() < 1e-12);
/// }
/// ```
pub trait CountModel {
    /// Probability of exactly `k` points.
    fn pmf(&self, k: usize, n_v: f64) -> f64;

    /// Probability of more than `k` points.
    fn survival(&self, k: usize, n_v: f64) -> f64;

    /// Probability of at most `k` points.
    fn cdf(&self, k: usize, n_v: f64) -> f64 {
        1.0 - self.survival(k, n_v)
    }

    /// Highest order [`CountModel::pmf`] evaluates faithfully, or `None` if
    /// unbounded.
    fn max_pmf_order(&self) -> Option<usize>;

    /// Highest order [`CountModel::survival`] evaluates faithfully, or `None`
    /// if unbounded.
    fn max_survival_order(&self) -> Option<usize>;
}

/// Poisson process.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Poisson;

impl CountModel for Poisson {
    fn pmf(&self, k: usize, n_v: f64) -> f64 {
        poisson_pmf(k, n_v)
    }

    fn survival(&self, k: usize, n_v: f64) -> f64 {
        poisson_survival(k, n_v)
    }

    fn max_pmf_order(&self) -> Option<usize> {
        None
    }

    fn max_survival_order(&self) -> Option<usize> {
        None
    }
}

/// Gaussian random density field with normalized fluctuation amplitude
/// `sigma`. Orders beyond the tabulated ranges fall back to order 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianField {
    sigma: f64,
}

impl GaussianField {
    /// Creates a field with the given fluctuation amplitude.
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }

    /// Fluctuation amplitude.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl CountModel for GaussianField {
    fn pmf(&self, k: usize, n_v: f64) -> f64 {
        gaussian_pmf(k, n_v, self.sigma)
    }

    fn survival(&self, k: usize, n_v: f64) -> f64 {
        gaussian_survival(k, n_v, self.sigma)
    }

    fn max_pmf_order(&self) -> Option<usize> {
        Some(MAX_PMF_ORDER)
    }

    fn max_survival_order(&self) -> Option<usize> {
        Some(MAX_SURVIVAL_ORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_sigma_field_matches_poisson() {
        let field = GaussianField::new(0.0);
        for k in 0..=10 {
            assert_abs_diff_eq!(field.pmf(k, 2.0), Poisson.pmf(k, 2.0), epsilon = 1e-14);
            assert_abs_diff_eq!(field.cdf(k, 2.0), Poisson.cdf(k, 2.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_order_limits() {
        assert_eq!(Poisson.max_pmf_order(), None);
        assert_eq!(Poisson.max_survival_order(), None);
        let field = GaussianField::new(0.1);
        assert_eq!(field.max_pmf_order(), Some(20));
        assert_eq!(field.max_survival_order(), Some(13));
        assert_eq!(field.sigma(), 0.1);
    }

    #[test]
    fn test_fluctuations_widen_distribution() {
        // Same mean count, larger variance: more mass in the far tail.
        let n_v = 3.0;
        let field = GaussianField::new(0.3);
        assert!(field.survival(10, n_v) > Poisson.survival(10, n_v));
    }
}
