//! Counts in cells of a Poisson process.

use statrs::function::gamma::{gamma_lr, ln_gamma};

/// Erlang-form kernel `(k·λ·x)^k · exp(−k·λ·x) / Γ(k)`, evaluated in log
/// space so neither the power nor the gamma function overflows.
///
/// For `k = 0` the kernel is `exp(−λ·x)`. A zero argument gives `0` for
/// `k > 0`. Negative `rate` or `x` give `NaN`.
pub fn erlang_pdf(k: usize, rate: f64, x: f64) -> f64 {
    if rate < 0.0 || x < 0.0 {
        return f64::NAN;
    }
    if k == 0 {
        return (-rate * x).exp();
    }
    let kf = k as f64;
    let klamx = kf * rate * x;
    if klamx == 0.0 {
        return 0.0;
    }
    (kf * klamx.ln() - klamx - ln_gamma(kf)).exp()
}

/// Probability of exactly `k` points in a cell with expected count `n_v`.
///
/// `k = 0` is `exp(−nV)`; larger `k` use the Erlang identity with
/// `λ = 1/k`, which reduces to `nV^k · exp(−nV) / k!` without ever forming
/// the factorial. Negative `n_v` gives `NaN`.
///
/// # Example
///
/// ```
/// use cellcount_analytic::poisson_pmf;
///
/// assert_eq!(poisson_pmf(0, 0.0), 1.0);
/// assert_eq!(poisson_pmf(3, 0.0), 0.0);
/// assert!((poisson_pmf(1, 1.0) - (-1.0f64).exp()).abs() < 1e-15);
/// ```
pub fn poisson_pmf(k: usize, n_v: f64) -> f64 {
    if n_v < 0.0 {
        return f64::NAN;
    }
    if k == 0 {
        return (-n_v).exp();
    }
    erlang_pdf(k, 1.0 / k as f64, n_v) / k as f64
}

/// `P(count > k)` for a Poisson process, the regularized lower incomplete
/// gamma function `P(k + 1, nV)`.
pub fn poisson_survival(k: usize, n_v: f64) -> f64 {
    if n_v.is_nan() || n_v < 0.0 {
        return f64::NAN;
    }
    if n_v == 0.0 {
        return 0.0;
    }
    if n_v.is_infinite() {
        return 1.0;
    }
    gamma_lr(k as f64 + 1.0, n_v)
}

/// `P(count ≤ k)` for a Poisson process.
pub fn poisson_cdf(k: usize, n_v: f64) -> f64 {
    1.0 - poisson_survival(k, n_v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_pinned_values() {
        let cases = [
            (0, 3.0, 0.049787068367863944),
            (1, 12.0, 7.373054823993849e-05),
            (3, 3.0, 0.22404180765538784),
            (10, 0.5, 1.6322616219566232e-10),
            (10, 3.0, 0.0008101511794681461),
            (10, 12.0, 0.10483725588365951),
        ];
        for (k, n_v, want) in cases {
            assert_relative_eq!(poisson_pmf(k, n_v), want, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_k_zero_is_exp() {
        for n_v in [0.0, 0.1, 1.0, 7.5, 40.0] {
            assert_eq!(poisson_pmf(0, n_v), (-n_v).exp());
        }
    }

    #[test]
    fn test_zero_expected_count() {
        assert_eq!(poisson_pmf(0, 0.0), 1.0);
        for k in 1..30 {
            assert_eq!(poisson_pmf(k, 0.0), 0.0);
        }
        assert_eq!(poisson_survival(0, 0.0), 0.0);
        assert_eq!(poisson_cdf(5, 0.0), 1.0);
    }

    #[test]
    fn test_large_order_no_overflow() {
        // 200^200 and 200! both overflow f64.
        let p = poisson_pmf(200, 200.0);
        assert!(p.is_finite());
        assert_relative_eq!(p, 0.028197727685921072, max_relative = 1e-10);
    }

    #[test]
    fn test_normalization() {
        for n_v in [0.3, 2.0, 9.0, 25.0] {
            let total: f64 = (0..200).map(|k| poisson_pmf(k, n_v)).sum();
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_survival_matches_pmf_tail() {
        for n_v in [0.5, 3.0, 12.0] {
            for k in [0, 1, 4, 10] {
                let tail: f64 = (k + 1..200).map(|i| poisson_pmf(i, n_v)).sum();
                assert_abs_diff_eq!(poisson_survival(k, n_v), tail, epsilon = 1e-12);
                assert_abs_diff_eq!(poisson_cdf(k, n_v), 1.0 - tail, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_erlang_conventions() {
        assert_eq!(erlang_pdf(0, 2.0, 1.5), (-3.0f64).exp());
        assert_eq!(erlang_pdf(4, 0.25, 0.0), 0.0);
        // k·λ = 1: kernel is x^k e^{-x} / Γ(k).
        assert_relative_eq!(
            erlang_pdf(3, 1.0 / 3.0, 2.0),
            8.0 * (-2.0f64).exp() / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_negative_inputs_are_nan() {
        assert!(poisson_pmf(0, -1.0).is_nan());
        assert!(poisson_pmf(3, -1.0).is_nan());
        assert!(poisson_survival(3, -1.0).is_nan());
        assert!(erlang_pdf(2, -1.0, 1.0).is_nan());
    }
}
