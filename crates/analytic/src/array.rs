//! Array entry points with length-1 broadcasting.
//!
//! Each element is independent, so evaluation is spread over the rayon
//! pool. Outputs keep the element order of the inputs. Unlike the scalar
//! functions, these validate their inputs and report the first bad element.

use rayon::prelude::*;

use crate::error::AnalyticError;
use crate::gaussian::{
    GaussianOrder, pmf_dispatched, survival_dispatched, warn_pmf_fallback,
    warn_survival_fallback,
};
use crate::poisson::{poisson_pmf, poisson_survival};

/// Broadcast length of two inputs: equal lengths, or one of them length 1.
fn broadcast_len(n_v: &[f64], sigma: &[f64]) -> Result<usize, AnalyticError> {
    match (n_v.len(), sigma.len()) {
        (a, b) if a == b => Ok(a),
        (1, b) => Ok(b),
        (a, 1) => Ok(a),
        (a, b) => Err(AnalyticError::ShapeMismatch {
            n_v_len: a,
            sigma_len: b,
        }),
    }
}

fn validate_n_v(n_v: &[f64]) -> Result<(), AnalyticError> {
    for (index, &value) in n_v.iter().enumerate() {
        if !value.is_finite() {
            return Err(AnalyticError::NonFiniteInput { input: "nV", index });
        }
        if value < 0.0 {
            return Err(AnalyticError::NegativeExpectedCount { index, value });
        }
    }
    Ok(())
}

fn validate_sigma(sigma: &[f64]) -> Result<(), AnalyticError> {
    for (index, &value) in sigma.iter().enumerate() {
        if !value.is_finite() {
            return Err(AnalyticError::NonFiniteInput {
                input: "sigma",
                index,
            });
        }
        if value < 0.0 {
            return Err(AnalyticError::NegativeSigma { index, value });
        }
    }
    Ok(())
}

/// Element `i` of an input broadcast to length `n`.
fn at(values: &[f64], i: usize) -> f64 {
    if values.len() == 1 { values[0] } else { values[i] }
}

fn evaluate_pair<F>(n_v: &[f64], sigma: &[f64], f: F) -> Result<Vec<f64>, AnalyticError>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let n = broadcast_len(n_v, sigma)?;
    validate_n_v(n_v)?;
    validate_sigma(sigma)?;
    Ok((0..n)
        .into_par_iter()
        .map(|i| f(at(n_v, i), at(sigma, i)))
        .collect())
}

/// [`crate::poisson_pmf`] over an array of expected counts.
///
/// # Errors
///
/// [`AnalyticError::NonFiniteInput`] or
/// [`AnalyticError::NegativeExpectedCount`] for the first bad element.
#[tracing::instrument(skip_all, fields(k = k, n = n_v.len()))]
pub fn poisson_pmf_array(k: usize, n_v: &[f64]) -> Result<Vec<f64>, AnalyticError> {
    validate_n_v(n_v)?;
    Ok(n_v.par_iter().map(|&x| poisson_pmf(k, x)).collect())
}

/// [`crate::poisson_survival`] over an array of expected counts.
///
/// # Errors
///
/// As for [`poisson_pmf_array`].
#[tracing::instrument(skip_all, fields(k = k, n = n_v.len()))]
pub fn poisson_survival_array(k: usize, n_v: &[f64]) -> Result<Vec<f64>, AnalyticError> {
    validate_n_v(n_v)?;
    Ok(n_v.par_iter().map(|&x| poisson_survival(k, x)).collect())
}

/// [`crate::gaussian_pmf`] over broadcast arrays of expected counts and
/// fluctuation amplitudes.
///
/// An out-of-range `k` falls back to order 0 and is logged once per call.
///
/// # Errors
///
/// [`AnalyticError::ShapeMismatch`] if the lengths cannot be broadcast,
/// otherwise the first invalid element.
///
/// # Example
///
/// ```
/// use cellcount_analytic::gaussian_pmf_array;
///
/// let p = gaussian_pmf_array(2, &[0.5, 1.0, 2.0], &[0.1]).unwrap();
/// assert_eq!(p.len(), 3);
/// ```
#[tracing::instrument(skip_all, fields(k = k, n_v_len = n_v.len(), sigma_len = sigma.len()))]
pub fn gaussian_pmf_array(k: usize, n_v: &[f64], sigma: &[f64]) -> Result<Vec<f64>, AnalyticError> {
    let order = GaussianOrder::for_pmf(k);
    let values = evaluate_pair(n_v, sigma, |x, s| pmf_dispatched(order, x, s))?;
    if !order.is_supported() {
        warn_pmf_fallback(k);
    }
    Ok(values)
}

/// [`crate::gaussian_survival`] over broadcast arrays.
///
/// An out-of-range `k` falls back to order 0 and is logged once per call.
///
/// # Errors
///
/// As for [`gaussian_pmf_array`].
#[tracing::instrument(skip_all, fields(k = k, n_v_len = n_v.len(), sigma_len = sigma.len()))]
pub fn gaussian_survival_array(
    k: usize,
    n_v: &[f64],
    sigma: &[f64],
) -> Result<Vec<f64>, AnalyticError> {
    let order = GaussianOrder::for_survival(k);
    let values = evaluate_pair(n_v, sigma, |x, s| survival_dispatched(order, x, s))?;
    if !order.is_supported() {
        warn_survival_fallback(k);
    }
    Ok(values)
}

/// [`crate::gaussian_cdf`] over broadcast arrays.
///
/// # Errors
///
/// As for [`gaussian_pmf_array`].
pub fn gaussian_cdf_array(k: usize, n_v: &[f64], sigma: &[f64]) -> Result<Vec<f64>, AnalyticError> {
    let mut values = gaussian_survival_array(k, n_v, sigma)?;
    for v in values.iter_mut() {
        *v = 1.0 - *v;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::{gaussian_pmf, gaussian_survival};

    #[test]
    fn test_broadcast_len() {
        assert_eq!(broadcast_len(&[1.0, 2.0], &[0.1, 0.2]).unwrap(), 2);
        assert_eq!(broadcast_len(&[1.0], &[0.1, 0.2, 0.3]).unwrap(), 3);
        assert_eq!(broadcast_len(&[1.0, 2.0], &[0.1]).unwrap(), 2);
        assert_eq!(broadcast_len(&[], &[]).unwrap(), 0);
        assert_eq!(broadcast_len(&[], &[0.1]).unwrap(), 0);
        assert!(matches!(
            broadcast_len(&[1.0, 2.0], &[0.1, 0.2, 0.3]),
            Err(AnalyticError::ShapeMismatch {
                n_v_len: 2,
                sigma_len: 3
            })
        ));
    }

    #[test]
    fn test_gaussian_arrays_match_scalars() {
        let n_v = [0.0, 0.5, 1.0, 4.0, 9.0];
        let sigma = [0.0, 0.1, 0.2, 0.05, 0.3];
        let pmf = gaussian_pmf_array(4, &n_v, &sigma).unwrap();
        let surv = gaussian_survival_array(4, &n_v, &sigma).unwrap();
        let cdf = gaussian_cdf_array(4, &n_v, &sigma).unwrap();
        for i in 0..n_v.len() {
            assert_eq!(pmf[i], gaussian_pmf(4, n_v[i], sigma[i]));
            assert_eq!(surv[i], gaussian_survival(4, n_v[i], sigma[i]));
            assert_eq!(cdf[i], 1.0 - surv[i]);
        }
    }

    #[test]
    fn test_scalar_sigma_broadcast() {
        let n_v = [0.5, 1.5, 2.5];
        let p = gaussian_pmf_array(1, &n_v, &[0.2]).unwrap();
        for (i, &x) in n_v.iter().enumerate() {
            assert_eq!(p[i], gaussian_pmf(1, x, 0.2));
        }
    }

    #[test]
    fn test_array_fallback() {
        let n_v = [1.0, 2.0];
        let sigma = [0.1, 0.2];
        assert_eq!(
            gaussian_pmf_array(30, &n_v, &sigma).unwrap(),
            gaussian_pmf_array(0, &n_v, &sigma).unwrap()
        );
        assert_eq!(
            gaussian_survival_array(14, &n_v, &sigma).unwrap(),
            gaussian_survival_array(0, &n_v, &sigma).unwrap()
        );
    }

    #[test]
    fn test_poisson_arrays() {
        let n_v = [0.0, 1.0, 3.0];
        let p = poisson_pmf_array(2, &n_v).unwrap();
        let s = poisson_survival_array(2, &n_v).unwrap();
        for i in 0..3 {
            assert_eq!(p[i], poisson_pmf(2, n_v[i]));
            assert_eq!(s[i], poisson_survival(2, n_v[i]));
        }
        assert!(poisson_pmf_array(2, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            poisson_pmf_array(1, &[1.0, -2.0]),
            Err(AnalyticError::NegativeExpectedCount {
                index: 1,
                value
            }) if value == -2.0
        ));
        assert!(matches!(
            gaussian_pmf_array(1, &[1.0], &[0.1, -0.1]),
            Err(AnalyticError::NegativeSigma { index: 1, .. })
        ));
        assert!(matches!(
            gaussian_survival_array(1, &[f64::NAN], &[0.1]),
            Err(AnalyticError::NonFiniteInput {
                input: "nV",
                index: 0
            })
        ));
        assert!(matches!(
            gaussian_cdf_array(1, &[1.0], &[f64::INFINITY]),
            Err(AnalyticError::NonFiniteInput {
                input: "sigma",
                index: 0
            })
        ));
    }
}
