//! Analytic counterparts of empirical k-th neighbor volume distributions.

use cellcount_analytic::CountModel;

/// `P(V_k ≤ volume)` under `model` for a process of number density
/// `density`.
///
/// The k-th neighbor lies inside a ball of volume `V` exactly when the ball
/// holds at least `k` points, so this is `P(count > k − 1)` at
/// `nV = density · volume`. The zeroth neighbor ball is empty and has
/// probability 1 for every volume.
///
/// # Example
///
/// ```
/// use cellcount::analytic_volume_cdf;
/// use cellcount_analytic::Poisson;
///
/// // First neighbor of a Poisson process: 1 − exp(−nV).
/// let p = analytic_volume_cdf(&Poisson, 1, 100.0, 0.01);
/// assert!((p - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
/// ```
pub fn analytic_volume_cdf<M: CountModel + ?Sized>(
    model: &M,
    k: usize,
    density: f64,
    volume: f64,
) -> f64 {
    match k {
        0 => 1.0,
        _ => model.survival(k - 1, density * volume),
    }
}
