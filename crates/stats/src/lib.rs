//! Order statistics shared by the cellcount crates.
//!
//! Every function taking a `sorted` argument expects ascending input; none
//! of them re-sort.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    match data.len() {
        0 => 0.0,
        n => data.iter().sum::<f64>() / n as f64,
    }
}

/// Ascending copy of `data` under [`f64::total_cmp`].
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_unstable_by(f64::total_cmp);
    out
}

/// Type-7 quantile (linear interpolation between order statistics at
/// `h = (n − 1)·p`). `p` is clamped to `[0, 1]`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "quantile of an empty sample");
    let last = sorted.len() - 1;
    let h = last as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    if lo >= last {
        return sorted[last];
    }
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

/// Right-continuous step ECDF: the fraction of `sorted` that is `<= x`.
/// Returns 0.0 for an empty sample.
pub fn ecdf_step(sorted: &[f64], x: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.partition_point(|&s| s <= x) as f64 / sorted.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_relative_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }

    #[test]
    fn test_sorted_total_order() {
        assert_eq!(sorted(&[0.3, -1.0, 0.0, 2.5]), vec![-1.0, 0.0, 0.3, 2.5]);
        assert!(sorted(&[]).is_empty());
    }

    #[test]
    fn test_quantile_endpoints_and_clamp() {
        let s = [10.0, 20.0, 40.0];
        assert_eq!(quantile_type7(&s, 0.0), 10.0);
        assert_eq!(quantile_type7(&s, 1.0), 40.0);
        assert_eq!(quantile_type7(&s, -3.0), 10.0);
        assert_eq!(quantile_type7(&s, 7.0), 40.0);
        assert_eq!(quantile_type7(&[5.0], 0.4), 5.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let s = [10.0, 20.0, 40.0];
        // h = 2·0.75 = 1.5, halfway between 20 and 40.
        assert_relative_eq!(quantile_type7(&s, 0.75), 30.0, epsilon = 1e-12);
        let s: Vec<f64> = (0..=100).map(f64::from).collect();
        assert_relative_eq!(quantile_type7(&s, 0.375), 37.5, epsilon = 1e-12);
    }

    #[test]
    fn test_ecdf_step_with_ties() {
        let s = [1.0, 2.0, 2.0, 4.0];
        assert_eq!(ecdf_step(&s, 0.5), 0.0);
        assert_eq!(ecdf_step(&s, 1.0), 0.25);
        assert_eq!(ecdf_step(&s, 2.0), 0.75);
        assert_eq!(ecdf_step(&s, 3.9), 0.75);
        assert_eq!(ecdf_step(&s, 4.0), 1.0);
        assert_eq!(ecdf_step(&[], 1.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "quantile of an empty sample")]
    fn test_quantile_empty_panics() {
        quantile_type7(&[], 0.5);
    }
}
