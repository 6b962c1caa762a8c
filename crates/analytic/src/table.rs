//! Series coefficients of the Gaussian-field generating function.
//!
//! Counts in a Gaussian random field have the generating function
//! `G(x) = exp(a·x + b·x²)` up to the common factor `B`, with
//! `a = nV·(1 − nV·σ²)` and `b = nV²·σ²/2`. Its k-th series coefficient is
//!
//! ```text
//! c_k = Σ_{j=0}^{⌊k/2⌋} a^(k−2j) · b^j / ((k−2j)! · j!)
//! ```
//!
//! Every per-order closed form is `B·c_k` or a partial sum of them, so one
//! table of rational weights covers the whole hierarchy.

/// Highest order the weight table covers.
pub(crate) const TABLE_ORDER: usize = 20;

/// `n!` for `n = 0..=20`. `20!` is the largest factorial that fits in `u64`.
const FACTORIALS: [u64; TABLE_ORDER + 1] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

/// Weight `1 / ((k − 2j)! · j!)` of the term `a^(k−2j) · b^j` in `c_k`.
fn weight(k: usize, j: usize) -> f64 {
    1.0 / (FACTORIALS[k - 2 * j] as f64 * FACTORIALS[j] as f64)
}

/// Shape parameters `(a, b)` of the generating function.
pub(crate) fn generating_params(n_v: f64, sigma: f64) -> (f64, f64) {
    let s2 = sigma * sigma;
    (n_v * (1.0 - n_v * s2), 0.5 * n_v * n_v * s2)
}

/// Series coefficient `c_k` for `k <= TABLE_ORDER`.
///
/// Terms are summed from the highest power of `b` down so the small
/// high-`j` terms accumulate first.
pub(crate) fn coefficient(k: usize, a: f64, b: f64) -> f64 {
    debug_assert!(k <= TABLE_ORDER);
    (0..=k / 2)
        .rev()
        .map(|j| weight(k, j) * a.powi((k - 2 * j) as i32) * b.powi(j as i32))
        .sum()
}

/// `Σ_{i=1}^{k} c_i`.
pub(crate) fn partial_sum(k: usize, a: f64, b: f64) -> f64 {
    (1..=k).map(|i| coefficient(i, a, b)).sum()
}
