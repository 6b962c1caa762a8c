//! k-th order distance selection.

/// Writes the distance to each requested neighbor order into `out`.
///
/// Partially orders `d2_sq` in place with `select_nth_unstable_by` around the
/// largest requested order, then sorts only the prefix in front of it, so the
/// cost is `O(n + k_max log k_max)` per query rather than a full sort.
///
/// `orders` are 1-based ranks; `out[c]` receives `sqrt` of the
/// `orders[c]`-th smallest squared distance. Ties are resolved by value only,
/// which is all a distance statistic needs.
///
/// # Panics
///
/// Debug-asserts that `orders` is non-empty and strictly increasing, that the
/// largest order is `<= d2_sq.len()`, and that `out.len() == orders.len()`.
pub(crate) fn select_orders(d2_sq: &mut [f64], orders: &[usize], out: &mut [f64]) {
    debug_assert!(!orders.is_empty());
    debug_assert!(orders.windows(2).all(|w| w[0] < w[1]));
    debug_assert_eq!(out.len(), orders.len());

    let k_max = orders[orders.len() - 1];
    debug_assert!(k_max >= 1 && k_max <= d2_sq.len());

    let (prefix, _, _) = d2_sq.select_nth_unstable_by(k_max - 1, f64::total_cmp);
    prefix.sort_unstable_by(f64::total_cmp);

    for (o, &k) in out.iter_mut().zip(orders.iter()) {
        *o = d2_sq[k - 1].sqrt();
    }
}
