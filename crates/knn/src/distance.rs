//! Squared Euclidean distances, plain or minimum-image periodic.

/// Computes squared distances from `target` to every reference point.
///
/// For each reference row `i`:
/// ```text
/// out[i] = Σⱼ δ(reference[i × n_dims + j], target[j])²
/// ```
/// where `δ(x, y) = x − y` for the open metric and, with box length `L`,
/// `δ = min(|x − y| mod L, L − |x − y| mod L)`. Axes with `L = 0` stay open.
///
/// Dispatches to specialised implementations for 1D, 2D and 3D.
///
/// # Panics
///
/// Debug-asserts that `reference.len() % n_dims == 0`, `target.len() == n_dims`,
/// `box_lengths.len() == n_dims` when present, and
/// `out.len() == reference.len() / n_dims`.
pub(crate) fn sq_distances(
    reference: &[f64],
    n_dims: usize,
    target: &[f64],
    box_lengths: Option<&[f64]>,
    out: &mut [f64],
) {
    debug_assert_eq!(reference.len() % n_dims, 0);
    debug_assert_eq!(target.len(), n_dims);
    debug_assert_eq!(out.len(), reference.len() / n_dims);

    match box_lengths {
        None => match n_dims {
            1 => sq_dist_1d(reference, target[0], out),
            2 => sq_dist_2d(reference, target, out),
            3 => sq_dist_3d(reference, target, out),
            _ => sq_dist_nd(reference, n_dims, target, out),
        },
        Some(lengths) => {
            debug_assert_eq!(lengths.len(), n_dims);
            sq_dist_periodic(reference, n_dims, target, lengths, out)
        }
    }
}

/// Minimum-image separation along one axis of length `length`. A zero
/// length is an open axis.
#[inline]
pub(crate) fn wrap(delta: f64, length: f64) -> f64 {
    if length == 0.0 {
        return delta.abs();
    }
    let d = delta.abs().rem_euclid(length);
    d.min(length - d)
}

#[inline]
fn sq_dist_1d(reference: &[f64], target: f64, out: &mut [f64]) {
    for (o, &r) in out.iter_mut().zip(reference.iter()) {
        let d = r - target;
        *o = d * d;
    }
}

#[inline]
fn sq_dist_2d(reference: &[f64], target: &[f64], out: &mut [f64]) {
    let t0 = target[0];
    let t1 = target[1];
    for (o, row) in out.iter_mut().zip(reference.chunks_exact(2)) {
        let d0 = row[0] - t0;
        let d1 = row[1] - t1;
        *o = d0 * d0 + d1 * d1;
    }
}

#[inline]
fn sq_dist_3d(reference: &[f64], target: &[f64], out: &mut [f64]) {
    let t0 = target[0];
    let t1 = target[1];
    let t2 = target[2];
    for (o, row) in out.iter_mut().zip(reference.chunks_exact(3)) {
        let d0 = row[0] - t0;
        let d1 = row[1] - t1;
        let d2 = row[2] - t2;
        *o = d0 * d0 + d1 * d1 + d2 * d2;
    }
}

#[inline]
fn sq_dist_nd(reference: &[f64], n_dims: usize, target: &[f64], out: &mut [f64]) {
    for (o, row) in out.iter_mut().zip(reference.chunks_exact(n_dims)) {
        *o = row
            .iter()
            .zip(target.iter())
            .map(|(r, t)| (r - t) * (r - t))
            .sum();
    }
}

#[inline]
fn sq_dist_periodic(
    reference: &[f64],
    n_dims: usize,
    target: &[f64],
    lengths: &[f64],
    out: &mut [f64],
) {
    for (o, row) in out.iter_mut().zip(reference.chunks_exact(n_dims)) {
        let mut acc = 0.0;
        for j in 0..n_dims {
            let d = wrap(row[j] - target[j], lengths[j]);
            acc += d * d;
        }
        *o = acc;
    }
}
