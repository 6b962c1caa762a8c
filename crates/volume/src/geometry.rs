//! Ball volumes in one, two and three dimensions.

use std::f64::consts::PI;

use crate::error::VolumeError;

/// Prefactor `C_D` in `V = C_D · r^D`.
///
/// | D | `C_D` | Shape |
/// |---|-------|-------|
/// | 1 | 2 | interval |
/// | 2 | π | disk |
/// | 3 | 4π/3 | ball |
///
/// # Errors
///
/// [`VolumeError::UnsupportedDimension`] outside `1..=3`.
pub fn ball_prefactor(n_dims: usize) -> Result<f64, VolumeError> {
    match n_dims {
        1 => Ok(2.0),
        2 => Ok(PI),
        3 => Ok(4.0 * PI / 3.0),
        _ => Err(VolumeError::UnsupportedDimension { n_dims }),
    }
}

/// Volume of the `n_dims`-ball of the given radius.
///
/// # Errors
///
/// [`VolumeError::UnsupportedDimension`] outside `1..=3`.
pub fn ball_volume(radius: f64, n_dims: usize) -> Result<f64, VolumeError> {
    let c = ball_prefactor(n_dims)?;
    Ok(c * radius.powi(n_dims as i32))
}

/// Radius of the `n_dims`-ball with the given volume.
///
/// # Errors
///
/// [`VolumeError::UnsupportedDimension`] outside `1..=3`.
pub fn ball_radius(volume: f64, n_dims: usize) -> Result<f64, VolumeError> {
    let c = ball_prefactor(n_dims)?;
    Ok((volume / c).powf(1.0 / n_dims as f64))
}
