//! Immutable point sets stored as flat row-major coordinates.

use crate::error::KnnError;

/// An ordered, immutable collection of points in `n_dims` dimensions.
///
/// Coordinates are stored row-major: point `i` occupies
/// `coords[i * n_dims..(i + 1) * n_dims]`.
///
/// # Example
///
/// ```
/// use cellcount_knn::PointSet;
///
/// let points = PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.5]]).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.n_dims(), 2);
/// assert_eq!(points.point(1), &[1.0, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    coords: Vec<f64>,
    n_dims: usize,
}

impl PointSet {
    /// Creates a point set from flat row-major coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError`] if `n_dims` is zero, the coordinates are empty or
    /// not a whole number of rows, or any coordinate is non-finite.
    pub fn new(coords: Vec<f64>, n_dims: usize) -> Result<Self, KnnError> {
        if n_dims == 0 {
            return Err(KnnError::InvalidDimension { n_dims });
        }
        if coords.is_empty() {
            return Err(KnnError::EmptyPoints { input: "point" });
        }
        if !coords.len().is_multiple_of(n_dims) {
            return Err(KnnError::ShapeMismatch {
                len: coords.len(),
                n_dims,
            });
        }
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "point" });
        }
        Ok(Self { coords, n_dims })
    }

    /// Creates a point set from fixed-width rows; the dimension is the row width.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PointSet::new`].
    pub fn from_rows<const D: usize>(rows: &[[f64; D]]) -> Result<Self, KnnError> {
        let coords = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::new(coords, D)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coords.len() / self.n_dims
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of coordinates per point.
    pub fn n_dims(&self) -> usize {
        self.n_dims
    }

    /// Flat row-major coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Coordinates of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn point(&self, i: usize) -> &[f64] {
        &self.coords[i * self.n_dims..(i + 1) * self.n_dims]
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.coords.chunks_exact(self.n_dims)
    }
}
