//! Empirical cumulative distribution function.

use cellcount_stats::{ecdf_step, mean, quantile_type7, sorted};
use tracing::debug;

use crate::config::{Compression, EcdfConfig};
use crate::error::EcdfError;

/// An empirical distribution built from a finite sample.
///
/// Without compression the CDF is the exact step function
/// `F(x) = #{s ≤ x} / n`. With [`Compression::Interpolate`] only `m` knots
/// `q_i = Q(i / (m − 1))` are kept (type-7 quantiles of the sample) and
/// `F` interpolates linearly between `(q_i, i / (m − 1))`. Samples no larger
/// than `m` are never compressed.
///
/// # Example
///
/// ```
/// use cellcount_ecdf::{Compression, EmpiricalCdf};
///
/// let cdf = EmpiricalCdf::build(&[3.0, 1.0, 2.0, 4.0], Compression::None, 500).unwrap();
/// assert_eq!(cdf.cdf(2.5), 0.5);
/// assert_eq!(cdf.peaked_cdf(3.5), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalCdf {
    /// Ascending sample values, or quantile knots when compressed.
    knots: Vec<f64>,
    /// Whether `knots` are interpolation knots.
    interpolated: bool,
    /// Size of the original sample.
    n_samples: usize,
    /// Mean of the original sample.
    mean: f64,
}

impl EmpiricalCdf {
    /// Builds the distribution of `samples`.
    ///
    /// # Errors
    ///
    /// [`EcdfError::EmptySample`], [`EcdfError::NonFiniteSample`], or
    /// [`EcdfError::InvalidInterpolantCount`] when `n_interpolants < 2`.
    pub fn build(
        samples: &[f64],
        compression: Compression,
        n_interpolants: usize,
    ) -> Result<Self, EcdfError> {
        EcdfConfig::new()
            .with_compression(compression)
            .with_n_interpolants(n_interpolants)
            .validate()?;
        if samples.is_empty() {
            return Err(EcdfError::EmptySample);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(EcdfError::NonFiniteSample { index });
        }

        let all = sorted(samples);
        let interpolated =
            compression == Compression::Interpolate && samples.len() > n_interpolants;
        let knots = if interpolated {
            let last = (n_interpolants - 1) as f64;
            (0..n_interpolants)
                .map(|i| quantile_type7(&all, i as f64 / last))
                .collect()
        } else {
            all
        };
        debug!(
            n_samples = samples.len(),
            n_knots = knots.len(),
            interpolated,
            "built empirical cdf"
        );

        Ok(Self {
            knots,
            interpolated,
            n_samples: samples.len(),
            mean: mean(samples),
        })
    }

    /// `P(X ≤ x)`.
    pub fn cdf(&self, x: f64) -> f64 {
        if !self.interpolated {
            return ecdf_step(&self.knots, x);
        }
        let m = self.knots.len();
        if x < self.knots[0] {
            return 0.0;
        }
        if x >= self.knots[m - 1] {
            return 1.0;
        }
        // knots[j] <= x < knots[j + 1], and the upper knot is strictly larger.
        let j = self.knots.partition_point(|&k| k <= x) - 1;
        let (lo, hi) = (self.knots[j], self.knots[j + 1]);
        let step = 1.0 / (m - 1) as f64;
        (j as f64 + (x - lo) / (hi - lo)) * step
    }

    /// `min(F(x), 1 − F(x))`, the folded CDF that peaks at the median.
    pub fn peaked_cdf(&self, x: f64) -> f64 {
        let f = self.cdf(x);
        f.min(1.0 - f)
    }

    /// Evaluates [`EmpiricalCdf::cdf`] at every point of `xs`.
    pub fn cdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Type-7 quantile of the stored values at probability `p` (clamped to
    /// `[0, 1]`). For a compressed distribution this is the inverse of the
    /// piecewise-linear CDF.
    pub fn quantile(&self, p: f64) -> f64 {
        quantile_type7(&self.knots, p)
    }

    /// Mean of the original sample.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Smallest sample value.
    pub fn min(&self) -> f64 {
        self.knots[0]
    }

    /// Largest sample value.
    pub fn max(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    /// Size of the original sample.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Stored values: the sorted sample, or the knots when compressed.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Whether the distribution was compressed to interpolation knots.
    pub fn is_interpolated(&self) -> bool {
        self.interpolated
    }
}
