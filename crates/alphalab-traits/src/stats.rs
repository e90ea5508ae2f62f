//! Statistical utility functions shared by the diagnostics.
//!
//! Everything here skips non-finite observations, the same way a labeled
//! series skips missing values when computing moments.

use ndarray::ArrayView1;

/// Relative tolerance below which a standard deviation is treated as zero.
///
/// The cutoff is `RELATIVE_STD_TOLERANCE * max|x|`, so it follows the units
/// of the data: rescaling a series never changes whether it has variance.
/// Equal to `f64::EPSILON.sqrt()` (2^-26).
pub const RELATIVE_STD_TOLERANCE: f64 = 1.0 / 67_108_864.0;

/// Sample moments of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleMoments {
    /// Arithmetic mean of the finite observations.
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator). `NaN` for a single
    /// observation.
    pub std: f64,
    /// Number of finite observations used.
    pub n_obs: usize,
    /// Largest absolute finite observation.
    pub scale: f64,
}

impl SampleMoments {
    /// Whether the standard deviation is large enough to divide by.
    pub fn has_dispersion(&self) -> bool {
        !negligible_std(self.std, self.scale)
    }
}

/// Whether `std` is indistinguishable from zero for data whose largest
/// magnitude is `scale`.
///
/// Non-finite `std` (fewer than two observations) counts as negligible.
pub const fn negligible_std(std: f64, scale: f64) -> bool {
    !std.is_finite() || std <= RELATIVE_STD_TOLERANCE * scale
}

/// Largest absolute value in `values`, `0.0` when empty.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Returns the finite values of `values`, in order.
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|x| x.is_finite()).collect()
}

/// Returns the pairs where both sides are finite, split back into two
/// aligned vectors.
///
/// Only the first `min(x.len(), y.len())` positions are considered.
pub fn finite_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .unzip()
}

/// Computes the mean and sample standard deviation of the finite values.
///
/// Returns `None` when there are no finite observations.
///
/// # Examples
///
/// ```
/// use alphalab_traits::stats::sample_moments;
///
/// let moments = sample_moments(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((moments.mean - 3.0).abs() < 1e-12);
/// assert_eq!(moments.n_obs, 5);
/// ```
pub fn sample_moments(values: &[f64]) -> Option<SampleMoments> {
    let finite = finite_values(values);
    let view = ArrayView1::from(finite.as_slice());

    let mean = view.mean()?;
    // ddof=1 needs at least two observations
    let std = if view.len() > 1 { view.std(1.0) } else { f64::NAN };

    Some(SampleMoments {
        mean,
        std,
        n_obs: view.len(),
        scale: max_abs(&finite),
    })
}
