//! Information Coefficient (IC) calculations.
//!
//! IC measures the linear (Pearson) correlation between predicted signals and
//! realized returns. It is the standard first check of a signal's
//! predictive power.

use alphalab_traits::stats::{finite_pairs, max_abs, negligible_std};
use alphalab_traits::{AlphaLabError, Result};
use ndarray::ArrayView1;
use std::cmp::Ordering;
use tracing::trace;

/// Calculate the Information Coefficient between predicted signals and
/// realized returns.
///
/// Only position matters: `predicted[i]` is paired with `realized[i]`.
/// Pairs where either side is NaN or infinite are skipped. Values range
/// from -1 to 1, where:
/// - Positive values indicate the signal predicts returns in the correct direction
/// - Negative values indicate inverse correlation
/// - Values near zero indicate no predictive power
///
/// When the correlation is undefined (fewer than two usable pairs, or one
/// side has no variance) the result is exactly `0.0`.
///
/// # Errors
///
/// Returns [`AlphaLabError::LengthMismatch`] if the inputs differ in length.
///
/// # Example
///
/// ```
/// use alphalab_eval::information_coefficient;
///
/// let signals = [0.1, -0.2, 0.3, -0.1];
/// let returns = [0.08, -0.15, 0.28, -0.05];
/// let ic = information_coefficient(&signals, &returns).unwrap();
/// assert!((ic - 0.995).abs() < 1e-2);
/// ```
pub fn information_coefficient(predicted: &[f64], realized: &[f64]) -> Result<f64> {
    check_lengths(predicted.len(), realized.len())?;

    let (x, y) = finite_pairs(predicted, realized);
    Ok(correlation_or_zero(&x, &y))
}

/// Calculate the rank Information Coefficient (Spearman correlation).
///
/// Both sequences are converted to ranks, with tied values sharing their
/// average rank, and then correlated. Rank IC is less sensitive to outliers
/// than [`information_coefficient`]. Same length check and same `0.0`
/// fallback.
///
/// # Errors
///
/// Returns [`AlphaLabError::LengthMismatch`] if the inputs differ in length.
///
/// # Example
///
/// ```
/// use alphalab_eval::rank_information_coefficient;
///
/// // Monotonic but non-linear
/// let ic = rank_information_coefficient(&[1.0, 2.0, 3.0, 4.0], &[1.0, 8.0, 27.0, 64.0]).unwrap();
/// assert!((ic - 1.0).abs() < 1e-12);
/// ```
pub fn rank_information_coefficient(predicted: &[f64], realized: &[f64]) -> Result<f64> {
    check_lengths(predicted.len(), realized.len())?;

    let (x, y) = finite_pairs(predicted, realized);
    Ok(correlation_or_zero(&compute_ranks(&x), &compute_ranks(&y)))
}

/// Calculate the IC for each period of a panel.
///
/// `predicted[t]` and `realized[t]` hold the cross-section for period `t`.
///
/// # Errors
///
/// Returns [`AlphaLabError::LengthMismatch`] if the number of periods
/// differs, or if any period's cross-sections differ in length.
///
/// # Example
///
/// ```
/// use alphalab_eval::ic_series;
///
/// let signals = vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]];
/// let returns = vec![vec![0.01, 0.02, 0.03], vec![0.01, 0.02, 0.03]];
/// let ics = ic_series(&signals, &returns).unwrap();
/// assert_eq!(ics.len(), 2);
/// ```
pub fn ic_series(predicted: &[Vec<f64>], realized: &[Vec<f64>]) -> Result<Vec<f64>> {
    check_lengths(predicted.len(), realized.len())?;

    predicted
        .iter()
        .zip(realized.iter())
        .map(|(p, r)| information_coefficient(p, r))
        .collect()
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(AlphaLabError::LengthMismatch { left, right })
    }
}

fn correlation_or_zero(x: &[f64], y: &[f64]) -> f64 {
    pearson_correlation(x, y).unwrap_or_else(|| {
        trace!(n_obs = x.len(), "correlation undefined, returning 0.0");
        0.0
    })
}

/// Pearson correlation of two equal-length slices, `None` when undefined.
fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() < 2 || x.len() != y.len() {
        return None;
    }

    let (scale_x, scale_y) = (max_abs(x), max_abs(y));
    let x = ArrayView1::from(x);
    let y = ArrayView1::from(y);
    let dx = &x - x.mean()?;
    let dy = &y - y.mean()?;

    let ss_x = dx.dot(&dx);
    let ss_y = dy.dot(&dy);

    // Variance is judged relative to each side's magnitude
    let dof = (x.len() - 1) as f64;
    if negligible_std((ss_x / dof).sqrt(), scale_x) || negligible_std((ss_y / dof).sqrt(), scale_y) {
        return None;
    }

    let r = dx.dot(&dy) / (ss_x.sqrt() * ss_y.sqrt());
    Some(r.clamp(-1.0, 1.0))
}

/// Compute ranks of values (handling ties with average rank).
///
/// Only bit-identical values tie.
fn compute_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut indexed: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();

    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0.0; n];
    let mut i = 0;

    while i < n {
        let mut j = i;
        while j < n && indexed[j].1.total_cmp(&indexed[i].1) == Ordering::Equal {
            j += 1;
        }

        let avg_rank = (i + j - 1) as f64 / 2.0;
        for &(idx, _) in &indexed[i..j] {
            ranks[idx] = avg_rank;
        }

        i = j;
    }

    ranks
}
