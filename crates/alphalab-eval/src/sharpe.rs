//! Sharpe ratio.
//!
//! The Sharpe ratio is the mean excess return per period divided by the
//! sample standard deviation of returns, annualized by the square root of
//! the number of periods per year.

use alphalab_traits::stats::sample_moments;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Configuration for Sharpe ratio calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharpeConfig {
    /// Annual risk-free rate, converted to a per-period rate by dividing
    /// by `periods_per_year`.
    pub risk_free_rate: f64,
    /// Number of return periods in a year (252 for daily trading data).
    pub periods_per_year: u32,
}

impl Default for SharpeConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.0,
            periods_per_year: 252,
        }
    }
}

/// Sharpe ratio together with the moments it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpeRatio {
    /// Mean per-period return (`NaN` when there were no observations).
    pub mean_return: f64,
    /// Sample standard deviation of returns (`NaN` below two observations).
    pub std_return: f64,
    /// Annualized Sharpe ratio, `0.0` when undefined.
    pub sharpe: f64,
    /// Number of finite observations used.
    pub n_obs: usize,
}

impl SharpeRatio {
    /// Calculate the Sharpe ratio of a return series.
    ///
    /// Non-finite returns are skipped. The ratio is `0.0` when it cannot be
    /// defined: no observations, a single observation, volatility that is
    /// negligible relative to the size of the returns, or `periods_per_year == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use alphalab_eval::{SharpeConfig, SharpeRatio};
    ///
    /// let returns = [0.01, 0.02, -0.01, 0.015, 0.01];
    /// let result = SharpeRatio::calculate(&returns, &SharpeConfig::default());
    /// assert_eq!(result.n_obs, 5);
    /// assert!(result.sharpe > 0.0);
    /// ```
    pub fn calculate(returns: &[f64], config: &SharpeConfig) -> Self {
        let Some(moments) = sample_moments(returns) else {
            trace!("no finite returns, sharpe is 0.0");
            return Self {
                mean_return: f64::NAN,
                std_return: f64::NAN,
                sharpe: 0.0,
                n_obs: 0,
            };
        };

        let mut result = Self {
            mean_return: moments.mean,
            std_return: moments.std,
            sharpe: 0.0,
            n_obs: moments.n_obs,
        };

        if config.periods_per_year == 0 {
            warn!("periods_per_year is 0, cannot annualize; sharpe is 0.0");
            return result;
        }

        if !moments.has_dispersion() {
            trace!(n_obs = moments.n_obs, "returns have no volatility, sharpe is 0.0");
            return result;
        }

        let periods = f64::from(config.periods_per_year);
        let excess = moments.mean - config.risk_free_rate / periods;
        result.sharpe = excess / moments.std * periods.sqrt();
        result
    }
}

/// Calculate the annualized Sharpe ratio of a return series.
///
/// `risk_free_rate` is annual and is divided by `periods_per_year` before
/// being subtracted from the mean return. Use `0.0` and `252` for the usual
/// defaults, or [`SharpeConfig::default`] with [`SharpeRatio::calculate`].
///
/// Returns `0.0` for empty input and for constant returns.
///
/// # Example
///
/// ```
/// use alphalab_eval::sharpe_ratio;
///
/// assert_eq!(sharpe_ratio(&[], 0.0, 252), 0.0);
/// assert_eq!(sharpe_ratio(&[0.01, 0.01, 0.01], 0.0, 252), 0.0);
/// assert!(sharpe_ratio(&[0.01, 0.02, -0.01, 0.015, 0.01], 0.0, 252) > 0.0);
/// ```
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, periods_per_year: u32) -> f64 {
    let config = SharpeConfig {
        risk_free_rate,
        periods_per_year,
    };
    SharpeRatio::calculate(returns, &config).sharpe
}
