//! Sharpe command implementation.

use super::{Report, fmt_stat};
use alphalab_eval::{SharpeConfig, SharpeRatio};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct SharpeReport {
    pub(crate) config: SharpeConfig,
    #[serde(flatten)]
    pub(crate) result: SharpeRatio,
}

impl Report for SharpeReport {
    fn render_text(&self) -> String {
        format!(
            "Sharpe Ratio\n{}\nObservations:     {}\nPeriods/year:     {}\nRisk-free (ann.): {}\nMean return:      {}\nStd return:       {}\nSharpe:           {}\n",
            "─".repeat(32),
            self.result.n_obs,
            self.config.periods_per_year,
            fmt_stat(self.config.risk_free_rate),
            fmt_stat(self.result.mean_return),
            fmt_stat(self.result.std_return),
            fmt_stat(self.result.sharpe)
        )
    }
}

/// Compute the annualized Sharpe ratio of a return series.
pub(crate) fn compute(returns: &[f64], config: SharpeConfig) -> SharpeReport {
    SharpeReport {
        result: SharpeRatio::calculate(returns, &config),
        config,
    }
}
