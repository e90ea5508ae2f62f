//! Backtesting engine adapter.
//!
//! Backtesting engines all expose different APIs. An adapter hides one
//! engine behind a single operation that takes an [`Alpha`] and returns the
//! engine's report. AlphaLab ships no engine of its own.

use crate::{Alpha, Result};
use serde_json::{Map, Value};

/// Untyped engine report: a string-keyed map of arbitrary JSON values.
///
/// Use this as [`BacktestAdapter::Report`] for engines whose output has no
/// fixed shape (Sharpe ratio, drawdown, turnover, whatever the engine emits).
pub type EngineReport = Map<String, Value>;

/// Runs an [`Alpha`] through an external backtesting engine.
///
/// # Example
///
/// ```
/// use alphalab_traits::{Alpha, BacktestAdapter, EngineReport, Result, Symbol};
/// use serde_json::json;
///
/// struct CountingEngine;
///
/// impl BacktestAdapter for CountingEngine {
///     type Report = EngineReport;
///
///     fn run_alpha(&self, alpha: &Alpha) -> Result<EngineReport> {
///         let table = alpha.run(None)?;
///         let mut report = EngineReport::new();
///         report.insert("assets".into(), json!(table.len()));
///         Ok(report)
///     }
/// }
///
/// let alpha = Alpha::new("flat", |u: &[Symbol]| {
///     u.iter().map(|a| (a.clone(), 0.0)).collect::<Vec<_>>()
/// })
/// .with_universe(["AAPL"]);
///
/// let report = CountingEngine.run_alpha(&alpha).unwrap();
/// assert_eq!(report["assets"], 1);
/// ```
pub trait BacktestAdapter: Send + Sync {
    /// Result produced by the engine.
    type Report;

    /// Backtests `alpha` and returns the engine's report.
    ///
    /// # Errors
    ///
    /// Returns an error if the alpha cannot be run (for example
    /// [`AlphaLabError::EmptyUniverse`](crate::AlphaLabError::EmptyUniverse))
    /// or the engine fails, conventionally as
    /// [`AlphaLabError::Engine`](crate::AlphaLabError::Engine).
    fn run_alpha(&self, alpha: &Alpha) -> Result<Self::Report>;
}
