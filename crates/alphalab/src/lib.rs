#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/alphalab-rs/alphalab/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Crate Organization
//!
//! - [`traits`] - Core types ([`Alpha`], [`SignalTable`], [`BacktestAdapter`], errors)
//! - [`eval`] - Signal diagnostics (information coefficient, Sharpe ratio)
//!
//! ## Architecture
//!
//! The three pieces share data shapes but no state:
//!
//! 1. **Alphas** map a universe of assets to per-asset signal values
//! 2. **Diagnostics** score signals against realized returns
//! 3. **Adapters** hand an alpha to an external backtesting engine

/// Version information for the alphalab crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types and traits.
///
/// - [`Alpha`] - Named signal function with a default universe
/// - [`SignalTable`] - Per-asset signal values
/// - [`BacktestAdapter`] - Extension point for backtesting engines
pub mod traits {
    pub use alphalab_traits::*;
}

pub use alphalab_traits::{Alpha, AlphaMetadata, BacktestAdapter, EngineReport, SignalTable, Symbol};

// Re-export error types
pub use alphalab_traits::{AlphaLabError, Result};

// ============================================================================
// Diagnostics
// ============================================================================

/// Signal diagnostics.
///
/// ## Information Coefficient (IC)
///
/// Correlation between predicted signals and realized returns:
///
/// ```text
/// IC = corr(signal, realized_return)
/// ```
///
/// ## Sharpe Ratio
///
/// Annualized mean excess return over volatility:
///
/// ```text
/// Sharpe = (mean(r) - rf / N) / std(r) * sqrt(N)
/// ```
///
/// where `rf` is the annual risk-free rate and `N` the number of periods
/// per year.
///
/// # Example
///
/// ```
/// use alphalab::eval::{SharpeConfig, SharpeRatio};
///
/// let result = SharpeRatio::calculate(&[0.01, 0.02, -0.01, 0.015, 0.01], &SharpeConfig::default());
/// println!("Sharpe: {:.2} over {} periods", result.sharpe, result.n_obs);
/// ```
pub mod eval {
    pub use alphalab_eval::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use alphalab::prelude::*;
/// ```
///
/// This brings into scope:
/// - Core types: [`Alpha`], [`SignalTable`], [`Symbol`], [`BacktestAdapter`]
/// - Diagnostics: [`information_coefficient`], [`sharpe_ratio`] and friends
/// - Error types: [`Result`], [`AlphaLabError`]
pub mod prelude {
    pub use crate::eval::{
        SharpeConfig, SharpeRatio, ic_series, information_coefficient,
        rank_information_coefficient, sharpe_ratio,
    };
    pub use crate::{Alpha, AlphaMetadata, BacktestAdapter, EngineReport, SignalTable, Symbol};
    pub use crate::{AlphaLabError, Result};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::VERSION;
    use crate::prelude::*;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    fn constant(value: f64) -> Alpha {
        Alpha::new("constant", move |universe: &[Symbol]| {
            universe
                .iter()
                .map(|asset| (asset.clone(), value))
                .collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_constant_signal_covers_universe() {
        let universe: Vec<Symbol> = ["AAPL", "GOOGL", "MSFT", "TSLA"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table = constant(0.25).run(Some(&universe[..])).unwrap();

        assert_eq!(table.assets().unwrap(), universe);
        assert!(table.signals().unwrap().iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_no_universe_anywhere_fails() {
        let err = constant(1.0).run(None).unwrap_err();
        assert!(matches!(err, AlphaLabError::EmptyUniverse));
    }

    #[test]
    fn test_override_ignores_stored_universe() {
        let alpha = constant(1.0).with_universe(["AAPL", "MSFT"]);
        let custom = vec!["NVDA".to_string()];

        let table = alpha.run(Some(&custom[..])).unwrap();
        assert_eq!(table.assets().unwrap(), custom);
        assert_eq!(alpha.metadata().universe_size, 2);
    }

    #[test]
    fn test_signals_feed_diagnostics() {
        // Signals follow universe order, so they pair with realized returns by position
        let alpha = Alpha::new("scripted", |universe: &[Symbol]| {
            let scripted = [0.1, -0.2, 0.3, -0.1];
            universe
                .iter()
                .cloned()
                .zip(scripted)
                .collect::<Vec<_>>()
        })
        .with_universe(["AAPL", "GOOGL", "MSFT", "TSLA"]);

        let signals = alpha.run(None).unwrap().signals().unwrap();
        let realized = [0.08, -0.15, 0.28, -0.05];

        let ic = information_coefficient(&signals, &realized).unwrap();
        assert_abs_diff_eq!(ic, 0.995, epsilon = 1e-2);
    }

    #[test]
    fn test_sharpe_scenario() {
        let returns = [0.01, 0.02, -0.01, 0.015, 0.01];
        assert!(sharpe_ratio(&returns, 0.0, 252) > 0.0);
    }

    #[test]
    fn test_sharpe_strictly_positive_returns() {
        let returns = [0.001, 0.004, 0.002, 0.003];
        assert!(sharpe_ratio(&returns, 0.0, 252) > 0.0);
    }

    #[test]
    fn test_adapter_through_prelude() {
        struct SharpeEngine;

        impl BacktestAdapter for SharpeEngine {
            type Report = EngineReport;

            fn run_alpha(&self, alpha: &Alpha) -> Result<EngineReport> {
                // Treat the signal cross-section as a return stream
                let signals = alpha.run(None)?.signals()?;
                let mut report = EngineReport::new();
                report.insert("alpha".into(), json!(alpha.name()));
                report.insert("sharpe".into(), json!(sharpe_ratio(&signals, 0.0, 252)));
                Ok(report)
            }
        }

        let alpha = constant(0.01).with_universe(["AAPL", "MSFT"]);
        let report = SharpeEngine.run_alpha(&alpha).unwrap();
        assert_eq!(report["alpha"], "constant");
        assert_eq!(report["sharpe"], 0.0);
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let error = AlphaLabError::InvalidData("test".to_string());
        assert!(!error.is_invalid_input());
    }
}
