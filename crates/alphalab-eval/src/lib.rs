//! Signal diagnostics for AlphaLab.
//!
//! This crate provides the statistics used to judge a signal:
//! - Information Coefficient (IC): Pearson correlation between predicted
//!   signals and realized returns, plus a rank (Spearman) variant and a
//!   per-period series
//! - Sharpe ratio: annualized mean excess return over return volatility
//!
//! Undefined results (zero variance, too few observations) come back as
//! `0.0` so that downstream aggregation stays finite.
//!
//! # Example
//!
//! ```
//! use alphalab_eval::{information_coefficient, sharpe_ratio};
//!
//! let ic = information_coefficient(&[0.1, -0.2, 0.3, -0.1], &[0.08, -0.15, 0.28, -0.05]).unwrap();
//! assert!(ic > 0.9);
//!
//! let sharpe = sharpe_ratio(&[0.01, 0.02, -0.01, 0.015, 0.01], 0.0, 252);
//! assert!(sharpe > 0.0);
//! ```

pub mod ic;
pub mod sharpe;

// Re-export main types
pub use ic::{ic_series, information_coefficient, rank_information_coefficient};
pub use sharpe::{SharpeConfig, SharpeRatio, sharpe_ratio};
