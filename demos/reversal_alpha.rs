//! Short-term reversal alpha, end to end.
//!
//! Builds an alpha that bets against last period's move, runs it over a
//! small universe, scores it against next-period returns and hands it to a
//! toy engine through `BacktestAdapter`.
//!
//! ```text
//! cargo run -p alphalab-demos --example reversal_alpha
//! ```

use alphalab::prelude::*;
use serde_json::json;
use std::collections::HashMap;

/// Trailing one-period returns, keyed by ticker.
fn trailing_returns() -> HashMap<&'static str, f64> {
    HashMap::from([
        ("AAPL", 0.021),
        ("MSFT", -0.012),
        ("GOOGL", 0.034),
        ("AMZN", -0.027),
        ("NVDA", 0.008),
    ])
}

/// Next-period realized returns, keyed by ticker.
fn forward_returns() -> HashMap<&'static str, f64> {
    HashMap::from([
        ("AAPL", -0.010),
        ("MSFT", 0.006),
        ("GOOGL", -0.018),
        ("AMZN", 0.015),
        ("NVDA", 0.001),
    ])
}

/// Toy engine: one unit long or short each asset by the sign of its signal,
/// marked against the forward return.
struct SignPnlEngine {
    forward: HashMap<&'static str, f64>,
}

impl BacktestAdapter for SignPnlEngine {
    type Report = EngineReport;

    fn run_alpha(&self, alpha: &Alpha) -> Result<EngineReport> {
        let table = alpha.run(None)?;

        let pnl: Vec<f64> = table
            .rows()?
            .into_iter()
            .map(|(asset, signal)| {
                let realized = self.forward.get(asset.as_str()).copied().unwrap_or(0.0);
                signal.signum() * realized
            })
            .collect();

        let mut report = EngineReport::new();
        report.insert("alpha".into(), json!(alpha.name()));
        report.insert("periods".into(), json!(pnl.len()));
        report.insert("total_pnl".into(), json!(pnl.iter().sum::<f64>()));
        report.insert("sharpe".into(), json!(sharpe_ratio(&pnl, 0.0, 252)));
        Ok(report)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("alphalab_traits=debug").init();

    let trailing = trailing_returns();
    let reversal = Alpha::new("short_term_reversal", move |universe: &[Symbol]| {
        universe
            .iter()
            .filter_map(|asset| trailing.get(asset.as_str()).map(|r| (asset.clone(), -r)))
            .collect::<Vec<_>>()
    })
    .with_universe(["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA"]);

    println!("{:#?}", reversal.metadata());

    let table = reversal.run(None)?;
    println!("{table}");

    let forward = forward_returns();
    let realized: Vec<f64> = table
        .assets()?
        .iter()
        .map(|asset| forward.get(asset.as_str()).copied().unwrap_or(f64::NAN))
        .collect();
    let signals = table.signals()?;

    println!("IC:      {:.4}", information_coefficient(&signals, &realized)?);
    println!("Rank IC: {:.4}", rank_information_coefficient(&signals, &realized)?);

    // Same alpha over a narrower universe, without rebuilding it
    let tech: Vec<Symbol> = vec!["AAPL".into(), "MSFT".into()];
    println!("{}", reversal.run(Some(tech.as_slice()))?);

    let engine = SignPnlEngine { forward };
    let report = engine.run_alpha(&reversal)?;
    println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());

    Ok(())
}
