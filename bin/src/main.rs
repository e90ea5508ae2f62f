//! AlphaLab CLI binary.
//!
//! Computes signal diagnostics from the command line.

mod cmd;

use alphalab_eval::SharpeConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{OutputFormat, Report};
use std::process;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "alphalab")]
#[command(about = "Diagnostics for quantitative alpha signals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Information coefficient between signals and realized returns
    Ic {
        /// Predicted signal values, comma separated
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        signals: Vec<f64>,

        /// Realized returns, comma separated, aligned with the signals
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        returns: Vec<f64>,

        /// Use rank (Spearman) correlation instead of Pearson
        #[arg(long)]
        rank: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Annualized Sharpe ratio of a return series
    Sharpe {
        /// Periodic returns, comma separated
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        returns: Vec<f64>,

        /// Annual risk-free rate
        #[arg(long, allow_hyphen_values = true, default_value_t = SharpeConfig::default().risk_free_rate)]
        risk_free_rate: f64,

        /// Return periods per year (252 for daily data)
        #[arg(short, long, default_value_t = SharpeConfig::default().periods_per_year)]
        periods_per_year: u32,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so JSON output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Ic {
            signals,
            returns,
            rank,
            format,
        } => {
            debug!(n_signals = signals.len(), n_returns = returns.len(), rank, "computing IC");
            cmd::ic::compute(&signals, &returns, rank)?.render(format)?
        }
        Commands::Sharpe {
            returns,
            risk_free_rate,
            periods_per_year,
            format,
        } => {
            let config = SharpeConfig {
                risk_free_rate,
                periods_per_year,
            };
            debug!(n_returns = returns.len(), ?config, "computing Sharpe ratio");
            cmd::sharpe::compute(&returns, config).render(format)?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ic_with_negative_values() {
        let cli = Cli::try_parse_from([
            "alphalab",
            "ic",
            "--signals",
            "-0.1,0.2,-0.3",
            "--returns",
            "-0.05,0.1,-0.2",
            "--rank",
        ])
        .unwrap();

        match cli.command {
            Commands::Ic {
                signals,
                returns,
                rank,
                format,
            } => {
                assert_eq!(signals, vec![-0.1, 0.2, -0.3]);
                assert_eq!(returns, vec![-0.05, 0.1, -0.2]);
                assert!(rank);
                assert_eq!(format, OutputFormat::Text);
            }
            Commands::Sharpe { .. } => panic!("expected ic command"),
        }
    }

    #[test]
    fn test_parse_sharpe_defaults() {
        let cli =
            Cli::try_parse_from(["alphalab", "sharpe", "--returns", "0.01,0.02", "--format", "json"])
                .unwrap();

        match cli.command {
            Commands::Sharpe {
                risk_free_rate,
                periods_per_year,
                format,
                ..
            } => {
                assert_eq!(risk_free_rate, 0.0);
                assert_eq!(periods_per_year, 252);
                assert_eq!(format, OutputFormat::Json);
            }
            Commands::Ic { .. } => panic!("expected sharpe command"),
        }
    }

    #[test]
    fn test_parse_negative_risk_free_rate() {
        let cli = Cli::try_parse_from([
            "alphalab",
            "sharpe",
            "--returns",
            "-0.01,0.02",
            "--risk-free-rate",
            "-0.01",
        ])
        .unwrap();

        match cli.command {
            Commands::Sharpe {
                returns,
                risk_free_rate,
                ..
            } => {
                assert_eq!(returns, vec![-0.01, 0.02]);
                assert_eq!(risk_free_rate, -0.01);
            }
            Commands::Ic { .. } => panic!("expected sharpe command"),
        }
    }

    #[test]
    fn test_returns_required() {
        assert!(Cli::try_parse_from(["alphalab", "sharpe"]).is_err());
    }
}
