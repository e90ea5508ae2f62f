//! CLI subcommand modules.
//!
//! This module contains the implementations for all alphalab CLI subcommands.

use clap::ValueEnum;
use serde::Serialize;

pub(crate) mod ic;
pub(crate) mod sharpe;

/// Output format shared by every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Renders a report in the requested format.
pub(crate) trait Report: Serialize {
    fn render_text(&self) -> String;

    fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Formats a statistic that may be undefined.
pub(crate) fn fmt_stat(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.4}")
    } else {
        "n/a".to_string()
    }
}
