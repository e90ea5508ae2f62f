//! IC command implementation.

use super::{Report, fmt_stat};
use alphalab_eval::{information_coefficient, rank_information_coefficient};
use alphalab_traits::stats::finite_pairs;
use serde::Serialize;

/// Correlation used for the IC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum IcMethod {
    Pearson,
    Spearman,
}

#[derive(Debug, Serialize)]
pub(crate) struct IcReport {
    pub(crate) method: IcMethod,
    pub(crate) n_obs: usize,
    pub(crate) ic: f64,
}

impl Report for IcReport {
    fn render_text(&self) -> String {
        let method = match self.method {
            IcMethod::Pearson => "pearson",
            IcMethod::Spearman => "spearman (rank)",
        };
        format!(
            "Information Coefficient\n{}\nMethod:       {}\nObservations: {}\nIC:           {}\n",
            "─".repeat(32),
            method,
            self.n_obs,
            fmt_stat(self.ic)
        )
    }
}

/// Compute the IC between predicted signals and realized returns.
pub(crate) fn compute(signals: &[f64], returns: &[f64], rank: bool) -> anyhow::Result<IcReport> {
    let (method, ic) = if rank {
        (IcMethod::Spearman, rank_information_coefficient(signals, returns)?)
    } else {
        (IcMethod::Pearson, information_coefficient(signals, returns)?)
    };

    // Pairs with a non-finite side do not enter the correlation
    let (usable, _) = finite_pairs(signals, returns);

    Ok(IcReport {
        method,
        n_obs: usable.len(),
        ic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::OutputFormat;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compute_pearson() {
        let report = compute(&[0.1, -0.2, 0.3, -0.1], &[0.08, -0.15, 0.28, -0.05], false).unwrap();
        assert_eq!(report.method, IcMethod::Pearson);
        assert_eq!(report.n_obs, 4);
        assert_abs_diff_eq!(report.ic, 0.995, epsilon = 1e-2);
    }

    #[test]
    fn test_compute_rank() {
        let report = compute(&[1.0, 2.0, 3.0], &[1.0, 8.0, 27.0], true).unwrap();
        assert_eq!(report.method, IcMethod::Spearman);
        assert_abs_diff_eq!(report.ic, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_observations_exclude_non_finite_pairs() {
        let signals = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let returns = [0.01, 0.02, f64::INFINITY, 0.04, 0.05];
        let report = compute(&signals, &returns, false).unwrap();

        assert_eq!(report.n_obs, 3);
        assert_abs_diff_eq!(report.ic, 1.0, epsilon = 1e-10);
        assert!(report.render(OutputFormat::Text).unwrap().contains("Observations: 3"));
    }

    #[test]
    fn test_compute_length_mismatch() {
        let err = compute(&[1.0, 2.0], &[1.0], false).unwrap_err();
        assert!(err.to_string().contains("Length mismatch"));
    }

    #[test]
    fn test_render_json() {
        let report = compute(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0], false).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["method"], "pearson");
        assert_eq!(json["n_obs"], 3);
    }

    #[test]
    fn test_render_text() {
        let report = compute(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], false).unwrap();
        let text = report.render(OutputFormat::Text).unwrap();
        assert!(text.contains("pearson"));
        assert!(text.contains("1.0000"));
    }
}
