use super::runner::{BacktestRun, BacktestSource};
use crate::domain::backtest::assessment::{Assessment, Grade, MAX_DRAWDOWN_LIMIT_PCT, SHARPE_TARGET};
use crate::domain::backtest::catalog::strategy_label;
use crate::domain::backtest::types::{BacktestPeriod, BacktestResult};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct BacktestReport {
    pub timestamp: DateTime<Utc>,
    pub period: BacktestPeriod,
    pub source: BacktestSource,
    pub strategy_label: String,
    pub assessment: Assessment,
    pub result: BacktestResult,
}

impl BacktestReport {
    pub fn new(run: &BacktestRun, period: BacktestPeriod) -> Self {
        Self {
            timestamp: Utc::now(),
            period,
            source: run.source,
            strategy_label: strategy_label(&run.result.strategy_id).to_string(),
            assessment: Assessment::of(&run.result),
            result: run.result.clone(),
        }
    }
}

pub struct BacktestReporter {
    output_dir: PathBuf,
}

impl BacktestReporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write the run as pretty JSON and return the file path.
    pub fn save_report(&self, run: &BacktestRun, period: BacktestPeriod) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create report directory {}",
                self.output_dir.display()
            )
        })?;

        let report = BacktestReport::new(run, period);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        let filename = format!(
            "backtest_{}_{}_{}.json",
            sanitize(&report.result.symbol),
            sanitize(&report.result.strategy_id),
            report.timestamp.format("%Y%m%d_%H%M%S")
        );
        let path = self.output_dir.join(filename);

        fs::write(&path, json)
            .with_context(|| format!("Failed to write report file {}", path.display()))?;
        info!("Report saved to: {}", path.display());
        Ok(path)
    }

    pub fn print_summary(&self, run: &BacktestRun, period: BacktestPeriod) {
        println!("{}", render_summary(run, period));
    }
}

/// Console rendering of one run: headline, metric grid and strategy notes.
pub fn render_summary(run: &BacktestRun, period: BacktestPeriod) -> String {
    let result = &run.result;
    let assessment = Assessment::of(result);
    let label = strategy_label(&result.strategy_id);
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(72));
    let _ = writeln!(
        out,
        "{}",
        if assessment.beats_benchmark {
            "Strategy outperforms benchmark!"
        } else {
            "Strategy underperforms benchmark"
        }
    );
    let _ = writeln!(out, "{} | {} | {} period", result.symbol, label, period);
    let _ = writeln!(
        out,
        "Total Return: {}   (benchmark {})",
        signed_pct(result.total_return_pct),
        signed_pct(result.benchmark_return_pct)
    );
    if run.source == BacktestSource::LocalSimulation {
        let _ = writeln!(out, "Source: local simulation (backend unavailable)");
    }
    let _ = writeln!(out, "{}", "-".repeat(72));

    let rows = [
        ("TOTAL RETURN", signed_pct(result.total_return_pct), assessment.total_return),
        ("SHARPE RATIO", format!("{:.2}", result.sharpe_ratio), assessment.sharpe),
        ("SORTINO", format!("{:.2}", result.sortino_ratio), assessment.sortino),
        (
            "MAX DRAWDOWN",
            signed_pct(-result.max_drawdown_pct),
            assessment.max_drawdown,
        ),
        ("CALMAR RATIO", format!("{:.2}", result.calmar_ratio), assessment.calmar),
        ("WIN RATE", signed_pct(result.win_rate_pct), assessment.win_rate),
    ];
    for (name, value, grade) in rows {
        let _ = writeln!(
            out,
            "{:<14} {:>10}  {} [{}]",
            name,
            value,
            grade_marker(grade),
            grade
        );
    }
    let _ = writeln!(
        out,
        "{} signal periods analyzed, {} chart points",
        result.total_trades,
        result.series.len()
    );

    let _ = writeln!(out, "{}", "-".repeat(72));
    let _ = writeln!(out, "STRATEGY NOTES");
    let _ = writeln!(
        out,
        "Sharpe Target: >{}   Current: {:.2} -> {}",
        SHARPE_TARGET,
        result.sharpe_ratio,
        if assessment.sharpe_target_met {
            "Target met"
        } else {
            "Below target"
        }
    );
    let _ = writeln!(
        out,
        "Max DD Target: <{}%   Current: {:.2}% -> {}",
        MAX_DRAWDOWN_LIMIT_PCT,
        result.max_drawdown_pct,
        if assessment.drawdown_within_limit {
            "Within limits"
        } else {
            "Exceeds limit"
        }
    );
    let _ = writeln!(
        out,
        "Alpha Target: > benchmark   {}",
        if assessment.beats_benchmark {
            "Outperforming benchmark"
        } else {
            "Underperforming"
        }
    );
    let _ = write!(out, "{}", "=".repeat(72));
    out
}

/// Percentage with an explicit `+` for non-negative values.
pub fn signed_pct(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

fn grade_marker(grade: Grade) -> &'static str {
    match grade {
        Grade::Good => "+",
        Grade::Fair => "~",
        Grade::Poor => "-",
    }
}

fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
