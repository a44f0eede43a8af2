//! CLI result presenter.

use console::style;

use fibbench_core::{BenchError, BenchParams};
use fibbench_orchestration::interfaces::{BenchReport, PhaseResult, ResultPresenter};

use crate::output::{cpu_model, format_duration, format_number, DELIMITER};

/// Prints the benchmark report to stdout as it progresses.
pub struct CLIResultPresenter {
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(details: bool) -> Self {
        Self { details }
    }

    fn header_lines(&self, params: &BenchParams) -> Vec<String> {
        let mut lines = vec![format!("number of workers: {}", params.workers)];
        if self.details {
            let cpu = cpu_model();
            if !cpu.is_empty() {
                lines.push(format!("cpu: {cpu}"));
            }
            lines.push(format!(
                "iterations per worker: {}",
                format_number(i64::from(params.iterations))
            ));
            lines.push(format!("fib n: {}", params.n));
            lines.push(format!(
                "settle pause: {}",
                format_duration(params.settle_pause)
            ));
            if params.pin_cores {
                lines.push("workers pinned to cores".to_string());
            }
        }
        lines
    }

    fn phase_lines(&self, phase: &PhaseResult) -> Vec<String> {
        let mut lines = vec![
            format!(
                "{} time: \t\t{}",
                phase.workload,
                format_duration(phase.duration)
            ),
            format!("{} total sum: \t\t{}", phase.workload, phase.total),
        ];
        if self.details {
            for (i, result) in phase.results.iter().enumerate() {
                lines.push(format!("  result #{i}: {result}"));
            }
        }
        lines.push(DELIMITER.to_string());
        lines
    }
}

/// Side-by-side timings followed by the delimiter.
fn summary_lines(report: &BenchReport) -> Vec<String> {
    vec![
        format!(
            "{} time:\t\t{}",
            report.first.workload,
            format_duration(report.first.duration)
        ),
        format!(
            "{} time:\t\t{}",
            report.second.workload,
            format_duration(report.second.duration)
        ),
        DELIMITER.to_string(),
    ]
}

fn verdict_line(report: &BenchReport) -> String {
    format!(
        "{} wins with diff: \t{}",
        report.verdict.winner,
        format_duration(report.verdict.difference)
    )
}

impl ResultPresenter for CLIResultPresenter {
    fn present_header(&self, params: &BenchParams) {
        for line in self.header_lines(params) {
            println!("{line}");
        }
    }

    fn present_phase(&self, phase: &PhaseResult) {
        for line in self.phase_lines(phase) {
            println!("{line}");
        }
    }

    fn present_summary(&self, report: &BenchReport) {
        for line in summary_lines(report) {
            println!("{line}");
        }
        println!("{}", style(verdict_line(report)).bold());
    }

    fn present_error(&self, error: &str) {
        tracing::warn!(error, "benchmark warning");
        eprintln!("Warning: {error}");
    }
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &BenchReport) -> Result<String, BenchError> {
    serde_json::to_string_pretty(report).map_err(|e| BenchError::Report(e.to_string()))
}
