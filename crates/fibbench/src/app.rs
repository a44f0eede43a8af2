//! Application entry point: runs the FFI phase, then the native phase, and
//! reports the comparison.

use anyhow::{Context, Result};

use fibbench_cli::presenter::{render_json, CLIResultPresenter};
use fibbench_core::registry::{DefaultFactory, WorkloadFactory};
use fibbench_orchestration::interfaces::{BenchReport, NullPresenter, ResultPresenter};
use fibbench_orchestration::orchestrator::{analyze_totals, run_comparison};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let params = config
        .bench_params()
        .context("invalid benchmark parameters")?;
    tracing::debug!(?params, "benchmark parameters");

    let factory = DefaultFactory::new();
    let foreign = factory.get("ffi")?;
    let native = factory.get("rust")?;

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(NullPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.details))
    };

    let report = run_comparison(&params, foreign.as_ref(), native.as_ref(), presenter.as_ref())?;

    check_totals(&report, presenter.as_ref(), config.json);

    if config.json {
        println!("{}", render_json(&report)?);
    }

    Ok(())
}

/// Warn when the two phases disagree. A mismatch never fails the run.
fn check_totals(report: &BenchReport, presenter: &dyn ResultPresenter, json: bool) {
    if let Err(e) = analyze_totals(&report.first, &report.second) {
        if json {
            // The JSON presenter is silent, so log instead.
            tracing::warn!(error = %e, "phase totals differ");
        } else {
            presenter.present_error(&e.to_string());
        }
    }
}
