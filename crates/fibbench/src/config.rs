//! Application configuration from CLI flags and environment.
//!
//! Every flag is optional; with none given the run uses one worker per
//! logical CPU, 10M iterations per worker, F(92) and a 500ms pause.

use std::time::Duration;

use clap::Parser;

use fibbench_core::constants::{DEFAULT_FIB_N, DEFAULT_ITERATIONS};
use fibbench_core::params::host_parallelism;
use fibbench_core::{BenchError, BenchParams};

/// fibbench — compare a C Fibonacci workload called over FFI with native Rust.
#[derive(Parser, Debug)]
#[command(name = "fibbench", version, about)]
pub struct AppConfig {
    /// Number of concurrent workers (defaults to the logical CPU count).
    #[arg(short, long, env = "FIBBENCH_WORKERS")]
    pub workers: Option<usize>,

    /// fib(n) evaluations per worker.
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS, env = "FIBBENCH_ITERATIONS")]
    pub iterations: i32,

    /// Fibonacci index (at most 92, the largest that fits in i64).
    #[arg(short, long, default_value_t = DEFAULT_FIB_N, allow_negative_numbers = true)]
    pub n: i32,

    /// Pause between the two phases (e.g. "500ms", "1s", "0").
    #[arg(long, default_value = "500ms")]
    pub pause: String,

    /// Pin each worker thread to a CPU core.
    #[arg(long)]
    pub pin_cores: bool,

    /// Show host details and per-worker results.
    #[arg(short, long)]
    pub details: bool,

    /// Print the report as JSON instead of text.
    #[arg(long, conflicts_with = "details")]
    pub json: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the validated benchmark parameters.
    pub fn bench_params(&self) -> Result<BenchParams, BenchError> {
        let settle_pause = parse_duration(&self.pause)
            .ok_or_else(|| BenchError::Config(format!("invalid pause: {:?}", self.pause)))?;

        BenchParams {
            workers: self.workers.unwrap_or_else(host_parallelism),
            iterations: self.iterations,
            n: self.n,
            settle_pause,
            pin_cores: self.pin_cores,
        }
        .validated()
    }
}

/// Parse a duration string like "500ms", "2s", "1m" or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.trim().parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.trim().parse().ok()?;
        Some(Duration::from_secs(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.trim().parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["fibbench"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration("2s"), Some(Duration::from_secs(2)));
        assert_eq!(parse_duration("1m"), Some(Duration::from_secs(60)));
        assert_eq!(parse_duration("0"), Some(Duration::ZERO));
        assert_eq!(parse_duration(" 0ms "), Some(Duration::ZERO));
    }

    #[test]
    fn parse_duration_invalid() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("-1s"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn defaults_match_reference_run() {
        let params = config(&[]).bench_params().unwrap();
        assert_eq!(params.workers, host_parallelism());
        assert_eq!(params.iterations, 10_000_000);
        assert_eq!(params.n, 92);
        assert_eq!(params.settle_pause, Duration::from_millis(500));
        assert!(!params.pin_cores);
    }

    #[test]
    fn explicit_flags() {
        let params = config(&["-w", "4", "-i", "1000", "-n", "10", "--pause", "0ms", "--pin-cores"])
            .bench_params()
            .unwrap();
        assert_eq!(params.workers, 4);
        assert_eq!(params.iterations, 1000);
        assert_eq!(params.n, 10);
        assert_eq!(params.settle_pause, Duration::ZERO);
        assert!(params.pin_cores);
    }

    #[test]
    fn negative_n_accepted() {
        let params = config(&["-n", "-3"]).bench_params().unwrap();
        assert_eq!(params.n, -3);
    }

    #[test]
    fn overflowing_n_rejected() {
        let err = config(&["-n", "93"]).bench_params().unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(config(&["-w", "0"]).bench_params().is_err());
    }

    #[test]
    fn bad_pause_rejected() {
        let err = config(&["--pause", "later"]).bench_params().unwrap_err();
        assert!(err.to_string().contains("invalid pause"));
    }

    #[test]
    fn json_conflicts_with_details() {
        assert!(AppConfig::try_parse_from(["fibbench", "--json", "--details"]).is_err());
    }
}
