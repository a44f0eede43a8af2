//! Error type shared by the benchmark crates.

/// Error type for benchmark runs.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Invalid parameters or unknown workload name.
    #[error("configuration error: {0}")]
    Config(String),

    /// A worker thread panicked; the run has no partial results.
    #[error("worker panicked during {0} phase")]
    WorkerPanicked(String),

    /// The two phases produced different grand totals.
    #[error("total mismatch: {first_name}={first} but {second_name}={second}")]
    Mismatch {
        first_name: String,
        first: i64,
        second_name: String,
        second: i64,
    },

    /// The report could not be rendered.
    #[error("report error: {0}")]
    Report(String),
}
