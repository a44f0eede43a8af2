//! Error handling and exit codes.

use fibbench_core::constants::exit_codes;
use fibbench_core::BenchError;

/// Map a benchmark error to its exit code.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::WorkerPanicked(_) | BenchError::Report(_) | BenchError::Mismatch { .. } => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for an application error, looking through the `anyhow` chain.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BenchError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
