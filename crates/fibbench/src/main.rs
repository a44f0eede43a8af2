//! fibbench — C-over-FFI vs native Rust Fibonacci benchmark.

use fibbench_lib::{app, config, errors, logging};

fn main() {
    logging::init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
