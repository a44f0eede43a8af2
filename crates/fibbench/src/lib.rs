//! fibbench library — application logic for the FFI benchmark.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
