//! # fibbench-cli
//!
//! Console and JSON output for benchmark reports.

pub mod output;
pub mod presenter;

pub use presenter::{render_json, CLIResultPresenter};
