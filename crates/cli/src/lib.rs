//! Command-line entry point: configuration and the demonstration run.

pub mod config;
pub mod demo;

pub use config::CliConfig;
pub use demo::{DemoSummary, run_demo};
