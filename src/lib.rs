//! # algo-stub
//!
//! A stand-in benchmark algorithm component. It reads test cases from stdin,
//! one per line, and answers every configured function with a fixed
//! `test_id,function_name,1234` result line on stdout.
//!
//! - [`config`]: `--functions=` argument scan into a [`RunConfig`].
//! - [`record`]: the [`ResultRecord`] output line.
//! - [`runner`]: line-by-line expansion of input into records.
//! - [`logging`]: stderr `tracing` subscriber.

pub mod config;
pub mod logging;
pub mod record;
pub mod runner;

pub use config::RunConfig;
pub use record::{ResultRecord, DURATION_SENTINEL_NS};
pub use runner::{run, RunError, RunSummary};
