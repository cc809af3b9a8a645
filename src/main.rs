// src/main.rs - Stub algorithm component entry point
use algo_stub::logging::init_logging;
use algo_stub::{run, RunConfig};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    init_logging();

    let config = RunConfig::from_env();
    tracing::debug!(functions = config.functions.len(), "Parsed arguments");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    run(&config, stdin, stdout).map_err(|e| {
        tracing::error!("Stub run failed: {}", e);
        Box::new(e) as Box<dyn std::error::Error + Send + Sync + 'static>
    })?;

    Ok(())
}
