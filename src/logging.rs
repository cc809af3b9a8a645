use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
///
/// Component stderr is forwarded by the orchestrator as warnings, so a clean
/// run stays silent.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global stderr subscriber. Does nothing if one is already set.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
