use tracing_subscriber::EnvFilter;

/// Sets up the global tracing subscriber shared by every subcommand.
///
/// `RUST_LOG` wins when set; otherwise the caller-provided fallback filter
/// applies (the CLI passes `warn` under `--quiet`, `info` otherwise). Output
/// stays compact: this is an end-user tool, not a long-running service, so
/// file/line noise is left out.
pub fn init_tracing(default_filter: &str) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
