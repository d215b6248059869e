use tracing_subscriber::EnvFilter;

const LOG_LEVEL_ENV: &str = "HC_LOG_LEVEL";

/// Install the stderr log subscriber.
///
/// The filter comes from `HC_LOG_LEVEL` and defaults to `warn`; `--verbose`
/// raises everything to `debug`.
pub fn init_tracing_subscriber(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
