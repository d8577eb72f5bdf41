use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. Only the first call installs anything, so
/// tests and embedding binaries can both call this without conflict.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_level(true)
        .try_init();
}
