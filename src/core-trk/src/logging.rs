/// Initialize the tracing subscriber once at process start. `RUST_LOG`
/// overrides the given default filter.
pub fn setup_logging(default_log_settings: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_log_settings.into());
    tracing_subscriber::fmt().with_env_filter(filter).init()
}
