use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Checked in order; the first one set supplies the filter directives.
const LOG_ENV_VARS: [&str; 2] = ["BARRAGE_LOG", "RUST_LOG"];

/// Installs the stderr subscriber so diagnostics never mix with the
/// per-request lines barrage prints on stdout.
pub fn init_logging(verbose: bool) {
    let configured = LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(configured.as_deref(), verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Directives from the environment win; unparsable ones fall back to the
/// level implied by `--verbose`.
fn log_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    configured
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
