use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr fmt subscriber. `RUST_LOG` wins over `fallback`.
///
/// A second call is a no-op.
pub fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
