pub mod commands;

/// Install a stderr subscriber honouring `RUST_LOG` (default `warn`).
#[cfg(feature = "trace")]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

#[cfg(not(feature = "trace"))]
pub fn init_logging() {}
