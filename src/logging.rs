use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber for the binaries.
///
/// The level comes from `RUST_LOG` and defaults to `warn`, for example
/// `RUST_LOG=plates_rs=trace` to see every plate decision.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Debug-level subscriber writing through the test harness. Safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
