//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` takes precedence over the `-v` count. Calling this twice is a
/// no-op.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
