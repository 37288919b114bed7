use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing from `PAGEPILOT_LOG` (falling back to `RUST_LOG`,
/// then `info`). Safe to call once per process.
pub fn init() {
    let filter = std::env::var("PAGEPILOT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
