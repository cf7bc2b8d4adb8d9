//! Tracing initialization.
//!
//! Everything is written to stderr: stdout carries MCP frames when serving and
//! command output when running as a CLI.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "GDS_CONTEXT_LOG";

/// Initialize tracing with `level` as the floor. Safe to call multiple times.
pub fn init(level: Level) {
    INIT.call_once(|| {
        let under_test = std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        if under_test {
            // Another harness may already own the global subscriber.
            let _ = builder.with_test_writer().try_init();
        } else if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
