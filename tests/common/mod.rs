//! Shared helpers for integration tests: logging setup and assertion macros.

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes test logging once per process.
///
/// Honors `RUST_LOG` when set; defaults to `info` otherwise. Output goes
/// through the test writer so it stays attached to the owning test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(test = $name, "test phase start");
    };
}

macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "test complete");
    };
}

macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {
        if !$cond {
            tracing::error!(expected = ?$expected, actual = ?$actual, $msg);
        }
        assert!($cond, "{}: expected {:?}, got {:?}", $msg, $expected, $actual);
    };
}
