//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::errors::{AppError, AppErrorKind, Result};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    fn default_filter(self) -> EnvFilter {
        let directive = match self {
            Profile::Development => "realtydb=debug",
            Profile::Production | Profile::Test => "realtydb=info",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility on stderr
///
/// This function should be called once at application startup.
/// Later calls are no-ops.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Capture mode for test assertions
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.default_filter())
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.default_filter())
                .init();
        }
        Profile::Test => {
            // Test capture is initialized separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}

/// Initialize the logging facility with output appended to `path`
///
/// Used by the terminal UI, which owns the screen while it runs.
pub fn init_to_file(profile: Profile, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            AppError::new(AppErrorKind::Io)
                .with_op("logging_init")
                .with_message(format!("cannot open log file {}: {}", path.display(), e))
        })?;

    INIT_ONCE.call_once(move || {
        let writer = Mutex::new(file);
        match profile {
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_env_filter(profile.default_filter())
                    .init();
            }
            Profile::Development | Profile::Test => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_env_filter(profile.default_filter())
                    .init();
            }
        }
    });

    Ok(())
}
