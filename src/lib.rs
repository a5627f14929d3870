// netutils Library - Public API

// Re-export error types
pub mod error;
pub use error::{ExecutionError, NetUtilsError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Settings;
pub use crate::core::diagnostics::{DiagnosticOutcome, Diagnostics};
pub use crate::platform::{Operation, PlatformId};

// Initialize logging
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG, when set, wins over the -v count
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
