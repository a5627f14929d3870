// Core business logic module

pub mod config;
pub mod diagnostics;
pub mod executor;
pub mod host;

// Re-export commonly used items
pub use config::{ColorMode, Settings};
pub use diagnostics::{DiagnosticOutcome, Diagnostics};
pub use executor::{ProcessExecutor, SystemExecutor};
