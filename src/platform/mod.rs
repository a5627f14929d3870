// Platform detection and per-platform command dispatch

pub mod command_table;

use std::fmt;

// Re-exports for cleaner imports
pub use command_table::{lookup, CommandSpec, Operation, HOST_PLACEHOLDER};

/// Coarse OS family used to pick diagnostic commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlatformId {
    Linux,
    Darwin,
    Windows,
    Other(String),
}

impl PlatformId {
    /// Classify an OS name as reported by `std::env::consts::OS`.
    ///
    /// `"darwin"` is accepted alongside `"macos"` so identifiers coming from
    /// other tooling map the same way.
    pub fn from_os_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "linux" => PlatformId::Linux,
            "macos" | "darwin" => PlatformId::Darwin,
            "windows" => PlatformId::Windows,
            other => PlatformId::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlatformId::Linux => "linux",
            PlatformId::Darwin => "darwin",
            PlatformId::Windows => "windows",
            PlatformId::Other(name) => name,
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform of the running process. Never fails.
pub fn resolve() -> PlatformId {
    let platform = PlatformId::from_os_name(std::env::consts::OS);
    log::debug!("Resolved platform: {}", platform);
    platform
}
