// Diagnostic operations dispatched through the command table
use crate::core::executor::{ProcessExecutor, SystemExecutor};
use crate::error::NetUtilsError;
use crate::platform::{self, Operation, PlatformId};

/// Result of one diagnostic operation
#[derive(Debug)]
pub enum DiagnosticOutcome {
    Success(String),
    Unsupported {
        platform: PlatformId,
        operation: Operation,
    },
    Failure(NetUtilsError),
}

impl DiagnosticOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DiagnosticOutcome::Success(_))
    }
}

/// Runs diagnostic operations for a fixed platform with a given executor.
pub struct Diagnostics<E> {
    platform: PlatformId,
    executor: E,
}

impl Diagnostics<SystemExecutor> {
    /// Diagnostics for the running platform, spawning real processes
    pub fn for_current_platform() -> Self {
        Self::new(platform::resolve(), SystemExecutor)
    }
}

impl<E: ProcessExecutor> Diagnostics<E> {
    pub fn new(platform: PlatformId, executor: E) -> Self {
        Self { platform, executor }
    }

    pub fn platform(&self) -> &PlatformId {
        &self.platform
    }

    pub fn reachability(&self, host: Option<&str>) -> DiagnosticOutcome {
        self.run(Operation::Reachability, host)
    }

    pub fn os_info(&self) -> DiagnosticOutcome {
        self.run(Operation::OsInfo, None)
    }

    pub fn ram_info(&self) -> DiagnosticOutcome {
        self.run(Operation::RamInfo, None)
    }

    pub fn disk_info(&self) -> DiagnosticOutcome {
        self.run(Operation::DiskInfo, None)
    }

    /// Lookup, validate, execute. Nothing is spawned unless a command exists
    /// and its arguments are valid.
    pub fn run(&self, operation: Operation, host: Option<&str>) -> DiagnosticOutcome {
        let Some(spec) = platform::lookup(operation, &self.platform) else {
            log::info!("{} is not supported on {}", operation, self.platform);
            return DiagnosticOutcome::Unsupported {
                platform: self.platform.clone(),
                operation,
            };
        };

        let host = host.map(str::trim).filter(|h| !h.is_empty());
        if spec.takes_host() {
            if let Err(e) = validate_host(host) {
                return DiagnosticOutcome::Failure(e);
            }
        }

        let args = spec.render_args(host);
        let output = match self.executor.run(spec.program, &args) {
            Ok(output) => output,
            Err(e) => return DiagnosticOutcome::Failure(e.into()),
        };

        let text = spec.filter_output(&output);
        if let Some(prefixes) = spec.line_filter {
            if text.is_empty() {
                log::warn!("{} output had no line matching {:?}", spec.program, prefixes);
                return DiagnosticOutcome::Failure(NetUtilsError::NoMatchingOutput {
                    program: spec.program.to_string(),
                    expected: prefixes.join(", "),
                });
            }
        }
        DiagnosticOutcome::Success(text)
    }
}

/// A ping target must be present and must not be read as an option or
/// split into several arguments.
fn validate_host(host: Option<&str>) -> crate::Result<&str> {
    let host = host.ok_or_else(|| NetUtilsError::validation("Please provide a host to ping"))?;

    if host.starts_with('-') {
        return Err(NetUtilsError::validation(format!(
            "Invalid host '{}': a host cannot start with '-'",
            host
        )));
    }
    if host.chars().any(char::is_whitespace) {
        return Err(NetUtilsError::validation(format!(
            "Invalid host '{}': a host cannot contain whitespace",
            host
        )));
    }
    Ok(host)
}
