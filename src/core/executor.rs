// Process execution for diagnostic commands
use std::process::{Command, Output};

use crate::error::ExecutionError;

/// Runs an external program and returns its combined, trimmed output.
///
/// Diagnostic operations take this as a parameter so tests can swap in a
/// recording fake and never spawn anything.
pub trait ProcessExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ExecutionError>;
}

impl<E: ProcessExecutor + ?Sized> ProcessExecutor for &E {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ExecutionError> {
        (**self).run(program, args)
    }
}

/// Executor backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ExecutionError> {
        let path = which::which(program).map_err(|source| ExecutionError::NotFound {
            program: program.to_string(),
            source,
        })?;

        log::info!("Running {} {}", program, args.join(" "));

        // output() waits for the child on every path, including errors
        let output = Command::new(&path)
            .args(args)
            .output()
            .map_err(|source| ExecutionError::Launch {
                program: program.to_string(),
                source,
            })?;

        let text = combined_output(&output);

        if !output.status.success() {
            log::warn!("{} exited with {}", program, output.status);
            return Err(ExecutionError::Status {
                program: program.to_string(),
                status: output.status,
                output: text,
            });
        }

        log::debug!("{} produced {} bytes of output", program, text.len());
        Ok(text)
    }
}

/// Stdout followed by stderr, lossily decoded and trimmed
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !stderr.trim().is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&stderr);
    }

    text.trim().to_string()
}
