use anyhow::Result;

use crate::core::config::Settings;
use crate::core::diagnostics::{DiagnosticOutcome, Diagnostics};
use crate::error::NetUtilsError;
use crate::platform::Operation;
use crate::ui::{self, Severity};

pub fn ping(matches: &clap::ArgMatches, settings: &Settings) -> Result<()> {
    let host = matches.get_one::<String>("host").map(String::as_str);
    let diagnostics = Diagnostics::for_current_platform();
    render(Operation::Reachability, diagnostics.reachability(host), settings)
}

pub fn os(settings: &Settings) -> Result<()> {
    let diagnostics = Diagnostics::for_current_platform();
    ui::field("Operating System:", diagnostics.platform().as_str());
    render(Operation::OsInfo, diagnostics.os_info(), settings)
}

pub fn ram(settings: &Settings) -> Result<()> {
    let diagnostics = Diagnostics::for_current_platform();
    ui::heading("RAM Information:");
    render(Operation::RamInfo, diagnostics.ram_info(), settings)
}

pub fn disk(settings: &Settings) -> Result<()> {
    let diagnostics = Diagnostics::for_current_platform();
    ui::heading("Hard Disk Information:");
    render(Operation::DiskInfo, diagnostics.disk_info(), settings)
}

/// Print an outcome and decide whether it ends the program with an error.
fn render(operation: Operation, outcome: DiagnosticOutcome, settings: &Settings) -> Result<()> {
    match outcome {
        DiagnosticOutcome::Success(text) => {
            ui::plain(&text);
            Ok(())
        }
        DiagnosticOutcome::Unsupported {
            platform,
            operation,
        } => {
            let err = NetUtilsError::unsupported(platform, operation);
            if settings.strict {
                return Err(err.into());
            }
            ui::report(Severity::Info, &err.to_string());
            Ok(())
        }
        DiagnosticOutcome::Failure(
            cause @ (NetUtilsError::Execution(_) | NetUtilsError::NoMatchingOutput { .. }),
        ) => {
            if let Some(partial) = cause.partial_output() {
                ui::plain(partial);
            }
            Err(anyhow::Error::new(cause).context(format!("{} failed", operation)))
        }
        DiagnosticOutcome::Failure(cause) => Err(cause.into()),
    }
}
