use std::fmt;

use super::PlatformId;

/// Argument slot replaced with the user-supplied host at run time.
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Diagnostics that are answered by running an external program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Reachability,
    OsInfo,
    RamInfo,
    DiskInfo,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Reachability,
        Operation::OsInfo,
        Operation::RamInfo,
        Operation::DiskInfo,
    ];

    /// Human readable name, used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Reachability => "Ping",
            Operation::OsInfo => "Operating system information",
            Operation::RamInfo => "RAM information",
            Operation::DiskInfo => "Hard disk information",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// External program and arguments for one (operation, platform) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// Keep only output lines starting with one of these prefixes
    pub line_filter: Option<&'static [&'static str]>,
}

impl CommandSpec {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            program,
            args,
            line_filter: None,
        }
    }

    const fn filtered(
        program: &'static str,
        args: &'static [&'static str],
        line_filter: &'static [&'static str],
    ) -> Self {
        Self {
            program,
            args,
            line_filter: Some(line_filter),
        }
    }

    pub fn takes_host(&self) -> bool {
        self.args.contains(&HOST_PLACEHOLDER)
    }

    /// Concrete argument list with the host slot filled in
    pub fn render_args(&self, host: Option<&str>) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| match (*arg, host) {
                (HOST_PLACEHOLDER, Some(host)) => host.to_string(),
                (arg, _) => arg.to_string(),
            })
            .collect()
    }

    /// Apply `line_filter` to captured output
    pub fn filter_output(&self, output: &str) -> String {
        match self.line_filter {
            None => output.to_string(),
            Some(prefixes) => output
                .lines()
                .filter(|line| {
                    let line = line.trim_start();
                    prefixes.iter().any(|prefix| line.starts_with(prefix))
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

struct TableEntry {
    operation: Operation,
    platform: PlatformId,
    spec: CommandSpec,
}

const PING_COUNT: &[&str] = &["-c", "4", HOST_PLACEHOLDER];

static COMMAND_TABLE: [TableEntry; 12] = [
    // Reachability
    TableEntry {
        operation: Operation::Reachability,
        platform: PlatformId::Linux,
        spec: CommandSpec::new("ping", PING_COUNT),
    },
    TableEntry {
        operation: Operation::Reachability,
        platform: PlatformId::Darwin,
        spec: CommandSpec::new("ping", PING_COUNT),
    },
    TableEntry {
        operation: Operation::Reachability,
        platform: PlatformId::Windows,
        spec: CommandSpec::new("ping", &["-n", "4", HOST_PLACEHOLDER]),
    },
    // OS information
    TableEntry {
        operation: Operation::OsInfo,
        platform: PlatformId::Linux,
        spec: CommandSpec::new("lsb_release", &["-a"]),
    },
    TableEntry {
        operation: Operation::OsInfo,
        platform: PlatformId::Darwin,
        spec: CommandSpec::new("sw_vers", &[]),
    },
    TableEntry {
        operation: Operation::OsInfo,
        platform: PlatformId::Windows,
        spec: CommandSpec::filtered("systeminfo", &[], &["OS Name", "OS Version"]),
    },
    // RAM
    TableEntry {
        operation: Operation::RamInfo,
        platform: PlatformId::Linux,
        spec: CommandSpec::new("free", &["-h"]),
    },
    TableEntry {
        operation: Operation::RamInfo,
        platform: PlatformId::Darwin,
        spec: CommandSpec::new(
            "top",
            &["-l", "1", "-s", "0", "-n", "0", "-stats", "rsize,vsize,pgrp,mem"],
        ),
    },
    TableEntry {
        operation: Operation::RamInfo,
        platform: PlatformId::Windows,
        spec: CommandSpec::filtered("systeminfo", &[], &["Total Physical Memory"]),
    },
    // Disk
    TableEntry {
        operation: Operation::DiskInfo,
        platform: PlatformId::Linux,
        spec: CommandSpec::new("df", &["-h"]),
    },
    TableEntry {
        operation: Operation::DiskInfo,
        platform: PlatformId::Darwin,
        spec: CommandSpec::new("df", &["-h"]),
    },
    TableEntry {
        operation: Operation::DiskInfo,
        platform: PlatformId::Windows,
        spec: CommandSpec::new("powershell", &["Get-PSDrive", "-PSProvider", "FileSystem"]),
    },
];

/// Find the command for `operation` on `platform`, `None` when unsupported.
pub fn lookup(operation: Operation, platform: &PlatformId) -> Option<&'static CommandSpec> {
    let spec = COMMAND_TABLE
        .iter()
        .find(|entry| entry.operation == operation && &entry.platform == platform)
        .map(|entry| &entry.spec);

    match spec {
        Some(spec) => log::debug!("{} on {}: {} {:?}", operation, platform, spec.program, spec.args),
        None => log::debug!("{} on {}: no command", operation, platform),
    }
    spec
}
