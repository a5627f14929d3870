use netutils::core::executor::ProcessExecutor;
use netutils::platform::lookup;
use netutils::{DiagnosticOutcome, Diagnostics, ExecutionError, NetUtilsError, Operation, PlatformId};
use std::cell::RefCell;

/// Stub executor that returns a fixed transcript and records invocations
struct StubExecutor {
    output: String,
    calls: RefCell<Vec<String>>,
}

impl StubExecutor {
    fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ProcessExecutor for StubExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ExecutionError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.borrow_mut().push(line);
        Ok(self.output.clone())
    }
}

#[test]
fn test_linux_disk_info_end_to_end() {
    let stub = StubExecutor::new("Filesystem Size Used");
    let diagnostics = Diagnostics::new(PlatformId::Linux, &stub);

    match diagnostics.disk_info() {
        DiagnosticOutcome::Success(text) => assert_eq!(text, "Filesystem Size Used"),
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(stub.command_lines(), vec!["df -h"]);
}

#[test]
fn test_darwin_reachability_returns_transcript_unchanged() {
    let transcript = "PING 8.8.8.8 (8.8.8.8): 56 data bytes\n\
                      64 bytes from 8.8.8.8: icmp_seq=0 ttl=117 time=12.1 ms\n\
                      64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=11.8 ms\n\
                      round-trip min/avg/max/stddev = 11.8/11.9/12.1/0.1 ms";
    let stub = StubExecutor::new(transcript);
    let diagnostics = Diagnostics::new(PlatformId::Darwin, &stub);

    match diagnostics.reachability(Some("8.8.8.8")) {
        DiagnosticOutcome::Success(text) => assert_eq!(text, transcript),
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(stub.command_lines(), vec!["ping -c 4 8.8.8.8"]);
}

#[test]
fn test_freebsd_os_info_is_unsupported_without_spawning() {
    let stub = StubExecutor::new("unused");
    let diagnostics = Diagnostics::new(PlatformId::from_os_name("freebsd"), &stub);

    assert!(matches!(
        diagnostics.os_info(),
        DiagnosticOutcome::Unsupported {
            operation: Operation::OsInfo,
            ..
        }
    ));
    assert!(stub.command_lines().is_empty());
}

#[test]
fn test_missing_ping_target_never_reaches_executor() {
    let stub = StubExecutor::new("unused");
    let diagnostics = Diagnostics::new(PlatformId::Windows, &stub);

    let outcome = diagnostics.reachability(Some(""));
    assert!(matches!(
        outcome,
        DiagnosticOutcome::Failure(NetUtilsError::Validation(_))
    ));
    assert!(stub.command_lines().is_empty());
}

#[test]
fn test_table_programs_match_known_tools() {
    let expected = [
        (Operation::OsInfo, PlatformId::Linux, "lsb_release"),
        (Operation::OsInfo, PlatformId::Darwin, "sw_vers"),
        (Operation::OsInfo, PlatformId::Windows, "systeminfo"),
        (Operation::RamInfo, PlatformId::Linux, "free"),
        (Operation::RamInfo, PlatformId::Darwin, "top"),
        (Operation::RamInfo, PlatformId::Windows, "systeminfo"),
        (Operation::DiskInfo, PlatformId::Linux, "df"),
        (Operation::DiskInfo, PlatformId::Darwin, "df"),
        (Operation::DiskInfo, PlatformId::Windows, "powershell"),
    ];

    for (operation, platform, program) in expected {
        let spec = lookup(operation, &platform).expect("command should exist");
        assert_eq!(spec.program, program, "{} on {}", operation, platform);
    }
}

#[test]
fn test_current_platform_rejects_missing_host() {
    let diagnostics = Diagnostics::for_current_platform();
    let outcome = diagnostics.reachability(None);
    assert!(matches!(
        outcome,
        DiagnosticOutcome::Failure(NetUtilsError::Validation(_)) | DiagnosticOutcome::Unsupported { .. }
    ));
}
