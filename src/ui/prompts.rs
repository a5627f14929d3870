// Severity-tagged terminal output

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Print a message colored by severity. Warnings and errors go to stderr.
pub fn report(severity: Severity, message: &str) {
    match severity {
        Severity::Info => info(message),
        Severity::Warning => warn(message),
        Severity::Error => error(message),
    }
}

/// Display a warning message
pub fn warn(message: &str) {
    eprintln!("{}", format!("Warning: {}", message).yellow().bold());
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Section title, e.g. "RAM Information:"
pub fn heading(title: &str) {
    println!("{}", title.blue().bold());
}

/// `label value` on one line
pub fn field(label: &str, value: &str) {
    println!("{} {}", label.blue(), value.magenta());
}

/// Raw command output, printed as-is
pub fn plain(text: &str) {
    println!("{}", text);
}
