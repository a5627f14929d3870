// UI and formatting module

pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use prompts::{error, field, heading, info, plain, report, warn, Severity};
