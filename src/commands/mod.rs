// Command handlers module
pub mod address;
pub mod completions;
pub mod diagnostic;
pub mod hostname;

// Re-exports for cleaner imports
pub use address::execute as address;
pub use diagnostic::{disk, os, ping, ram};
pub use hostname::execute as hostname;
