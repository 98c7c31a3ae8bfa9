//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments with their own database and config
//! directory, direct seeding through the library, and CLI assertion helpers
//! using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NoteCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
