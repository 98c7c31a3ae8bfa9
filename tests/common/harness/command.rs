//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `easynote` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NoteCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl NoteCommand {
    /// Creates a new command for the `easynote` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--db` option.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--user` option.
    pub fn user(mut self, user: &str) -> Self {
        self.args.push("--user".to_string());
        self.args.push(user.to_string());
        self
    }

    /// Points the config lookup at `dir` instead of the real config directory.
    pub fn config_home(mut self, dir: &Path) -> Self {
        self.config_home = Some(dir.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("easynote").expect("Failed to find easynote binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(dir) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", dir);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `topic <sub> <rest...>`.
    pub fn topic<I, S>(self, sub: &str, rest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args(["topic", sub]).args(rest)
    }

    /// Configures for `card <sub> <rest...>`.
    pub fn card<I, S>(self, sub: &str, rest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args(["card", sub]).args(rest)
    }

    /// Configures for the `check` command.
    pub fn check(self) -> Self {
        self.args(["check"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NoteCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        NoteCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let cmd = NoteCommand::new().db(Path::new("/tmp/x.db"));
        assert_eq!(cmd.get_args(), ["--db", "/tmp/x.db"]);
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NoteCommand::new().topic("ls", [] as [&str; 0]).format_json();
        assert_eq!(cmd.get_args(), ["topic", "ls", "--format", "json"]);
    }
}
