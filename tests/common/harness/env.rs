//! Isolated test environment with temp directory.

use super::NoteCommand;
use easynote::domain::{Card, Requester, Topic, TopicId, UserId};
use easynote::notebook::Notebook;
use easynote::store::SqliteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and config directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. Each
/// environment has its own user; `cmd()` runs as that user.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    user: UserId,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
            user: UserId::new(),
        }
    }

    /// Returns the path of the test database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("notes.db")
    }

    /// Returns the directory used as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Returns the user ID as passed on the command line.
    pub fn user(&self) -> String {
        self.user.to_string()
    }

    pub fn requester(&self) -> Requester {
        Requester::new(self.user)
    }

    /// Opens the test database directly.
    pub fn notebook(&self) -> Notebook<SqliteStore> {
        let store = SqliteStore::open(&self.db_path()).expect("Failed to open test database");
        Notebook::new(store)
    }

    /// Creates a topic directly in the database.
    pub fn add_topic(&self, title: &str, parent: Option<&Topic>) -> Topic {
        let mut notebook = self.notebook();
        let requester = self.requester();
        let created = match parent {
            Some(parent) => notebook.create_child_topic(&requester, parent.id(), title),
            None => notebook.create_root_topic(&requester, title),
        };
        created.expect("Failed to create topic")
    }

    /// Creates a card directly in the database.
    pub fn add_card(&self, topic: &Topic, text: &str) -> Card {
        self.notebook()
            .create_card(&self.requester(), topic.id(), text)
            .expect("Failed to create card")
    }

    /// Reads a topic back from the database.
    pub fn topic(&self, id: TopicId) -> Option<Topic> {
        self.notebook()
            .open_topic(&self.requester(), id)
            .ok()
            .map(|c| c.topic)
    }

    /// Writes `config.toml` for this environment.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home().join("easynote");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a NoteCommand for this environment's database and user.
    pub fn cmd(&self) -> NoteCommand {
        self.bare_cmd().db(&self.db_path()).user(&self.user())
    }

    /// Creates a NoteCommand with only the isolated config directory set.
    pub fn bare_cmd(&self) -> NoteCommand {
        NoteCommand::new().config_home(&self.config_home())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seeds_database() {
        let env = TestEnv::new();
        let r = env.add_topic("Root", None);
        let c = env.add_topic("Child", Some(&r));
        env.add_card(&c, "text");

        assert!(env.db_path().exists());
        let c = env.topic(c.id()).expect("child should exist");
        assert_eq!(c.parents()[0].id, r.id());
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
        assert_eq!(args[2], "--user");
        assert_eq!(args[3], env.user());
    }
}
