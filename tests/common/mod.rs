//! Common test utilities for git-browse integration tests
//!
//! `TestRepo` creates a real temporary git repository and runs the compiled
//! binary inside it with an isolated config file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get path to compiled binary (built by cargo test)
pub fn git_browse_bin() -> &'static str {
    env!("CARGO_BIN_EXE_git-browse")
}

pub struct TestRepo {
    dir: TempDir,
    /// Holds the config file so the user's own config never leaks in
    config_dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a new repository with `git init` and no remotes
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to init git repo");
        assert!(output.status.success(), "git init failed: {:?}", output);

        Self {
            dir,
            config_dir: TempDir::new().expect("Failed to create config dir"),
        }
    }

    /// An empty directory that is not inside any git repository
    pub fn outside_repo() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    /// Register a remote by writing its URL straight into the repo config
    pub fn add_remote(&self, name: &str, url: &str) -> &Self {
        let key = format!("remote.{}.url", name);
        let output = self.git(&["config", &key, url]);
        assert!(output.status.success(), "failed to add remote {}", name);
        self
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn git(&self, args: &[&str]) -> Output {
        Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git")
    }

    /// Run git-browse in the repo
    pub fn run(&self, args: &[&str]) -> Output {
        let config = self.config_path();
        let ceiling = self.path().parent().unwrap_or(self.path()).to_path_buf();
        Command::new(git_browse_bin())
            .arg("--config")
            .arg(&config)
            .args(args)
            .current_dir(self.path())
            .env("GIT_CEILING_DIRECTORIES", ceiling)
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .output()
            .expect("Failed to execute git-browse")
    }
}

pub trait OutputExt {
    fn stdout_str(&self) -> String;
    fn stderr_str(&self) -> String;
}

impl OutputExt for Output {
    fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }
}
