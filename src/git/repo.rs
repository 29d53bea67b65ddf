use crate::error::{Error, Result};
use anyhow::Context;
use std::path::PathBuf;
use std::process::Command;

/// Handle on a working directory where `git` is run as a subprocess.
#[derive(Debug, Clone)]
pub struct GitRepo {
    program: String,
    workdir: PathBuf,
}

impl GitRepo {
    /// Use the current directory
    pub fn open() -> anyhow::Result<Self> {
        let workdir =
            std::env::current_dir().context("Failed to determine the current directory")?;
        Ok(Self::at(workdir))
    }

    pub fn at(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            workdir: workdir.into(),
        }
    }

    /// Run a different git executable (mostly useful in tests)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git with `args`, wait for it and return its trimmed stdout.
    pub fn output(&self, args: &[&str]) -> Result<String> {
        let command = self.describe(args);
        tracing::debug!(%command, workdir = %self.workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| Error::ToolStart {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(%command, code = ?output.status.code(), %stderr, "git failed");
            return Err(Error::ToolExit {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut command = self.program.clone();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}
