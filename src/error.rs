use std::fmt;
use std::io;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a single `git-browse` run can fail.
#[derive(Debug)]
pub enum Error {
    /// An external program (git or the URL launcher) could not be spawned.
    ToolStart { command: String, source: io::Error },
    /// git ran but exited unsuccessfully.
    ToolExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    /// No remote could be chosen, or the chosen remote has no URL.
    RemoteNotFound { name: Option<String> },
    /// The remote URL is neither an absolute URI nor SSH shorthand.
    InvalidRemoteUrl { url: String },
}

impl Error {
    pub fn is_remote_not_found(&self) -> bool {
        matches!(self, Error::RemoteNotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ToolStart { command, source } => {
                write!(f, "Failed to start '{}': {}", command, source)
            }
            Error::ToolExit {
                command,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "Command '{}' exited with code {}.", command, code)?,
                    None => write!(f, "Command '{}' was terminated by a signal.", command)?,
                }
                write!(f, " Error output: {}", stderr)
            }
            Error::RemoteNotFound { name: Some(name) } => {
                write!(f, "Remote not found: '{}' has no URL configured", name)
            }
            Error::RemoteNotFound { name: None } => f.write_str("Remote not found"),
            Error::InvalidRemoteUrl { url } => {
                write!(f, "Failed to obtain a valid web URI for the remote: {}", url)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ToolStart { source, .. } => Some(source),
            _ => None,
        }
    }
}
