use crate::error::{Error, Result};
use crate::git::GitRepo;

/// A remote chosen for browsing, with its URL exactly as git reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub url: String,
}

/// Where remote names and URLs come from.
pub trait RemoteSource {
    /// Configured remote names, in the order the source reports them.
    fn remote_names(&self) -> Result<Vec<String>>;

    /// The configured URL of `name`, or `None` when it has none.
    fn remote_url(&self, name: &str) -> Result<Option<String>>;
}

impl RemoteSource for GitRepo {
    fn remote_names(&self) -> Result<Vec<String>> {
        let stdout = self.output(&["remote"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn remote_url(&self, name: &str) -> Result<Option<String>> {
        let key = format!("remote.{}.url", name);
        match self.output(&["config", &key]) {
            Ok(url) if url.is_empty() => Ok(None),
            Ok(url) => Ok(Some(url)),
            // `git config` exits 1 silently when the key is not set
            Err(Error::ToolExit {
                code: Some(1),
                ref stderr,
                ..
            }) if stderr.is_empty() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Pick the remote used when none is named: `preferred` (case-insensitive)
/// if configured, otherwise the first one listed.
pub fn select_default<'a>(names: &'a [String], preferred: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|name| name.eq_ignore_ascii_case(preferred))
        .or_else(|| names.first())
        .map(String::as_str)
}

/// Resolve the remote to browse, either the explicitly named one or the
/// default from [`select_default`].
pub fn resolve(
    source: &impl RemoteSource,
    explicit: Option<&str>,
    preferred: &str,
) -> Result<Remote> {
    let name = match explicit {
        Some(name) => name.to_string(),
        None => {
            let names = source.remote_names()?;
            tracing::debug!(?names, "listed remotes");
            select_default(&names, preferred)
                .map(str::to_string)
                .ok_or(Error::RemoteNotFound { name: None })?
        }
    };

    if name.is_empty() {
        return Err(Error::RemoteNotFound { name: None });
    }

    tracing::debug!(remote = %name, "resolving remote url");
    match source.remote_url(&name)? {
        Some(url) => Ok(Remote { name, url }),
        None => Err(Error::RemoteNotFound { name: Some(name) }),
    }
}
