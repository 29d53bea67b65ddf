//! Turning git remote URLs into URLs a browser can open.
//!
//! Remotes come as absolute URIs (`https://`, `ssh://`, `git://`, sometimes
//! with credentials for automation) or as scp-like SSH shorthand
//! (`git@host:owner/repo.git`). The result always uses `http` or `https`,
//! never carries user-info and has no trailing `.git`.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static SSH_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_-]+@(?P<host>[a-zA-Z0-9_.-]+):(?P<path>.+)")
        .expect("ssh shorthand pattern is valid")
});

/// A credential-free web URL ready to hand to a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUrl(Url);

impl WebUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Normalize a raw remote URL into a [`WebUrl`].
pub fn normalize(raw: &str) -> Result<WebUrl> {
    let raw = raw.trim();
    let invalid = || Error::InvalidRemoteUrl {
        url: raw.to_string(),
    };

    let url = match Url::parse(raw) {
        Ok(parsed) if parsed.host_str().is_some() => {
            ensure_web_url(parsed).ok_or_else(invalid)?
        }
        _ => ssh_shorthand_to_https(raw).ok_or_else(invalid)?,
    };

    let url = strip_dot_git(url);
    tracing::debug!(raw, normalized = %url, "normalized remote url");
    Ok(WebUrl(url))
}

/// Force a web scheme and drop user-info, keeping host, port, path, query
/// and fragment.
fn ensure_web_url(url: Url) -> Option<Url> {
    let mut url = if matches!(url.scheme(), "http" | "https") {
        url
    } else {
        // `Url::set_scheme` refuses to turn a non-special scheme into a
        // special one, so rebuild from the parts instead.
        let host = url.host_str()?;
        let mut rebuilt = format!("https://{}", host);
        if let Some(port) = url.port() {
            rebuilt.push_str(&format!(":{}", port));
        }
        rebuilt.push_str(url.path());
        if let Some(query) = url.query() {
            rebuilt.push('?');
            rebuilt.push_str(query);
        }
        if let Some(fragment) = url.fragment() {
            rebuilt.push('#');
            rebuilt.push_str(fragment);
        }
        Url::parse(&rebuilt).ok()?
    };

    if !url.username().is_empty() || url.password().is_some() {
        url.set_username("").ok()?;
        url.set_password(None).ok()?;
    }

    Some(url)
}

/// The shorthand may sit inside a longer string, e.g. a malformed
/// `ssh://git@host:owner/repo` whose "port" is not a number.
fn ssh_shorthand_to_https(raw: &str) -> Option<Url> {
    let caps = SSH_SHORTHAND.captures(raw)?;
    let host = &caps["host"];
    let path = caps["path"].trim_start_matches('/');
    Url::parse(&format!("https://{}/{}", host, path)).ok()
}

fn strip_dot_git(mut url: Url) -> Url {
    let path = url.path();
    let has_suffix = path.len() >= 4
        && path.is_char_boundary(path.len() - 4)
        && path[path.len() - 4..].eq_ignore_ascii_case(".git");

    if has_suffix {
        let trimmed = path[..path.len() - 4].to_string();
        url.set_path(&trimmed);
    }
    url
}
