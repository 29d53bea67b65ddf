use crate::browser;
use crate::config::Config;
use crate::git::GitRepo;
use crate::remote;
use crate::web_url;
use anyhow::{Context, Result};
use colored::Colorize;

/// Resolve a remote and open it in the browser (or print it with `print_only`)
pub fn run(
    repo: &GitRepo,
    config: &Config,
    remote_name: Option<&str>,
    print_only: bool,
) -> Result<()> {
    let remote = match remote::resolve(repo, remote_name, config.preferred_remote()) {
        Ok(remote) => remote,
        Err(e) if e.is_remote_not_found() => {
            tracing::debug!(error = %e, "nothing to open");
            // keep stdout clean for `--print | xargs ...`
            if print_only {
                eprintln!("Remote not found");
            } else {
                println!("Remote not found");
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let url = web_url::normalize(&remote.url)
        .with_context(|| format!("Remote '{}' has an unsupported URL", remote.name))?;

    if print_only {
        println!("{}", url);
        return Ok(());
    }

    println!("Opening {} in browser...", url.to_string().cyan());
    browser::open_url(&url, config.browser_command()).context("Failed to open browser")?;

    Ok(())
}
