use crate::error::{Error, Result};
use crate::web_url::WebUrl;
use std::process::{Command, Stdio};

/// Open `url` with `command` if given, otherwise with the OS default handler.
///
/// The launcher is spawned and left running; only a failure to start it is
/// reported.
pub fn open_url(url: &WebUrl, command: Option<&str>) -> Result<()> {
    let mut launcher = launcher_for(url, command);
    let program = launcher.get_program().to_string_lossy().into_owned();
    tracing::debug!(%program, url = %url, "launching browser");

    launcher.spawn().map_err(|source| Error::ToolStart {
        command: format!("{} {}", program, url),
        source,
    })?;
    Ok(())
}

/// The URL is always passed as one argument, never through a shell.
fn launcher_for(url: &WebUrl, command: Option<&str>) -> Command {
    let mut launcher = match command {
        Some(command) => custom_launcher(command),
        None => default_launcher(),
    };
    launcher
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    launcher
}

/// `command` may carry its own arguments, e.g. `firefox --new-window`.
fn custom_launcher(command: &str) -> Command {
    let mut parts = command.split_whitespace();
    let mut launcher = Command::new(parts.next().unwrap_or(command));
    launcher.args(parts);
    launcher
}

#[cfg(target_os = "macos")]
fn default_launcher() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn default_launcher() -> Command {
    // `cmd /C start` would split the URL at `&`
    let mut launcher = Command::new("rundll32");
    launcher.arg("url.dll,FileProtocolHandler");
    launcher
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_launcher() -> Command {
    Command::new("xdg-open")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_url::normalize;

    #[test]
    fn test_custom_launcher_splits_arguments() {
        let launcher = custom_launcher("firefox --new-window");
        assert_eq!(launcher.get_program(), "firefox");
        let args: Vec<_> = launcher.get_args().collect();
        assert_eq!(args, ["--new-window"]);
    }

    #[test]
    fn test_url_with_ampersand_is_a_single_argument() {
        let url = normalize("https://example.com/org/repo?tab=readme&lang=en").unwrap();
        let launcher = launcher_for(&url, None);
        let last = launcher.get_args().last().unwrap();
        assert_eq!(last, "https://example.com/org/repo?tab=readme&lang=en");
        assert_ne!(launcher.get_program(), "cmd");
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_launcher_avoids_cmd() {
        let url = normalize("https://example.com/org/repo?a=1&b=2").unwrap();
        let launcher = launcher_for(&url, None);
        assert_eq!(launcher.get_program(), "rundll32");
        let args: Vec<_> = launcher.get_args().collect();
        assert_eq!(
            args,
            ["url.dll,FileProtocolHandler", "https://example.com/org/repo?a=1&b=2"]
        );
    }

    #[test]
    fn test_missing_launcher_is_start_error() {
        let url = normalize("https://example.com/org/repo").unwrap();
        let err = open_url(&url, Some("git-browse-no-such-browser")).unwrap_err();
        assert!(matches!(err, Error::ToolStart { .. }));
        assert!(err
            .to_string()
            .contains("git-browse-no-such-browser https://example.com/org/repo"));
    }

    #[cfg(unix)]
    #[test]
    fn test_custom_launcher_spawns() {
        let url = normalize("git@example.com:org/repo.git").unwrap();
        open_url(&url, Some("true")).unwrap();
    }
}
