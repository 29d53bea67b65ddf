use anyhow::Result;
use clap::Parser;
use git_browse::commands;
use git_browse::config::Config;
use git_browse::git::GitRepo;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "git-browse")]
#[command(about = "Open a git remote in your web browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Remote to open (defaults to origin, or the first remote listed)
    remote: Option<String>,

    /// Print the web URL instead of opening it
    #[arg(short, long)]
    print: bool,

    /// Show debug output on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/git-browse/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let repo = GitRepo::open()?;
    commands::open::run(&repo, &config, cli.remote.as_deref(), cli.print)
}
