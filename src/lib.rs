//! git-browse library interface
//!
//! Resolves a git remote, turns its URL into a browsable web URL and opens
//! it. The binary in main.rs is a thin clap front-end over these modules.

pub mod browser;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod remote;
pub mod web_url;

pub use error::{Error, Result};
