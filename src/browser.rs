//! Launching a URL in an external browser.
//!
//! Kept apart from the search client so search stays a pure data-returning
//! call: the CLI decides whether to invoke this, and tests never need a
//! browser present.

use std::process::Command;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CorrigoError, Result};

/// Configuration for the browser launcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Opener command to run with the URL as its single argument.
    /// `None` uses the platform default opener.
    pub command: Option<String>,
}

impl BrowserConfig {
    /// The opener command that will actually be run.
    pub fn effective_command(&self) -> &str {
        self.command.as_deref().unwrap_or(default_opener())
    }
}

#[cfg(target_os = "macos")]
fn default_opener() -> &'static str {
    "open"
}

#[cfg(target_os = "windows")]
fn default_opener() -> &'static str {
    "explorer"
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_opener() -> &'static str {
    "xdg-open"
}

/// Open `url` with the configured opener.
///
/// Spawns and detaches; does not wait for the browser to exit.
pub fn open_url(url: &str, config: &BrowserConfig) -> Result<()> {
    if url.trim().is_empty() {
        return Err(CorrigoError::invalid_argument("URL must not be empty"));
    }

    let opener = config.effective_command();
    debug!("launching '{opener}' with {url}");

    Command::new(opener)
        .arg(url)
        .spawn()
        .map_err(|e| CorrigoError::browser(format!("failed to launch '{opener}': {e}")))?;

    Ok(())
}
