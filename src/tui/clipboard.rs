//! System clipboard access for the copy command
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per copy so nothing is held between key presses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard, returning the number of lines copied.
///
/// Fails without a display server (headless Linux) or when access is denied.
pub fn copy_text(text: &str) -> Result<usize> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(text.lines().count())
}
