//! Clipboard integration for the history panel.

use crate::error::Result;
use arboard::Clipboard;

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    tracing::debug!(bytes = text.len(), "Copied history to clipboard");
    Ok(())
}
