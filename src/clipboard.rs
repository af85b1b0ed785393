//! System clipboard access.
//!
//! Copying is a front-end concern: the vault and generator never touch
//! the clipboard themselves. Callers opt in per invocation.

use crate::error::{CliError, CliResult};

/// Place text on the system clipboard.
pub fn copy(text: &str) -> CliResult<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| CliError::Clipboard(e.to_string()))?;

    clipboard
        .set_text(text.to_owned())
        .map_err(|e| CliError::Clipboard(e.to_string()))
}
