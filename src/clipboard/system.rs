//! System clipboard backed by arboard

use super::traits::{ClipboardError, ClipboardWriter};
use arboard::Clipboard;
use async_trait::async_trait;

/// Writes to the OS clipboard on a blocking worker thread
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))
        })
        .await
        .map_err(|_| ClipboardError::Aborted)?
    }
}
