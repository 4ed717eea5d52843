//! Clipboard module
//!
//! A copy is a single-shot background task. Its result comes back over a
//! channel as exactly one [`ClipboardOutcome`], which the app drains on
//! every loop turn.

mod system;
mod traits;

pub use system::SystemClipboard;
pub use traits::{ClipboardError, ClipboardWriter};

#[cfg(test)]
pub use traits::MockClipboardWriter;

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Terminal result of one copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied { chars: usize },
    Failed(ClipboardError),
}

/// Spawns clipboard writes and collects their outcomes
pub struct ClipboardChannel {
    writer: Arc<dyn ClipboardWriter>,
    tx: UnboundedSender<ClipboardOutcome>,
    rx: UnboundedReceiver<ClipboardOutcome>,
}

impl ClipboardChannel {
    pub fn new(writer: Arc<dyn ClipboardWriter>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { writer, tx, rx }
    }

    /// Start copying `text`. Must be called from within a tokio runtime.
    pub fn copy(&self, text: String) -> JoinHandle<()> {
        let writer = Arc::clone(&self.writer);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = match writer.write_text(&text).await {
                Ok(()) => {
                    tracing::info!("Copied {} chars to clipboard", text.chars().count());
                    ClipboardOutcome::Copied {
                        chars: text.chars().count(),
                    }
                }
                Err(err) => {
                    tracing::warn!("Clipboard write failed: {err}");
                    ClipboardOutcome::Failed(err)
                }
            };
            // Receiver lives as long as the app; a closed channel means we are shutting down
            let _ = tx.send(outcome);
        })
    }

    /// Next finished copy, if any
    pub fn try_recv(&mut self) -> Option<ClipboardOutcome> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn channel_with(mock: MockClipboardWriter) -> ClipboardChannel {
        ClipboardChannel::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_successful_copy_reports_copied() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text()
            .withf(|text| text == "https://example.com?utm_source=a")
            .times(1)
            .returning(|_| Ok(()));

        let mut channel = channel_with(mock);
        channel
            .copy("https://example.com?utm_source=a".to_string())
            .await
            .unwrap();

        assert_eq!(
            channel.try_recv(),
            Some(ClipboardOutcome::Copied { chars: 32 })
        );
        assert_eq!(channel.try_recv(), None);
    }

    #[tokio::test]
    async fn test_failed_copy_reports_failure() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Unavailable("no display".into())));

        let mut channel = channel_with(mock);
        channel.copy("x".to_string()).await.unwrap();

        assert_eq!(
            channel.try_recv(),
            Some(ClipboardOutcome::Failed(ClipboardError::Unavailable(
                "no display".into()
            )))
        );
    }

    #[tokio::test]
    async fn test_each_copy_yields_one_outcome() {
        let mut mock = MockClipboardWriter::new();
        mock.expect_write_text().times(2).returning(|_| Ok(()));

        let mut channel = channel_with(mock);
        channel.copy("ab".to_string()).await.unwrap();
        channel.copy("abc".to_string()).await.unwrap();

        assert_eq!(
            channel.try_recv(),
            Some(ClipboardOutcome::Copied { chars: 2 })
        );
        assert_eq!(
            channel.try_recv(),
            Some(ClipboardOutcome::Copied { chars: 3 })
        );
        assert_eq!(channel.try_recv(), None);
    }

    #[test]
    fn test_nothing_pending_initially() {
        let mut channel = channel_with(MockClipboardWriter::new());
        assert_eq!(channel.try_recv(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::Write("denied".into()).to_string(),
            "could not write to clipboard: denied"
        );
        assert_eq!(
            ClipboardError::Aborted.to_string(),
            "clipboard task was aborted"
        );
    }
}
