//! Trait abstraction for clipboard access to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Why a clipboard write did not happen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("could not write to clipboard: {0}")]
    Write(String),
    #[error("clipboard task was aborted")]
    Aborted,
}

/// Trait for clipboard operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
