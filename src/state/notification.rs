//! Transient status-bar notifications

use std::time::{Duration, Instant};

/// Visual tone of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
    Info,
}

/// A message that dismisses itself after `ttl`
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(message, NotificationKind::Success, ttl)
    }

    pub fn failure(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(message, NotificationKind::Failure, ttl)
    }

    pub fn info(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(message, NotificationKind::Info, ttl)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}
