//! Transient status-bar notices

use std::time::{Duration, Instant};

/// What kind of notice is showing; controls the status-bar color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Submission acknowledgment
    Ack,
    /// Required-field block, resume link, and other hints
    Hint,
}

/// A transient message shown in the status bar until it expires
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn ack(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Ack,
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn hint(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Hint,
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }
}
