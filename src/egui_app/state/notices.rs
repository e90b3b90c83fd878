//! Transient, auto-expiring operator notices.
//!
//! Notices stack in a fixed corner of the viewport and live independently:
//! dismissing or expiring one never affects the others.

use std::time::{Duration, Instant};

/// How long a notice stays visible unless dismissed first.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// One visible notice.
#[derive(Clone, Debug)]
pub struct Notice {
    /// Stack-unique handle used for manual dismissal.
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub posted_at: Instant,
}

/// Ordered stack of live notices, newest last.
#[derive(Debug, Default)]
pub struct NoticeStack {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeStack {
    /// Append a notice and return its dismissal handle.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push_at(message, severity, Instant::now())
    }

    fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            message: message.into(),
            severity,
            posted_at: now,
        });
        id
    }

    /// Remove one notice; unknown or already-removed ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    /// Drop every notice older than [`NOTICE_TTL`].
    pub fn prune(&mut self, now: Instant) {
        self.notices
            .retain(|notice| now.duration_since(notice.posted_at) < NOTICE_TTL);
    }

    /// Live notices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
