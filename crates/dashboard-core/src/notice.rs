// File: crates/dashboard-core/src/notice.rs
// Summary: Transient, dismissible status notices (success/error).

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Style class used by the page for this severity.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-danger",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

impl NoticeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    /// How long the notice has been up.
    pub fn age(&self) -> TimeDelta {
        Utc::now() - self.created_at
    }
}

/// Visible notices, newest first.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    next: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a notice at the top and return its id.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> &Notice {
        self.next += 1;
        let notice = Notice {
            id: NoticeId(self.next),
            severity,
            message: message.into(),
            created_at: Utc::now(),
        };
        self.notices.insert(0, notice);
        &self.notices[0]
    }

    pub fn success(&mut self, message: impl Into<String>) -> &Notice {
        self.push(Severity::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> &Notice {
        self.push(Severity::Error, message)
    }

    /// Remove a notice. Returns `None` if it is already gone, which makes
    /// dismissal and expiry safe to apply in either order.
    pub fn dismiss(&mut self, id: NoticeId) -> Option<Notice> {
        let idx = self.notices.iter().position(|n| n.id == id)?;
        Some(self.notices.remove(idx))
    }

    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.notices.iter().find(|n| n.id == id)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
