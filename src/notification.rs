//! Transient user-facing notifications.
//!
//! Every export operation reports through a [`Notification`]; the TUI keeps a
//! small [`NotificationQueue`] and drops entries once their duration elapses.
//! Validation failures are shown inline on the input screen instead.

use serde::Serialize;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lifetime of copy and single-download notifications.
pub const SHORT_DURATION: Duration = Duration::from_millis(2000);
/// Lifetime of the download-all notification.
pub const LONG_DURATION: Duration = Duration::from_millis(3000);

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
    #[serde(skip)]
    pub duration: Duration,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
            duration,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
            duration,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Notification lifetimes, configurable through `[notifications]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDurations {
    pub short: Duration,
    pub long: Duration,
}

impl Default for NotificationDurations {
    fn default() -> Self {
        Self {
            short: SHORT_DURATION,
            long: LONG_DURATION,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    notification: Notification,
    expires_at: Instant,
}

/// Bounded queue of live notifications, newest last.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    entries: VecDeque<Entry>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.duration;
        self.entries.push_back(Entry {
            notification,
            expires_at,
        });
        while self.entries.len() > MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    /// Drop expired notifications.
    pub fn tick(&mut self, now: Instant) {
        self.entries.retain(|e| e.expires_at > now);
    }

    /// Remove the newest notification.
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.entries.pop_back().map(|e| e.notification)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back().map(|e| &e.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
