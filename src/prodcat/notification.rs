//! Outcome notifications.
//!
//! Every mutation attempt that changes something (or is rejected) yields a
//! [`Notification`]. UIs show it for [`NOTIFICATION_DURATION`] and then drop it. The
//! core never runs a timer: [`NotificationSlot`] stores when the notification was raised
//! and answers whether it is still visible at a given instant.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Danger,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<(Notification, Instant)>,
}

impl NotificationSlot {
    /// Replaces whatever is showing.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now));
    }

    pub fn visible_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, raised)| now.saturating_duration_since(*raised) < NOTIFICATION_DURATION)
            .map(|(notification, _)| notification)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
