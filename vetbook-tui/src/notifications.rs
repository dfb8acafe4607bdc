//! Transient notification banners.
//!
//! Outcomes like a failed delete surface here; nothing is retried
//! automatically.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Banners expire on their own rather than being dismissed by hand.
    pub fn is_expired(&self, ttl_secs: i64) -> bool {
        Utc::now()
            .signed_duration_since(self.created_at)
            .num_seconds()
            >= ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let note = Notification::new(NotificationLevel::Info, "hello");
        assert!(!note.is_expired(5));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let note = Notification::new(NotificationLevel::Error, "gone");
        assert!(note.is_expired(0));
    }
}
