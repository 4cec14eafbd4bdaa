use crate::command::ShellAction;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub raised_at: Instant,
}

/// Ephemeral toast queue. Entries vanish once their TTL has elapsed.
#[derive(Debug, Clone)]
pub struct Notifications {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    pub fn raise(&mut self, action: ShellAction, now: Instant) {
        self.toasts.push(Toast {
            title: action.title(),
            description: action.description(),
            raised_at: now,
        });
    }

    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.raised_at) < ttl);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        let start = Instant::now();
        notifications.raise(ShellAction::Save, start);
        notifications.raise(ShellAction::Deploy, start + Duration::from_secs(3));

        notifications.expire(start + Duration::from_secs(2));
        assert_eq!(notifications.toasts().len(), 2);

        notifications.expire(start + Duration::from_secs(5));
        assert_eq!(notifications.toasts().len(), 1);
        assert_eq!(notifications.toasts()[0].title, "Deployment started!");

        notifications.expire(start + Duration::from_secs(8));
        assert!(notifications.is_empty());
    }

    #[test]
    fn preview_toast_carries_description() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        notifications.raise(ShellAction::Preview, Instant::now());
        assert_eq!(
            notifications.toasts()[0].description,
            "Your app will open in a new tab"
        );
    }
}
