// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the live notifications and sweeps the ones whose
//! lifecycle has fully elapsed. Each notification runs an independent
//! countdown; there is no queue, no visible cap, and no dedup. Simultaneous
//! pushes simply coexist.

use super::notification::Notification;
use std::time::Instant;

/// Holds the currently live notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Live notifications, oldest first.
    toasts: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification.
    ///
    /// The notification is displayed immediately and runs its full
    /// lifecycle; there is no way to cancel it afterwards.
    pub fn push(&mut self, notification: Notification) {
        log::debug!(
            "notification pushed: {:?} {:?}",
            notification.kind(),
            notification.message()
        );
        self.toasts.push(notification);
    }

    /// Sweeps notifications whose lifecycle has fully elapsed at `now`.
    ///
    /// Should be called periodically (e.g. every 100ms) while notifications
    /// exist. A notification is only removed once its exit transition has
    /// completed, never earlier.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|n| !n.is_expired_at(now));
    }

    /// Returns the live notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether any notification is live.
    ///
    /// Drives the tick subscription: when this is false the sweep timer
    /// stops until the next push.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::{DISPLAY_DURATION, EXIT_DURATION};
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_displays_immediately() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));

        assert_eq!(manager.count(), 1);
        assert!(manager.has_notifications());
    }

    #[test]
    fn concurrent_pushes_are_independent() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("message {i}")));
        }
        // No cap and no queue: all five are live at once.
        assert_eq!(manager.count(), 5);
    }

    #[test]
    fn tick_keeps_unexpired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        let created = manager.visible().next().expect("pushed").created_at();

        manager.tick(created + DISPLAY_DURATION);
        assert_eq!(manager.count(), 1, "exiting toast must not be swept");

        manager.tick(created + DISPLAY_DURATION + EXIT_DURATION - Duration::from_millis(1));
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn tick_sweeps_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        let created = manager.visible().next().expect("pushed").created_at();

        manager.tick(created + DISPLAY_DURATION + EXIT_DURATION);
        assert_eq!(manager.count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_sweeps_only_elapsed_countdowns() {
        let mut manager = Manager::new();
        manager.push(Notification::error("first"));
        let first_created = manager.visible().next().expect("pushed").created_at();

        // The second countdown starts measurably later than the first.
        std::thread::sleep(Duration::from_millis(10));
        manager.push(Notification::info("second"));

        manager.tick(first_created + DISPLAY_DURATION + EXIT_DURATION);

        assert_eq!(manager.count(), 1);
        assert_eq!(manager.visible().next().expect("kept").message(), "second");
    }

    #[test]
    fn visible_preserves_push_order() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::info("second"));

        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..3 {
            manager.push(Notification::success(format!("message {i}")));
        }

        manager.clear();
        assert_eq!(manager.count(), 0);
    }
}
