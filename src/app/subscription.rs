// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Two independent timers drive the UI: a fast sweep tick that only runs
//! while notifications are live, and the always-on placeholder rotation.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription for notification auto-dismiss
/// and exit-fade redraws.
///
/// Returns `Subscription::none()` when no notification is live, so the
/// timer stops instead of idling forever.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the placeholder rotation subscription.
///
/// The timer runs for the lifetime of the application; ticks while the
/// prompt field is non-empty are no-ops. There is no pause/resume.
pub fn create_rotation_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(Message::RotatePlaceholder)
}
