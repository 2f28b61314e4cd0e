// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind`, and the
//! fixed display lifecycle every notification runs through.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a notification stays fully visible before it starts exiting.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Length of the exit fade before the notification is removed.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Message category, determining the toast's accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Neutral informational message (indigo).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
}

impl Kind {
    /// Returns the toast background color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase of a notification at a given instant.
///
/// Every notification runs `Visible -> Exiting -> Expired` on a fixed
/// schedule; there is no cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible, within the display window.
    Visible,
    /// Fading out during the exit transition.
    Exiting,
    /// Past the exit transition; ready to be swept.
    Expired,
}

/// A transient message displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given kind and message text.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the message kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the notification's age at `now`.
    ///
    /// Taking the instant explicitly keeps the lifecycle deterministic in
    /// tests: the clock is injected rather than read from the wall.
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Returns the lifecycle phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let age = self.age_at(now);
        if age < DISPLAY_DURATION {
            Phase::Visible
        } else if age < DISPLAY_DURATION + EXIT_DURATION {
            Phase::Exiting
        } else {
            Phase::Expired
        }
    }

    /// Whether the full lifecycle has elapsed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.phase_at(now) == Phase::Expired
    }

    /// Progress through the exit transition at `now`, in `0.0..=1.0`.
    ///
    /// Returns 0.0 while visible and 1.0 once expired, so it can drive the
    /// fade directly.
    #[must_use]
    pub fn exit_progress_at(&self, now: Instant) -> f32 {
        let age = self.age_at(now);
        if age <= DISPLAY_DURATION {
            return 0.0;
        }
        let into_exit = age - DISPLAY_DURATION;
        (into_exit.as_secs_f32() / EXIT_DURATION.as_secs_f32()).min(1.0)
    }
}
