// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (validation failures, generation results, etc.)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with message kinds
//! - [`manager`] - `Manager` owning live notifications and their sweep
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! manager.push(Notification::success("App generated successfully"));
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&manager, now);
//! ```
//!
//! # Design Considerations
//!
//! - Fixed lifecycle: 5s visible, then a 300ms exit fade, then removal
//! - Every push is independent: no queue, no cap, no dedup, no cancel
//! - Position: top-right corner
//! - Phase computations take an explicit `Instant` so tests inject a clock

mod manager;
mod notification;
mod toast;

pub use manager::Manager;
pub use notification::{Kind, Notification, Phase, DISPLAY_DURATION, EXIT_DURATION};
pub use toast::Toast;
