// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Minimum number of characters a trimmed prompt must contain.
pub const DEFAULT_MIN_PROMPT_CHARS: usize = 10;

// ==========================================================================
// Placeholder Rotation Defaults
// ==========================================================================

/// Interval between placeholder rotation ticks (in milliseconds).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 3000;

/// Minimum allowed rotation interval (in milliseconds).
pub const MIN_ROTATION_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width (in logical pixels).
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;

/// Default window height (in logical pixels).
pub const DEFAULT_WINDOW_HEIGHT: f32 = 650.0;

/// Minimum window width (in logical pixels).
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height (in logical pixels).
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

// Serde default helpers (config fields are optional so absent keys fall
// back without failing deserialization).

pub(super) fn default_min_prompt_chars() -> Option<usize> {
    Some(DEFAULT_MIN_PROMPT_CHARS)
}

pub(super) fn default_rotation_interval_ms() -> Option<u64> {
    Some(DEFAULT_ROTATION_INTERVAL_MS)
}
