// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`design_tokens`] - Shared palette, spacing, and typography scales
//! - [`form`] - Prompt submission form with validation and placeholder cycling
//! - [`notifications`] - Toast notification system

pub mod design_tokens;
pub mod form;
pub mod notifications;
