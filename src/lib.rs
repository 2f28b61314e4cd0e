// SPDX-License-Identifier: MPL-2.0
//! `app_forge` is a desktop front-end for an AI app-generation pipeline,
//! built with the Iced GUI framework.
//!
//! It provides the prompt submission form (input validation plus cycling
//! example placeholders), a toast notification system for transient user
//! feedback, and the pure types used to render generation progress as it
//! is reported by a backing pipeline.

pub mod app;
pub mod error;
pub mod pipeline;
pub mod ui;
