// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::pipeline::ProgressSnapshot;
use crate::ui::form;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Prompt form interaction (text edits, submit attempts).
    Form(form::Message),
    /// Periodic tick sweeping expired notifications and driving the fade.
    Tick(Instant),
    /// Rotation tick for the example placeholder cycle.
    RotatePlaceholder(Instant),
    /// Progress report from the generation pipeline host.
    Progress(ProgressSnapshot),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional prompt text to preload into the form.
    pub prompt: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `APP_FORGE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
