// SPDX-License-Identifier: MPL-2.0
//! Pure types describing the app-generation pipeline.
//!
//! The generation backend reports its progress as a flat snapshot: which
//! agent is running, a 0-100 percentage, an overall build status, and any
//! accumulated errors. This module models that contract so the UI can
//! render progress without knowing anything about the pipeline host.

use serde::{Deserialize, Serialize};

/// The agents of the generation pipeline, in execution order, plus the
/// terminal `Completed` marker the backend reports when the run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStage {
    PromptAnalyzer,
    ArchitectureDesigner,
    CodeGenerator,
    BuildAutomator,
    Completed,
}

impl AgentStage {
    /// All stages in pipeline order.
    pub const ALL: [AgentStage; 5] = [
        AgentStage::PromptAnalyzer,
        AgentStage::ArchitectureDesigner,
        AgentStage::CodeGenerator,
        AgentStage::BuildAutomator,
        AgentStage::Completed,
    ];

    /// Returns the wire key the backend uses for this stage.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            AgentStage::PromptAnalyzer => "prompt_analyzer",
            AgentStage::ArchitectureDesigner => "architecture_designer",
            AgentStage::CodeGenerator => "code_generator",
            AgentStage::BuildAutomator => "build_automator",
            AgentStage::Completed => "completed",
        }
    }

    /// Returns the human-readable label for this stage.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AgentStage::PromptAnalyzer => "Prompt Analysis",
            AgentStage::ArchitectureDesigner => "Architecture Design",
            AgentStage::CodeGenerator => "Code Generation",
            AgentStage::BuildAutomator => "APK Building",
            AgentStage::Completed => "Completed",
        }
    }

    /// Parses a wire key into a stage. Keys outside the closed set
    /// (e.g. internal nodes like `project_creator`) yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|stage| stage.key() == key)
    }
}

/// Formats a backend agent key as a human-readable label.
///
/// Unknown keys are returned unchanged. The fallback keeps progress
/// rendering total: a new backend stage shows up verbatim instead of
/// breaking the display.
#[must_use]
pub fn format_agent_name(key: &str) -> &str {
    AgentStage::from_key(key).map_or(key, |stage| stage.label())
}

/// Overall build status reported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl BuildStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Pending => "pending",
            BuildStatus::InProgress => "in_progress",
            BuildStatus::Completed => "completed",
            BuildStatus::Failed => "failed",
        }
    }

    /// Parses a wire string. Unknown strings yield `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BuildStatus::Pending),
            "in_progress" => Some(BuildStatus::InProgress),
            "completed" => Some(BuildStatus::Completed),
            "failed" => Some(BuildStatus::Failed),
            _ => None,
        }
    }

    /// Whether the pipeline has finished, successfully or not.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildStatus::Completed | BuildStatus::Failed)
    }
}

/// A point-in-time view of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Wire key of the agent currently running.
    pub current_agent: String,
    /// Completion percentage, clamped to 0-100.
    pub progress: u8,
    /// Overall build status.
    pub build_status: BuildStatus,
    /// Errors logged so far, oldest first.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ProgressSnapshot {
    pub fn new(current_agent: impl Into<String>, progress: u8, build_status: BuildStatus) -> Self {
        Self {
            current_agent: current_agent.into(),
            progress: progress.min(100),
            build_status,
            errors: Vec::new(),
        }
    }

    /// Attaches the error log reported by the backend.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// The current stage, if the agent key belongs to the known set.
    #[must_use]
    pub fn stage(&self) -> Option<AgentStage> {
        AgentStage::from_key(&self.current_agent)
    }

    /// Human-readable label for the current stage (identity for unknown keys).
    #[must_use]
    pub fn stage_label(&self) -> &str {
        format_agent_name(&self.current_agent)
    }

    /// The oldest logged error, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_agent_name_maps_known_keys() {
        assert_eq!(format_agent_name("prompt_analyzer"), "Prompt Analysis");
        assert_eq!(
            format_agent_name("architecture_designer"),
            "Architecture Design"
        );
        assert_eq!(format_agent_name("code_generator"), "Code Generation");
        assert_eq!(format_agent_name("build_automator"), "APK Building");
        assert_eq!(format_agent_name("completed"), "Completed");
    }

    #[test]
    fn format_agent_name_returns_unknown_keys_unchanged() {
        assert_eq!(format_agent_name("unknown_key"), "unknown_key");
        assert_eq!(format_agent_name("project_creator"), "project_creator");
        assert_eq!(format_agent_name(""), "");
    }

    #[test]
    fn stage_keys_round_trip() {
        for stage in AgentStage::ALL {
            assert_eq!(AgentStage::from_key(stage.key()), Some(stage));
        }
    }

    #[test]
    fn build_status_wire_strings_round_trip() {
        for status in [
            BuildStatus::Pending,
            BuildStatus::InProgress,
            BuildStatus::Completed,
            BuildStatus::Failed,
        ] {
            assert_eq!(BuildStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BuildStatus::parse("exploded"), None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(BuildStatus::Completed.is_terminal());
        assert!(BuildStatus::Failed.is_terminal());
        assert!(!BuildStatus::Pending.is_terminal());
        assert!(!BuildStatus::InProgress.is_terminal());
    }

    #[test]
    fn snapshot_clamps_progress() {
        let snapshot = ProgressSnapshot::new("code_generator", 150, BuildStatus::InProgress);
        assert_eq!(snapshot.progress, 100);
    }

    #[test]
    fn snapshot_stage_label_falls_back_to_key() {
        let snapshot = ProgressSnapshot::new("project_creator", 40, BuildStatus::InProgress);
        assert_eq!(snapshot.stage(), None);
        assert_eq!(snapshot.stage_label(), "project_creator");
    }

    #[test]
    fn snapshot_first_error() {
        let snapshot = ProgressSnapshot::new("build_automator", 90, BuildStatus::Failed)
            .with_errors(vec!["gradle exploded".into(), "retry failed".into()]);
        assert_eq!(snapshot.first_error(), Some("gradle exploded"));
    }

    #[test]
    fn snapshot_serde_round_trip_preserves_wire_status() {
        let snapshot = ProgressSnapshot::new("build_automator", 80, BuildStatus::InProgress)
            .with_errors(vec!["gradle warning".into()]);
        let encoded = toml::to_string(&snapshot).expect("serialize snapshot");
        assert!(encoded.contains("in_progress"));

        let decoded: ProgressSnapshot = toml::from_str(&encoded).expect("deserialize snapshot");
        assert_eq!(decoded, snapshot);
    }
}
