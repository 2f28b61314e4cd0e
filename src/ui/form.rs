// SPDX-License-Identifier: MPL-2.0
//! Prompt submission form: validation gate and example placeholder bank.
//!
//! The form owns the prompt text and the submitting flag. A submission
//! attempt runs through the validation gate; rejected attempts leave the
//! form untouched so the user can correct the prompt, accepted attempts
//! flip the form into a busy state until the pipeline reports back.

use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, text, text_input, Column, Text};
use iced::{Element, Length, Theme};
use std::fmt;

/// Example prompts cycled through the placeholder while the field is empty.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "Create a todo list app with add, delete, and mark complete features. Use a clean blue design.",
    "Build a simple calculator app with basic arithmetic operations and a modern purple theme.",
    "Make a weather app that shows current conditions with a beautiful green color scheme.",
    "Design a note-taking app with the ability to save and edit notes, using an orange theme.",
];

/// Placeholder shown before the first rotation tick.
pub const DEFAULT_PLACEHOLDER: &str = "Describe the app you want to build...";

const IDLE_SUBMIT_LABEL: &str = "Generate App";
const BUSY_SUBMIT_LABEL: &str = "⏳ Generating…";

/// Why a submission attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The trimmed prompt was empty.
    Empty,
    /// The trimmed prompt was shorter than the configured minimum.
    TooShort { min: usize },
}

impl ValidationError {
    /// User-facing message for this rejection.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ValidationError::Empty => "Please enter a description for your app".to_string(),
            ValidationError::TooShort { min } => format!(
                "Please provide a more detailed description (at least {min} characters)"
            ),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Validates a raw prompt against the gate rules.
///
/// Returns the trimmed prompt on success. The check counts characters,
/// not bytes, so multi-byte input is measured the way users read it.
pub fn validate_prompt(raw: &str, min_chars: usize) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() < min_chars {
        return Err(ValidationError::TooShort { min: min_chars });
    }
    Ok(trimmed)
}

/// Cyclic sequence of example prompts.
///
/// The index always stays in `[0, len)` and advances by one per call,
/// wrapping around indefinitely.
#[derive(Debug)]
pub struct ExampleBank {
    examples: &'static [&'static str],
    index: usize,
}

impl ExampleBank {
    /// Creates a bank over the built-in example prompts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_examples(&EXAMPLE_PROMPTS)
    }

    /// Creates a bank over a custom, non-empty example set.
    #[must_use]
    pub fn with_examples(examples: &'static [&'static str]) -> Self {
        assert!(!examples.is_empty(), "example bank must not be empty");
        Self { examples, index: 0 }
    }

    /// Returns the next example and advances the cyclic index.
    pub fn advance(&mut self) -> &'static str {
        let example = self.examples[self.index];
        self.index = (self.index + 1) % self.examples.len();
        example
    }

    /// Current position in the cycle.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for ExampleBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages produced by the form's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The prompt text changed.
    PromptChanged(String),
    /// The submit button was pressed (or Enter in the field).
    SubmitPressed,
}

/// Outcome of a form update that the application must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The gate accepted the trimmed prompt; the form is now busy.
    Submitted(String),
    /// The gate rejected the attempt; the form stays editable.
    Rejected(ValidationError),
}

/// Prompt form state.
#[derive(Debug)]
pub struct State {
    prompt: String,
    is_submitting: bool,
    min_prompt_chars: usize,
    examples: ExampleBank,
    placeholder: &'static str,
}

impl State {
    /// Creates an idle form with the given minimum prompt length.
    #[must_use]
    pub fn new(min_prompt_chars: usize) -> Self {
        Self {
            prompt: String::new(),
            is_submitting: false,
            min_prompt_chars,
            examples: ExampleBank::new(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Pre-fills the prompt text (CLI `--prompt` preload).
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Current prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Current placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.placeholder
    }

    /// Label shown on the submit button for the current state.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            BUSY_SUBMIT_LABEL
        } else {
            IDLE_SUBMIT_LABEL
        }
    }

    /// Handles a form message, returning the event the application must
    /// react to (if any).
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::PromptChanged(value) => {
                // The input is read-only while submitting; ignore stray edits.
                if !self.is_submitting {
                    self.prompt = value;
                }
                None
            }
            Message::SubmitPressed => {
                if self.is_submitting {
                    return None;
                }
                match validate_prompt(&self.prompt, self.min_prompt_chars) {
                    Ok(trimmed) => {
                        self.is_submitting = true;
                        Some(Event::Submitted(trimmed.to_string()))
                    }
                    Err(error) => Some(Event::Rejected(error)),
                }
            }
        }
    }

    /// Ends the busy state once the pipeline reports a terminal status.
    pub fn finish_submission(&mut self) {
        self.is_submitting = false;
    }

    /// Advances the placeholder to the next example if the field is empty.
    ///
    /// Returns whether the placeholder changed. A non-empty field makes the
    /// tick a no-op; the cyclic index holds its position.
    pub fn rotate_placeholder(&mut self) -> bool {
        if self.prompt.is_empty() {
            self.placeholder = self.examples.advance();
            true
        } else {
            false
        }
    }

    /// Renders the prompt field and submit button.
    pub fn view(&self) -> Element<'_, Message> {
        let mut input = text_input(self.placeholder(), &self.prompt)
            .padding(spacing::SM)
            .size(typography::BODY_LG);

        if !self.is_submitting {
            input = input
                .on_input(Message::PromptChanged)
                .on_submit(Message::SubmitPressed);
        }

        let submit = button(
            Text::new(self.submit_label())
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .center(),
        )
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .on_press_maybe((!self.is_submitting).then_some(Message::SubmitPressed))
        .style(submit_button_style);

        Column::new()
            .spacing(spacing::SM)
            .push(
                text("Describe your app")
                    .size(typography::TITLE_SM)
                    .style(|_theme: &Theme| iced::widget::text::Style {
                        color: Some(palette::GRAY_700),
                    }),
            )
            .push(input)
            .push(submit)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .into()
    }
}

/// Style function for the submit button.
fn submit_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Active => (palette::PRIMARY_500, palette::WHITE),
        button::Status::Hovered => (palette::PRIMARY_600, palette::WHITE),
        button::Status::Pressed => (palette::PRIMARY_800, palette::WHITE),
        button::Status::Disabled => (palette::PRIMARY_100, palette::GRAY_400),
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: usize = 10;

    #[test]
    fn validate_rejects_empty_prompt() {
        assert_eq!(validate_prompt("", MIN), Err(ValidationError::Empty));
    }

    #[test]
    fn validate_rejects_whitespace_only_prompt() {
        assert_eq!(
            validate_prompt("   \t\n  ", MIN),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn validate_rejects_short_prompt() {
        assert_eq!(
            validate_prompt("too short", MIN),
            Err(ValidationError::TooShort { min: MIN })
        );
    }

    #[test]
    fn validate_trims_before_measuring() {
        // 9 visible chars padded with whitespace still fails.
        assert_eq!(
            validate_prompt("  123456789  ", MIN),
            Err(ValidationError::TooShort { min: MIN })
        );
        // Exactly 10 visible chars passes and comes back trimmed.
        assert_eq!(validate_prompt("  1234567890  ", MIN), Ok("1234567890"));
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // Ten two-byte characters: 20 bytes, 10 chars.
        let prompt = "éééééééééé";
        assert_eq!(prompt.len(), 20);
        assert_eq!(validate_prompt(prompt, MIN), Ok(prompt));
    }

    #[test]
    fn rejection_messages_match_contract() {
        assert_eq!(
            ValidationError::Empty.message(),
            "Please enter a description for your app"
        );
        assert_eq!(
            ValidationError::TooShort { min: 10 }.message(),
            "Please provide a more detailed description (at least 10 characters)"
        );
    }

    #[test]
    fn example_bank_cycles_in_fixed_order() {
        let mut bank = ExampleBank::new();
        // Two full cycles come out in the same order.
        for _ in 0..2 {
            for expected in EXAMPLE_PROMPTS {
                assert_eq!(bank.advance(), expected);
            }
        }
        assert_eq!(bank.index(), 0);
    }

    #[test]
    fn example_bank_index_stays_in_range() {
        let mut bank = ExampleBank::with_examples(&["a", "b", "c"]);
        for _ in 0..10 {
            assert!(bank.index() < 3);
            bank.advance();
        }
    }

    #[test]
    #[should_panic(expected = "example bank must not be empty")]
    fn example_bank_rejects_empty_set() {
        let _ = ExampleBank::with_examples(&[]);
    }

    #[test]
    fn rotation_updates_placeholder_while_field_is_empty() {
        let mut form = State::new(MIN);
        assert_eq!(form.placeholder(), DEFAULT_PLACEHOLDER);

        assert!(form.rotate_placeholder());
        assert_eq!(form.placeholder(), EXAMPLE_PROMPTS[0]);

        assert!(form.rotate_placeholder());
        assert_eq!(form.placeholder(), EXAMPLE_PROMPTS[1]);
    }

    #[test]
    fn rotation_is_noop_while_field_has_text() {
        let mut form = State::new(MIN);
        assert!(form.rotate_placeholder());
        let held = form.placeholder().to_string();

        form.update(Message::PromptChanged("drafting".into()));
        assert!(!form.rotate_placeholder());
        assert_eq!(form.placeholder(), held);

        // Clearing the field resumes the cycle where it left off.
        form.update(Message::PromptChanged(String::new()));
        assert!(form.rotate_placeholder());
        assert_eq!(form.placeholder(), EXAMPLE_PROMPTS[1]);
    }

    #[test]
    fn submit_empty_prompt_is_rejected() {
        let mut form = State::new(MIN);
        let event = form.update(Message::SubmitPressed);

        assert_eq!(event, Some(Event::Rejected(ValidationError::Empty)));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), IDLE_SUBMIT_LABEL);
    }

    #[test]
    fn submit_short_prompt_is_rejected() {
        let mut form = State::new(MIN);
        form.update(Message::PromptChanged("short".into()));
        let event = form.update(Message::SubmitPressed);

        assert_eq!(
            event,
            Some(Event::Rejected(ValidationError::TooShort { min: MIN }))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn submit_valid_prompt_enters_busy_state() {
        let mut form = State::new(MIN);
        form.update(Message::PromptChanged(
            "  A weather app with hourly forecasts  ".into(),
        ));
        let event = form.update(Message::SubmitPressed);

        assert_eq!(
            event,
            Some(Event::Submitted(
                "A weather app with hourly forecasts".to_string()
            ))
        );
        assert!(form.is_submitting());
        assert!(form.submit_label().contains("Generating"));
    }

    #[test]
    fn submit_while_busy_is_ignored() {
        let mut form = State::new(MIN);
        form.update(Message::PromptChanged("A long enough prompt".into()));
        assert!(form.update(Message::SubmitPressed).is_some());

        assert_eq!(form.update(Message::SubmitPressed), None);
    }

    #[test]
    fn edits_while_busy_are_ignored() {
        let mut form = State::new(MIN);
        form.update(Message::PromptChanged("A long enough prompt".into()));
        form.update(Message::SubmitPressed);

        form.update(Message::PromptChanged("sneaky edit".into()));
        assert_eq!(form.prompt(), "A long enough prompt");
    }

    #[test]
    fn finish_submission_reenables_form() {
        let mut form = State::new(MIN);
        form.update(Message::PromptChanged("A long enough prompt".into()));
        form.update(Message::SubmitPressed);
        assert!(form.is_submitting());

        form.finish_submission();
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), IDLE_SUBMIT_LABEL);
    }
}
