// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, the toast
//! notifications, and pipeline progress reports.
//!
//! The `App` struct wires the components together and translates messages
//! into state changes. This file intentionally keeps policy decisions
//! (validation feedback, busy-state lifetime, notification sweep) close to
//! the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::pipeline::{BuildStatus, ProgressSnapshot};
use crate::ui::form;
use crate::ui::notifications::{Manager, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Window title base.
const APP_TITLE: &str = "AI App Generator";

/// Root Iced application state.
pub struct App {
    /// Prompt form (input gate + placeholder rotation).
    form: form::State,
    /// Toast notification manager for user feedback.
    notifications: Manager,
    /// Latest pipeline progress report, if a generation has started.
    pipeline: Option<ProgressSnapshot>,
    /// Interval between placeholder rotation ticks.
    rotation_interval: Duration,
    /// Instant of the latest sweep tick; the view fades toasts against it.
    last_tick: Instant,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("is_submitting", &self.form.is_submitting())
            .field("notifications", &self.notifications.count())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: form::State::new(config::DEFAULT_MIN_PROMPT_CHARS),
            notifications: Manager::new(),
            pipeline: None,
            rotation_interval: Duration::from_millis(config::DEFAULT_ROTATION_INTERVAL_MS),
            last_tick: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state from config and launcher `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_override = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_override);

        let min_prompt_chars = config
            .form
            .min_prompt_chars
            .unwrap_or(config::DEFAULT_MIN_PROMPT_CHARS);
        let rotation_interval_ms = config::clamp_rotation_interval(
            config
                .rotation
                .interval_ms
                .unwrap_or(config::DEFAULT_ROTATION_INTERVAL_MS),
        );

        let mut app = App {
            form: form::State::new(min_prompt_chars),
            rotation_interval: Duration::from_millis(rotation_interval_ms),
            ..Self::default()
        };

        if let Some(prompt) = flags.prompt {
            app.form.set_prompt(prompt);
        }

        if let Some(warning) = config_warning {
            log::warn!("{warning}");
            app.notifications.push(Notification::error(warning));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.form.is_submitting() {
            format!("{APP_TITLE} — Generating…")
        } else {
            APP_TITLE.to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let rotation_sub = subscription::create_rotation_subscription(self.rotation_interval);

        Subscription::batch([tick_sub, rotation_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(form_message) => {
                match self.form.update(form_message) {
                    Some(form::Event::Rejected(error)) => {
                        log::info!("prompt rejected: {error}");
                        self.notifications.push(Notification::error(error.message()));
                    }
                    Some(form::Event::Submitted(prompt)) => {
                        log::info!("prompt accepted ({} chars)", prompt.chars().count());
                        self.pipeline = None;
                        self.notifications.push(Notification::info(
                            "Generating your app. This can take a few minutes.",
                        ));
                    }
                    None => {}
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.last_tick = now;
                self.notifications.tick(now);
                Task::none()
            }
            Message::RotatePlaceholder(_instant) => {
                self.form.rotate_placeholder();
                Task::none()
            }
            Message::Progress(snapshot) => {
                self.handle_progress(snapshot);
                Task::none()
            }
        }
    }

    /// Applies a pipeline progress report.
    ///
    /// Terminal statuses end the form's busy state and surface a toast;
    /// intermediate reports only refresh the progress section.
    fn handle_progress(&mut self, snapshot: ProgressSnapshot) {
        match snapshot.build_status {
            BuildStatus::Completed => {
                self.form.finish_submission();
                self.notifications
                    .push(Notification::success("Your app was generated successfully"));
            }
            BuildStatus::Failed => {
                self.form.finish_submission();
                let message = snapshot
                    .first_error()
                    .unwrap_or("App generation failed")
                    .to_string();
                log::warn!("generation failed: {message}");
                self.notifications.push(Notification::error(message));
            }
            BuildStatus::Pending | BuildStatus::InProgress => {}
        }
        self.pipeline = Some(snapshot);
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            form: &self.form,
            notifications: &self.notifications,
            pipeline: self.pipeline.as_ref(),
            now: self.last_tick,
        })
    }
}
