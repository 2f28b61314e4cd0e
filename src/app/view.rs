// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the page (heading, prompt form, progress section) and lays the
//! toast overlay over it.

use super::Message;
use crate::pipeline::ProgressSnapshot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::form;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{progress_bar, stack, text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub form: &'a form::State,
    pub notifications: &'a Manager,
    pub pipeline: Option<&'a ProgressSnapshot>,
    /// Instant of the latest tick; drives the toast exit fade.
    pub now: Instant,
}

/// Renders the full application view with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(
            text("AI App Generator")
                .size(typography::TITLE_LG)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_600),
                }),
        )
        .push(
            text("Describe the app you want and let the pipeline build it")
                .size(typography::BODY)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(ctx.form.view().map(Message::Form));

    if ctx.form.is_submitting() {
        content = content.push(view_progress(ctx.pipeline));
    }

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.now);

    stack([page.into(), overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Renders the pipeline stage label and progress bar for a running
/// generation.
fn view_progress(snapshot: Option<&ProgressSnapshot>) -> Element<'_, Message> {
    let (label, percent) = match snapshot {
        Some(snapshot) => (snapshot.stage_label(), f32::from(snapshot.progress)),
        None => ("Starting…", 0.0),
    };

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(text(label).size(typography::BODY).style(|_theme: &Theme| {
            iced::widget::text::Style {
                color: Some(palette::GRAY_700),
            }
        }))
        .push(progress_bar(0.0..=100.0, percent));

    Container::new(row)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .into()
}
