// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: fixed-width
//! cards with a kind-colored background and white text, pinned to the
//! top-right corner of the window. During the exit transition the card
//! fades out; once the transition completes the manager sweeps it.

use super::manager::Manager;
use super::notification::Notification;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification as it appears at `now`.
    ///
    /// Toasts expose no interactions, so the produced element is generic
    /// over the consumer's message type.
    pub fn view<'a, M: 'a>(notification: &'a Notification, now: Instant) -> Element<'a, M> {
        let background = notification.kind().color();
        // Fade tracks the exit transition; fully opaque while visible.
        let alpha = 1.0 - notification.exit_progress_at(now);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
            });

        Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::MD, spacing::LG])
            .style(move |_theme: &Theme| toast_container_style(background, alpha))
            .into()
    }

    /// Renders the toast overlay with all live notifications.
    ///
    /// Positions toasts in the top-right corner. Stacking is whatever the
    /// column layout does naturally; there is no collision avoidance.
    pub fn view_overlay<'a, M: 'a>(manager: &'a Manager, now: Instant) -> Element<'a, M> {
        let toasts: Vec<Element<'a, M>> = manager
            .visible()
            .map(|notification| Self::view(notification, now))
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space and swallows no input.
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast card.
fn toast_container_style(background: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..background
        })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}
