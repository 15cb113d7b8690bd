// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: a column of controls with the toast overlay on top.

use super::Message;
use crate::toast::{Severity, ToastProvider};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::toast;
use iced::widget::{button, container, Column, Container, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub provider: Option<&'a ToastProvider>,
    pub last_error: Option<&'a str>,
    pub config_warning: Option<&'a str>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mounted = ctx.provider.is_some();

    let mut controls = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .push(Text::new("Toast demo").size(typography::TITLE_MD));

    for severity in Severity::SELECTION_ORDER {
        controls = controls.push(action_button(
            severity_label(severity),
            Message::Show(severity),
            severity_accent(severity),
        ));
    }

    controls = controls
        .push(action_button(
            "Urgent error (replace)",
            Message::ReplaceWithError,
            palette::ERROR_500,
        ))
        .push(action_button("Close current", Message::Close, palette::GRAY_400))
        .push(action_button(
            if mounted {
                "Unmount provider"
            } else {
                "Mount provider"
            },
            Message::ToggleProvider,
            palette::GRAY_400,
        ))
        .push(caption(status_line(ctx.provider)));

    if let Some(error) = ctx.last_error {
        controls = controls.push(caption(format!("Last error: {error}")));
    }
    if let Some(warning) = ctx.config_warning {
        controls = controls.push(caption(format!("Config ignored: {warning}")));
    }

    let base = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .style(background_style);

    let overlay = toast::overlay(ctx.provider.and_then(|provider| provider.frame(ctx.now)))
        .map(Message::Toast);

    Stack::new().push(base).push(overlay).into()
}

fn status_line(provider: Option<&ToastProvider>) -> String {
    match provider {
        None => "Provider unmounted".to_string(),
        Some(provider) => {
            let current = provider
                .current()
                .map_or_else(|| "none".to_string(), |toast| toast.id().to_string());
            format!("Showing: {current}, waiting: {}", provider.pending_len())
        }
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "Success",
        Severity::Info => "Info",
        Severity::Error => "Error",
        Severity::Warning => "Warning",
        Severity::Default => "Default",
    }
}

fn severity_accent(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Error => palette::ERROR_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Default => palette::GRAY_400,
    }
}

fn caption<'a>(content: String) -> Text<'a> {
    Text::new(content).size(typography::CAPTION)
}

fn action_button(label: &str, message: Message, accent: Color) -> Element<'_, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(message)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::SM])
    .style(move |_theme: &Theme, status| action_button_style(accent, status))
    .into()
}

fn action_button_style(accent: Color, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OPAQUE,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Window background behind the controls.
fn background_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_100),
        ..Default::default()
    }
}
