// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the displayed toast.
//!
//! The card is drawn from the toast's resolved style: background, radius,
//! an optional leading affordance, up to two text lines, an optional close
//! button and a progress bar along the bottom edge. It is anchored to the top
//! or bottom of the viewport and shifted by the live animation offset.

use super::color;
use super::design_tokens::{opacity, palette, radius, shadow, spacing};
use crate::config::defaults::{
    BOTTOM_INSET, CARD_PADDING, DEFAULT_BACKGROUND_COLOR, DEFAULT_PROGRESS_COLOR,
    DEFAULT_TEXT_COLOR, LINE_HEIGHT, PROGRESS_BAR_HEIGHT, SECONDARY_TEXT_GAP, SIDE_INSET,
    TOP_INSET_RATIO,
};
use crate::toast::{Edge, Request, ResolvedTextStyle, TextSegment, ToastFrame, Viewport};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The close affordance was pressed.
    Close,
}

/// Where the card sits inside the viewport at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub edge: Edge,
    /// Distance from the anchoring edge to the card.
    pub inset: f32,
    /// Part of the card still inside the viewport.
    pub visible_height: f32,
}

/// Computes the placement of a card of `card_height` shifted by `offset`.
///
/// Returns `None` once the card is entirely outside the viewport.
#[must_use]
pub fn placement(edge: Edge, offset: f32, viewport: Viewport, card_height: f32) -> Option<Placement> {
    // Distance from the anchoring edge, growing toward the viewport center.
    let inset = match edge {
        Edge::Top => viewport.height * TOP_INSET_RATIO + offset,
        Edge::Bottom => BOTTOM_INSET - offset,
    };
    if inset >= viewport.height {
        return None;
    }

    let visible_height = card_height - (-inset).max(0.0);
    if visible_height <= 0.0 {
        return None;
    }

    Some(Placement {
        edge,
        inset: inset.max(0.0),
        visible_height,
    })
}

/// Height of a content-sized card, estimated from its text.
#[must_use]
pub fn estimated_card_height(request: &Request) -> f32 {
    let base = &request.style().text_style;
    let line = |segment: &TextSegment| {
        base.with_override(segment.style.as_ref()).font_size * LINE_HEIGHT
    };

    let (first, second) = visible_segments(request);
    let mut height = 2.0 * CARD_PADDING + PROGRESS_BAR_HEIGHT;
    if let Some(segment) = first {
        height += line(segment);
    }
    if let Some(segment) = second {
        if first.is_some() {
            height += SECONDARY_TEXT_GAP;
        }
        height += line(segment);
    }
    height
}

fn visible_segments(request: &Request) -> (Option<&TextSegment>, Option<&TextSegment>) {
    let Some(content) = request.content() else {
        return (None, None);
    };
    (visible(&content.text1), visible(&content.text2))
}

fn visible(segment: &Option<TextSegment>) -> Option<&TextSegment> {
    segment.as_ref().filter(|segment| segment.is_visible())
}

/// Renders the overlay for the displayed toast, or nothing.
pub fn overlay(frame: Option<ToastFrame<'_>>) -> Element<'_, Message> {
    match frame {
        Some(frame) => view(frame),
        None => empty(),
    }
}

/// Renders one toast frame, positioned within the viewport.
pub fn view(frame: ToastFrame<'_>) -> Element<'_, Message> {
    let request = frame.request;
    let style = request.style();
    let card_height = style
        .height
        .to_length(frame.viewport.height)
        .unwrap_or_else(|| estimated_card_height(request));

    let Some(place) = placement(style.edge, frame.offset, frame.viewport, card_height) else {
        return empty();
    };

    // Cut off the part of the card that has left the viewport.
    let (visible_align, padding, outer_align) = match place.edge {
        Edge::Top => (
            alignment::Vertical::Bottom,
            Padding {
                top: place.inset,
                right: SIDE_INSET,
                bottom: 0.0,
                left: SIDE_INSET,
            },
            alignment::Vertical::Top,
        ),
        Edge::Bottom => (
            alignment::Vertical::Top,
            Padding {
                top: 0.0,
                right: SIDE_INSET,
                bottom: place.inset,
                left: SIDE_INSET,
            },
            alignment::Vertical::Bottom,
        ),
    };

    let visible = Container::new(card(frame, card_height))
        .width(Length::Fill)
        .height(Length::Fixed(place.visible_height))
        .align_x(alignment::Horizontal::Center)
        .align_y(visible_align)
        .clip(true);

    Container::new(visible)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(outer_align)
        .padding(padding)
        .into()
}

fn card(frame: ToastFrame<'_>, card_height: f32) -> Element<'_, Message> {
    let request = frame.request;
    let style = request.style();
    let available_width = (frame.viewport.width - 2.0 * SIDE_INSET).max(0.0);
    let width = style
        .width
        .to_length(available_width)
        .map_or(Length::Fill, Length::Fixed);

    let background = color::parse_or(&style.background_color, DEFAULT_BACKGROUND_COLOR);
    let progress_color = color::parse_or(request.progress_color(), DEFAULT_PROGRESS_COLOR);
    let border_radius = style.border_radius;

    let mut header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if let Some(leading) = request.leading_affordance() {
        header = header.push(affordance_label(leading.label(), &style.text_style));
    }
    header = header.push(
        Container::new(body(request))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    );
    if let Some(close) = request.close_affordance() {
        header = header.push(
            button(affordance_label(close.label(), &style.text_style))
                .on_press(Message::Close)
                .padding(spacing::XS)
                .style(close_button_style),
        );
    }

    let bar = Container::new(Row::new())
        .width(Length::Fixed(frame.progress_width.clamp(0.0, frame.track_width)))
        .height(Length::Fixed(PROGRESS_BAR_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(progress_color)),
            ..Default::default()
        });
    let bar_layer = Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom);

    let layers = Stack::new()
        .push(
            Container::new(header)
                .width(Length::Fill)
                .padding(CARD_PADDING),
        )
        .push(bar_layer);

    Container::new(layers)
        .width(width)
        .height(Length::Fixed(card_height))
        .clip(true)
        .style(move |_theme: &Theme| card_style(background, border_radius))
        .into()
}

fn body(request: &Request) -> Element<'_, Message> {
    let base = &request.style().text_style;
    let (first, second) = visible_segments(request);

    let mut column = Column::new().align_x(alignment::Horizontal::Center);
    if let Some(segment) = first {
        column = column.push(segment_text(segment, base));
    }
    if let Some(segment) = second {
        if first.is_some() {
            column = column.push(Container::new(Row::new()).height(Length::Fixed(SECONDARY_TEXT_GAP)));
        }
        column = column.push(segment_text(segment, base));
    }
    column.into()
}

fn segment_text<'a>(segment: &'a TextSegment, base: &ResolvedTextStyle) -> Text<'a> {
    let resolved = base.with_override(segment.style.as_ref());
    let color = color::parse_or(&resolved.color, DEFAULT_TEXT_COLOR);
    Text::new(segment.text.as_str())
        .size(resolved.font_size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn affordance_label<'a>(label: &'a str, base: &ResolvedTextStyle) -> Text<'a> {
    let color = color::parse_or(&base.color, DEFAULT_TEXT_COLOR);
    Text::new(label)
        .size(base.font_size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Style function for the card container.
fn card_style(background: Color, border_radius: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: border_radius.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
