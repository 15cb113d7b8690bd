// SPDX-License-Identifier: MPL-2.0
//! Toast style model and resolution.
//!
//! A caller may pass a partial [`ToastStyle`] with each toast, the provider
//! carries its own partial default, and [`ResolvedStyle::default`] holds the
//! hard-coded fallbacks. [`resolve_style`] merges the three field by field,
//! highest precedence first.

use crate::config::defaults::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_RADIUS, DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR,
};
use serde::{Deserialize, Serialize};

/// Screen edge a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    #[default]
    Bottom,
}

impl Edge {
    /// Direction of travel away from the resting position: `-1.0` moves up,
    /// `1.0` moves down.
    #[must_use]
    pub fn outward(self) -> f32 {
        match self {
            Edge::Top => -1.0,
            Edge::Bottom => 1.0,
        }
    }
}

impl std::str::FromStr for Edge {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            other => Err(format!("unknown edge '{other}', expected 'top' or 'bottom'")),
        }
    }
}

/// Card width or height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Sized to content.
    #[default]
    Auto,
    /// Fixed size in logical pixels.
    Px(f32),
    /// Fraction of the available extent, `0.0..=100.0`.
    Percent(f32),
}

impl Dimension {
    /// Resolves to a concrete length given the available extent, or `None`
    /// when the size follows content.
    #[must_use]
    pub fn to_length(self, available: f32) -> Option<f32> {
        match self {
            Dimension::Auto => None,
            Dimension::Px(px) => Some(px.max(0.0)),
            Dimension::Percent(pct) => Some(available * pct.clamp(0.0, 100.0) / 100.0),
        }
    }
}

/// Partial text style; unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl TextStyle {
    #[must_use]
    pub fn merged_over(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            color: self.color.clone().or_else(|| base.color.clone()),
            font_size: self.font_size.or(base.font_size),
        }
    }
}

/// Text style with every field decided.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTextStyle {
    pub color: String,
    pub font_size: f32,
}

impl ResolvedTextStyle {
    /// Applies a per-segment override on top of this style.
    #[must_use]
    pub fn with_override(&self, segment: Option<&TextStyle>) -> ResolvedTextStyle {
        match segment {
            Some(style) => ResolvedTextStyle {
                color: style.color.clone().unwrap_or_else(|| self.color.clone()),
                font_size: style.font_size.unwrap_or(self.font_size),
            },
            None => self.clone(),
        }
    }
}

impl Default for ResolvedTextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_TEXT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Partial card style, as supplied per toast or as a provider-wide default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToastStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl ToastStyle {
    #[must_use]
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn at(mut self, edge: Edge) -> Self {
        self.position = Some(edge);
        self
    }

    #[must_use]
    pub fn text(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Field-level merge of `self` over `base`: every field set here wins,
    /// every unset field inherits from `base`.
    #[must_use]
    pub fn merged_over(&self, base: &ToastStyle) -> ToastStyle {
        let text_style = match (&self.text_style, &base.text_style) {
            (Some(own), Some(inherited)) => Some(own.merged_over(inherited)),
            (Some(own), None) => Some(own.clone()),
            (None, inherited) => inherited.clone(),
        };

        ToastStyle {
            background_color: self
                .background_color
                .clone()
                .or_else(|| base.background_color.clone()),
            // Sizes always coalesce against the base, even when an override
            // object carries other fields.
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            border_radius: self.border_radius.or(base.border_radius),
            position: self.position.or(base.position),
            text_style,
        }
    }
}

/// Fully merged style, frozen for one toast's display lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub background_color: String,
    pub width: Dimension,
    pub height: Dimension,
    pub border_radius: f32,
    pub edge: Edge,
    pub text_style: ResolvedTextStyle,
}

impl ResolvedStyle {
    /// Fills every unset field of `partial` from the hard-coded defaults.
    #[must_use]
    pub fn from_partial(partial: &ToastStyle) -> Self {
        let fallback = Self::default();
        let text_style = match &partial.text_style {
            Some(text) => fallback.text_style.with_override(Some(text)),
            None => fallback.text_style,
        };

        Self {
            background_color: partial
                .background_color
                .clone()
                .unwrap_or(fallback.background_color),
            width: partial.width.unwrap_or(fallback.width),
            height: partial.height.unwrap_or(fallback.height),
            border_radius: partial.border_radius.unwrap_or(fallback.border_radius),
            edge: partial.position.unwrap_or(fallback.edge),
            text_style,
        }
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            width: Dimension::Auto,
            height: Dimension::Auto,
            border_radius: DEFAULT_BORDER_RADIUS,
            edge: Edge::Bottom,
            text_style: ResolvedTextStyle::default(),
        }
    }
}

/// Resolves the style of one toast: per-request override, then provider
/// default, then hard-coded default, field by field.
#[must_use]
pub fn resolve_style(override_style: Option<&ToastStyle>, provider: &ToastStyle) -> ResolvedStyle {
    match override_style {
        Some(own) => ResolvedStyle::from_partial(&own.merged_over(provider)),
        None => ResolvedStyle::from_partial(provider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_field_by_field() {
        let provider = ToastStyle::default()
            .background("red")
            .width(Dimension::Px(100.0));
        let custom = ToastStyle::default().background("blue");

        let resolved = resolve_style(Some(&custom), &provider);

        assert_eq!(resolved.background_color, "blue");
        assert_eq!(resolved.width, Dimension::Px(100.0));
    }

    #[test]
    fn unset_fields_fall_back_to_hard_defaults() {
        let resolved = resolve_style(None, &ToastStyle::default());
        assert_eq!(resolved, ResolvedStyle::default());
        assert_eq!(resolved.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(resolved.edge, Edge::Bottom);
    }

    #[test]
    fn size_coalesces_against_provider_when_override_present() {
        let provider = ToastStyle::default()
            .width(Dimension::Percent(50.0))
            .height(Dimension::Px(80.0));
        let custom = ToastStyle::default().at(Edge::Top);

        let resolved = resolve_style(Some(&custom), &provider);

        assert_eq!(resolved.width, Dimension::Percent(50.0));
        assert_eq!(resolved.height, Dimension::Px(80.0));
        assert_eq!(resolved.edge, Edge::Top);
    }

    #[test]
    fn text_style_merges_nested_fields() {
        let provider = ToastStyle::default().text(TextStyle {
            color: Some("#000".into()),
            font_size: Some(20.0),
        });
        let custom = ToastStyle::default().text(TextStyle {
            color: Some("#0f0".into()),
            font_size: None,
        });

        let resolved = resolve_style(Some(&custom), &provider);

        assert_eq!(resolved.text_style.color, "#0f0");
        assert_eq!(resolved.text_style.font_size, 20.0);
    }

    #[test]
    fn segment_override_only_replaces_set_fields() {
        let base = ResolvedTextStyle::default();
        let segment = TextStyle {
            color: None,
            font_size: Some(12.0),
        };

        let applied = base.with_override(Some(&segment));

        assert_eq!(applied.color, DEFAULT_TEXT_COLOR);
        assert_eq!(applied.font_size, 12.0);
    }

    #[test]
    fn dimension_lengths() {
        assert_eq!(Dimension::Auto.to_length(400.0), None);
        assert_eq!(Dimension::Px(120.0).to_length(400.0), Some(120.0));
        assert_eq!(Dimension::Percent(50.0).to_length(400.0), Some(200.0));
        assert_eq!(Dimension::Percent(150.0).to_length(400.0), Some(400.0));
    }

    #[test]
    fn edge_parses_case_insensitively() {
        assert_eq!("TOP".parse::<Edge>(), Ok(Edge::Top));
        assert_eq!(" bottom ".parse::<Edge>(), Ok(Edge::Bottom));
        assert!("left".parse::<Edge>().is_err());
    }

    #[test]
    fn edge_outward_direction() {
        assert!(Edge::Top.outward() < 0.0);
        assert!(Edge::Bottom.outward() > 0.0);
    }
}
