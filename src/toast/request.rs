// SPDX-License-Identifier: MPL-2.0
//! Toast request model.
//!
//! Callers describe a toast with [`ToastParams`]: one severity group carrying
//! content, style overrides, affordances and timing. [`Request::resolve`] turns
//! that description into an immutable [`Request`] by walking the default chain
//! (group, call, provider, hard-coded). Resolution never fails; absent fields
//! simply fall through.

use super::style::{resolve_style, ResolvedStyle, TextStyle, ToastStyle};
use crate::config::defaults::{DEFAULT_DURATION_MS, DEFAULT_PROGRESS_COLOR};
use std::fmt;
use std::time::Duration;

/// Identity token of one toast, unique within its provider.
///
/// Timers are tagged with it so a late callback can tell whether it still
/// governs the displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named severity groups, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Info,
    Error,
    Warning,
    #[default]
    Default,
}

impl Severity {
    /// Order in which groups are inspected when a caller supplies several.
    pub const SELECTION_ORDER: [Severity; 5] = [
        Severity::Success,
        Severity::Info,
        Severity::Error,
        Severity::Warning,
        Severity::Default,
    ];
}

/// One line of toast text with an optional style override.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSegment {
    pub text: String,
    pub style: Option<TextStyle>,
}

impl TextSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    #[must_use]
    pub fn styled(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Segments with empty text are not rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Up to two text segments: a primary line and a secondary line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Content {
    pub text1: Option<TextSegment>,
    pub text2: Option<TextSegment>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text1: Some(TextSegment::new(text)),
            text2: None,
        }
    }

    #[must_use]
    pub fn primary(mut self, segment: TextSegment) -> Self {
        self.text1 = Some(segment);
        self
    }

    #[must_use]
    pub fn secondary(mut self, segment: TextSegment) -> Self {
        self.text2 = Some(segment);
        self
    }

    /// The primary text, if present and non-empty.
    #[must_use]
    pub fn primary_text(&self) -> Option<&str> {
        self.text1
            .as_ref()
            .filter(|segment| segment.is_visible())
            .map(|segment| segment.text.as_str())
    }
}

/// User-supplied decoration, passed through untouched to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance(String);

impl Affordance {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

/// Fields of one severity group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub message: Option<Content>,
    pub custom_style: Option<ToastStyle>,
    pub close_affordance: Option<Affordance>,
    pub leading_affordance: Option<Affordance>,
    pub duration_ms: Option<u64>,
    pub progress_color: Option<String>,
}

impl ToastOptions {
    /// Options carrying a single line of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message: Some(Content::text(text)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(mut self, content: Content) -> Self {
        self.message = Some(content);
        self
    }

    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.custom_style = Some(style);
        self
    }

    #[must_use]
    pub fn closable(mut self, affordance: Affordance) -> Self {
        self.close_affordance = Some(affordance);
        self
    }

    #[must_use]
    pub fn leading(mut self, affordance: Affordance) -> Self {
        self.leading_affordance = Some(affordance);
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn progress_color(mut self, color: impl Into<String>) -> Self {
        self.progress_color = Some(color.into());
        self
    }
}

/// A caller's toast ask: at most one severity group is expected, plus an
/// optional call-level duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastParams {
    pub success: Option<ToastOptions>,
    pub info: Option<ToastOptions>,
    pub error: Option<ToastOptions>,
    pub warning: Option<ToastOptions>,
    pub default: Option<ToastOptions>,
    pub duration_ms: Option<u64>,
}

impl ToastParams {
    pub fn new(severity: Severity, options: ToastOptions) -> Self {
        let mut params = Self::default();
        *params.slot_mut(severity) = Some(options);
        params
    }

    pub fn success(options: ToastOptions) -> Self {
        Self::new(Severity::Success, options)
    }

    pub fn info(options: ToastOptions) -> Self {
        Self::new(Severity::Info, options)
    }

    pub fn error(options: ToastOptions) -> Self {
        Self::new(Severity::Error, options)
    }

    pub fn warning(options: ToastOptions) -> Self {
        Self::new(Severity::Warning, options)
    }

    pub fn plain(options: ToastOptions) -> Self {
        Self::new(Severity::Default, options)
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut Option<ToastOptions> {
        match severity {
            Severity::Success => &mut self.success,
            Severity::Info => &mut self.info,
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Default => &mut self.default,
        }
    }

    /// Removes and returns the first present group in selection order.
    fn take_selected(&mut self) -> Option<(Severity, ToastOptions)> {
        Severity::SELECTION_ORDER
            .into_iter()
            .find_map(|severity| self.slot_mut(severity).take().map(|opts| (severity, opts)))
    }
}

/// Provider-level inputs to resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderDefaults {
    pub duration_ms: Option<u64>,
    pub style: ToastStyle,
}

/// An immutable, fully resolved toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    id: ToastId,
    severity: Severity,
    content: Option<Content>,
    style: ResolvedStyle,
    close_affordance: Option<Affordance>,
    leading_affordance: Option<Affordance>,
    duration: Duration,
    progress_color: String,
}

impl Request {
    /// Builds a request from caller params and provider defaults.
    pub fn resolve(id: ToastId, mut params: ToastParams, defaults: &ProviderDefaults) -> Self {
        let (severity, options) = params.take_selected().unwrap_or_default();

        // Zero counts as unset at every level so the result is always positive.
        let duration_ms = [options.duration_ms, params.duration_ms, defaults.duration_ms]
            .into_iter()
            .flatten()
            .find(|ms| *ms > 0)
            .unwrap_or(DEFAULT_DURATION_MS);

        Self {
            id,
            severity,
            content: options.message,
            style: resolve_style(options.custom_style.as_ref(), &defaults.style),
            close_affordance: options.close_affordance,
            leading_affordance: options.leading_affordance,
            duration: Duration::from_millis(duration_ms),
            progress_color: options
                .progress_color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_PROGRESS_COLOR.to_string()),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    #[must_use]
    pub fn close_affordance(&self) -> Option<&Affordance> {
        self.close_affordance.as_ref()
    }

    #[must_use]
    pub fn leading_affordance(&self) -> Option<&Affordance> {
        self.leading_affordance.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn progress_color(&self) -> &str {
        &self.progress_color
    }

    /// Primary text, handy for logging and assertions.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.content.as_ref().and_then(Content::primary_text)
    }
}
