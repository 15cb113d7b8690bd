// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the hard-coded
//! fallbacks at the bottom of every default chain. Constants are organized by
//! category.
//!
//! # Categories
//!
//! - **Timing**: Display duration, progress tick, exit lead-in
//! - **Style**: Fallback visual style for a toast card
//! - **Motion**: Entrance/exit animation parameters
//! - **Layout**: Viewport-relative placement ratios

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Display duration used when neither the request nor the provider sets one.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Period of the progress tick while a toast is displayed.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Minimum accepted tick period.
pub const MIN_TICK_MS: u64 = 10;

/// Maximum accepted tick period.
pub const MAX_TICK_MS: u64 = 1000;

/// How long before logical expiry the exit animation is started.
pub const DEFAULT_EXIT_LEAD_MS: u64 = 250;

/// Longest accepted exit lead-in; never more than the exit animation itself.
pub const MAX_EXIT_LEAD_MS: u64 = EXIT_MS;

// ==========================================================================
// Style Defaults
// ==========================================================================

pub const DEFAULT_BACKGROUND_COLOR: &str = "rgba(0, 0, 0, 0.8)";

pub const DEFAULT_BORDER_RADIUS: f32 = 5.0;

pub const DEFAULT_TEXT_COLOR: &str = "#fff";

pub const DEFAULT_FONT_SIZE: f32 = 16.0;

pub const DEFAULT_PROGRESS_COLOR: &str = "blue";

/// Height of the progress bar along the bottom of the card.
pub const PROGRESS_BAR_HEIGHT: f32 = 4.0;

/// Vertical gap between the first and second text segments.
pub const SECONDARY_TEXT_GAP: f32 = 8.0;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Entrance animation length.
pub const ENTRANCE_MS: u64 = 500;

/// Exit animation length.
pub const EXIT_MS: u64 = 500;

/// Off-screen start offset, as a multiple of the viewport height.
pub const OFFSCREEN_FACTOR: f32 = 1.9;

/// Distance travelled by the exit animation, in logical pixels.
pub const EXIT_DISPLACEMENT: f32 = 300.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Progress track width as a fraction of the viewport width.
pub const TRACK_WIDTH_RATIO: f32 = 0.965;

/// Top inset for top-edge toasts, as a fraction of the viewport height.
pub const TOP_INSET_RATIO: f32 = 0.06;

/// Bottom inset for bottom-edge toasts, in logical pixels.
pub const BOTTOM_INSET: f32 = 20.0;

/// Horizontal inset on both sides of the card, in logical pixels.
pub const SIDE_INSET: f32 = 20.0;

/// Inner padding of the card.
pub const CARD_PADDING: f32 = 16.0;

/// Line height multiplier used to estimate content-sized cards.
pub const LINE_HEIGHT: f32 = 1.3;

/// Viewport assumed before the first resize event arrives.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
