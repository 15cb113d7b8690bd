// SPDX-License-Identifier: MPL-2.0
//! User interface for the toast overlay.
//!
//! - [`toast`] - Renders the displayed toast from a [`crate::toast::ToastFrame`]
//! - [`color`] - Parses CSS-like color strings from toast styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod color;
pub mod design_tokens;
pub mod toast;
