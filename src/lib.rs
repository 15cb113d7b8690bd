// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast scheduling and lifecycle engine with an Iced
//! renderer.
//!
//! A [`toast::ToastProvider`] shows at most one toast at a time, queues the
//! rest in arrival order, dismisses each after its duration and drives its
//! entrance, exit and progress animations. The [`ui`] module draws the
//! displayed toast and [`app`] hosts a small demo window.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod toast;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
