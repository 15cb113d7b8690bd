// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Offsets, progress widths and colors are all `f32`, so tests compare them
//! with the `approx` macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
