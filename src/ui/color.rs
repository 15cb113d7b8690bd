// SPDX-License-Identifier: MPL-2.0
//! CSS-like color strings used in toast styles.
//!
//! Supported forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
//! `rgba(r, g, b, a)` and a handful of names.

use iced::Color;

/// Parses a color string, returning `None` when it is not understood.
#[must_use]
pub fn parse(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba") {
        return parse_channels(args, true);
    }
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_channels(args, false);
    }
    named(&lower)
}

/// Parses `value`, falling back to `fallback` and finally to black.
#[must_use]
pub fn parse_or(value: &str, fallback: &str) -> Color {
    parse(value)
        .or_else(|| {
            tracing::debug!(color = value, "unparseable color, using fallback");
            parse(fallback)
        })
        .unwrap_or(Color::BLACK)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let pair = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

    match hex.len() {
        3 => {
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            Some(Color::from_rgb8(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::from_rgb8(pair(0)?, pair(2)?, pair(4)?)),
        8 => Some(Color::from_rgba8(
            pair(0)?,
            pair(2)?,
            pair(4)?,
            f32::from(pair(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_channels(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |part: &str| -> Option<u8> {
        let value: f32 = part.parse().ok()?;
        Some(value.clamp(0.0, 255.0).round() as u8)
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        parts[3].parse::<f32>().ok()?.clamp(0.0, 1.0)
    } else {
        1.0
    };
    Some(Color::from_rgba8(r, g, b, a))
}

fn named(value: &str) -> Option<Color> {
    let color = match value {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "transparent" => Color::TRANSPARENT,
        "red" => Color::from_rgb8(255, 0, 0),
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "yellow" => Color::from_rgb8(255, 255, 0),
        "orange" => Color::from_rgb8(255, 165, 0),
        "purple" => Color::from_rgb8(128, 0, 128),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const EPS: f32 = 1e-3;

    fn assert_color(actual: Color, expected: Color) {
        assert_abs_diff_eq!(actual.r, expected.r, epsilon = EPS);
        assert_abs_diff_eq!(actual.g, expected.g, epsilon = EPS);
        assert_abs_diff_eq!(actual.b, expected.b, epsilon = EPS);
        assert_abs_diff_eq!(actual.a, expected.a, epsilon = EPS);
    }

    #[test]
    fn short_hex_expands_digits() {
        assert_color(parse("#fff").expect("valid"), Color::WHITE);
        assert_color(parse("#f00").expect("valid"), Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn long_hex_with_and_without_alpha() {
        assert_color(
            parse("#336699").expect("valid"),
            Color::from_rgb8(0x33, 0x66, 0x99),
        );
        let translucent = parse("#00000080").expect("valid");
        assert_abs_diff_eq!(translucent.a, 128.0 / 255.0, epsilon = EPS);
    }

    #[test]
    fn rgba_function_matches_default_background() {
        let color = parse("rgba(0, 0, 0, 0.8)").expect("valid");
        assert_color(color, Color::from_rgba8(0, 0, 0, 0.8));
    }

    #[test]
    fn rgb_function_ignores_case_and_spacing() {
        assert_color(
            parse("  RGB( 10,20 ,30 ) ").expect("valid"),
            Color::from_rgb8(10, 20, 30),
        );
    }

    #[test]
    fn names_are_recognized() {
        assert_color(parse("blue").expect("valid"), Color::from_rgb8(0, 0, 255));
        assert_color(parse("Grey").expect("valid"), Color::from_rgb8(128, 128, 128));
    }

    #[test]
    fn garbage_is_rejected() {
        for value in ["", "#12", "#ggg", "rgb(1, 2)", "rgba(1, 2, 3)", "chartreuse-ish"] {
            assert!(parse(value).is_none(), "{value} should not parse");
        }
    }

    #[test]
    fn parse_or_falls_back() {
        assert_color(parse_or("nope", "#fff"), Color::WHITE);
        assert_color(parse_or("nope", "also nope"), Color::BLACK);
    }
}
