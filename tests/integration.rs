// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driven entirely by simulated time.

use iced_toast::error::Error;
use iced_toast::toast::{
    Behavior, Dimension, Edge, Enqueued, Phase, ProviderConfig, Request, TextStyle,
    ToastOptions, ToastParams, ToastProvider, ToastScope, ToastStyle,
};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(100);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn text(value: &str) -> ToastParams {
    ToastParams::plain(ToastOptions::text(value))
}

/// Advances simulated time tick by tick, recording the displayed title at
/// every tick.
fn timeline(provider: &mut ToastProvider, start: Instant, total: Duration) -> Vec<Option<String>> {
    let mut seen = Vec::new();
    let mut now = start;
    while now < start + total {
        now += TICK;
        provider.tick(now);
        seen.push(
            provider
                .current()
                .and_then(Request::title)
                .map(str::to_string),
        );
    }
    seen
}

fn span_of(seen: &[Option<String>], title: &str) -> usize {
    seen.iter()
        .filter(|entry| entry.as_deref() == Some(title))
        .count()
}

#[test]
fn appended_toasts_show_one_after_another() {
    let t0 = Instant::now();
    let mut provider = ToastProvider::default();
    provider.show_toast(text("A"), Behavior::Append, t0);
    provider.show_toast(text("B"), Behavior::Append, t0);

    let seen = timeline(&mut provider, t0, ms(6500));

    // Ticks at 100..=2900 show A, 3000..=5900 show B, then nothing.
    assert_eq!(span_of(&seen, "A"), 29);
    assert_eq!(span_of(&seen, "B"), 30);
    assert!(seen[seen.len() - 1].is_none());
    let first_b = seen
        .iter()
        .position(|entry| entry.as_deref() == Some("B"))
        .expect("B shown");
    let last_a = seen
        .iter()
        .rposition(|entry| entry.as_deref() == Some("A"))
        .expect("A shown");
    assert_eq!(first_b, last_a + 1);
}

#[test]
fn urgent_replace_skips_queued_toast() {
    let t0 = Instant::now();
    let mut provider = ToastProvider::default();
    let a = provider.show_toast(text("A"), Behavior::Append, t0).id();
    provider.show_toast(text("B"), Behavior::Append, t0);

    let replace_at = t0 + ms(1000);
    provider.show_toast(
        ToastParams::error(ToastOptions::text("Err")),
        Behavior::ReplaceNow,
        replace_at,
    );

    // The replaced toast's wake-up arrives and is ignored.
    assert!(!provider.expire(a, t0 + ms(3000)));

    let seen = timeline(&mut provider, replace_at, ms(5000));
    assert_eq!(span_of(&seen, "B"), 0);
    assert_eq!(span_of(&seen, "Err"), 29);
    assert!(provider.is_idle());
}

#[test]
fn one_shot_expiry_and_tick_polling_agree() {
    let t0 = Instant::now();
    let mut by_timer = ToastProvider::default();
    let mut by_tick = ToastProvider::default();
    for provider in [&mut by_timer, &mut by_tick] {
        provider.show_toast(text("A"), Behavior::Append, t0);
        provider.show_toast(text("B"), Behavior::Append, t0);
    }

    let armed = by_timer.take_armed().expect("armed on promotion");
    assert!(by_timer.expire(armed.token, armed.deadline));
    timeline(&mut by_tick, t0, ms(3000));

    let title = |provider: &ToastProvider| {
        provider.current().and_then(Request::title).map(str::to_string)
    };
    assert_eq!(title(&by_timer), Some("B".to_string()));
    assert_eq!(title(&by_tick), title(&by_timer));
}

#[test]
fn per_toast_duration_beats_provider_default() {
    let t0 = Instant::now();
    let mut provider = ToastProvider::new(ProviderConfig::default().with_duration_ms(10_000));
    provider.show_toast(
        ToastParams::info(ToastOptions::text("short").duration_ms(500)),
        Behavior::Append,
        t0,
    );
    provider.show_toast(text("long"), Behavior::Append, t0);

    let seen = timeline(&mut provider, t0, ms(2000));

    assert_eq!(span_of(&seen, "short"), 4);
    assert_eq!(span_of(&seen, "long"), 16);
}

#[test]
fn style_precedence_is_field_by_field() {
    let provider_style = ToastStyle::default()
        .background("red")
        .width(Dimension::Px(100.0));
    let mut provider = ToastProvider::new(ProviderConfig::default().with_style(provider_style));

    provider.show_toast(
        ToastParams::info(
            ToastOptions::text("styled").style(
                ToastStyle::default()
                    .background("blue")
                    .text(TextStyle {
                        font_size: Some(20.0),
                        ..TextStyle::default()
                    }),
            ),
        ),
        Behavior::Append,
        Instant::now(),
    );

    let style = provider.current().expect("displayed").style();
    assert_eq!(style.background_color, "blue");
    assert_eq!(style.width, Dimension::Px(100.0));
    assert_eq!(style.edge, Edge::Bottom);
    assert_eq!(style.text_style.color, "#fff");
    assert_eq!(style.text_style.font_size, 20.0);
}

#[test]
fn frame_reports_entrance_rest_and_exit() {
    let t0 = Instant::now();
    let mut provider = ToastProvider::default();
    provider.show_toast(text("A"), Behavior::Append, t0);

    let entering = provider.frame(t0).expect("displayed");
    assert_eq!(entering.phase, Phase::Entering);
    assert!(entering.offset > 0.0);

    timeline(&mut provider, t0, ms(1000));
    let resting = provider.frame(t0 + ms(1000)).expect("displayed");
    assert_eq!(resting.phase, Phase::Resting);
    assert!(resting.progress_width > 0.0);
    assert!(resting.progress_width < resting.track_width);

    timeline(&mut provider, t0 + ms(1000), ms(1800));
    let exiting = provider.frame(t0 + ms(2800)).expect("displayed");
    assert_eq!(exiting.phase, Phase::Exiting);
}

#[test]
fn scope_without_provider_is_usage_error() {
    let mut scope = ToastScope::new();

    let outcome = scope.show_toast(text("lost"), Behavior::Append, Instant::now());

    assert!(matches!(outcome, Err(Error::OutsideProvider)));
}

#[test]
fn scope_forwards_once_mounted() {
    let mut scope = ToastScope::new();
    scope.mount(ProviderConfig::default());

    let outcome = scope
        .show_toast(text("found"), Behavior::Append, Instant::now())
        .expect("mounted");

    assert!(matches!(outcome, Enqueued::Shown(_)));
}
