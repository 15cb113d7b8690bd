// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation of a single numeric value.
//!
//! A [`Tween`] is sampled with an explicit `Instant`, so it behaves the same
//! under a real clock and under simulated time in tests.

use std::time::{Duration, Instant};

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Accelerating.
    EaseIn,
    /// Decelerating.
    EaseOut,
    /// S-curve.
    EaseInOut,
}

impl Easing {
    /// Maps progress `t` in `0.0..=1.0` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// A value moving from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A value resting at `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Starts moving toward `to` from wherever the value is at `now`.
    ///
    /// Any animation in flight is superseded.
    pub fn retarget(&mut self, to: f32, duration: Duration, easing: Easing, now: Instant) {
        self.from = self.value_at(now);
        self.to = to;
        self.started = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Samples the value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// The value this tween is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the animation has reached its target at `now`.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const EPS: f32 = 1e-4;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = EPS);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = EPS);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        assert_abs_diff_eq!(Easing::EaseInOut.apply(0.5), 0.5, epsilon = EPS);
        let early = Easing::EaseInOut.apply(0.25);
        let late = Easing::EaseInOut.apply(0.75);
        assert_abs_diff_eq!(early + late, 1.0, epsilon = EPS);
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_abs_diff_eq!(Easing::Linear.apply(-1.0), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(Easing::Linear.apply(2.0), 1.0, epsilon = EPS);
    }

    #[test]
    fn resting_tween_is_settled() {
        let tween = Tween::new(42.0);
        let now = Instant::now();
        assert!(tween.is_settled(now));
        assert_abs_diff_eq!(tween.value_at(now), 42.0, epsilon = EPS);
    }

    #[test]
    fn linear_tween_interpolates_over_time() {
        let t0 = Instant::now();
        let mut tween = Tween::new(0.0);
        tween.retarget(100.0, Duration::from_millis(1000), Easing::Linear, t0);

        assert_abs_diff_eq!(tween.value_at(t0), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(
            tween.value_at(t0 + Duration::from_millis(250)),
            25.0,
            epsilon = 1e-2
        );
        assert!(!tween.is_settled(t0 + Duration::from_millis(999)));
        assert!(tween.is_settled(t0 + Duration::from_millis(1000)));
        assert_abs_diff_eq!(
            tween.value_at(t0 + Duration::from_secs(5)),
            100.0,
            epsilon = EPS
        );
    }

    #[test]
    fn retarget_starts_from_current_sample() {
        let t0 = Instant::now();
        let mut tween = Tween::new(0.0);
        tween.retarget(100.0, Duration::from_millis(1000), Easing::Linear, t0);

        let midway = t0 + Duration::from_millis(500);
        tween.retarget(0.0, Duration::from_millis(500), Easing::Linear, midway);

        assert_abs_diff_eq!(tween.value_at(midway), 50.0, epsilon = 1e-2);
        assert_abs_diff_eq!(tween.target(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(
            tween.value_at(midway + Duration::from_millis(500)),
            0.0,
            epsilon = EPS
        );
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t0 = Instant::now();
        let mut tween = Tween::new(10.0);
        tween.retarget(20.0, Duration::ZERO, Easing::EaseInOut, t0);
        assert_abs_diff_eq!(tween.value_at(t0), 20.0, epsilon = EPS);
    }
}
