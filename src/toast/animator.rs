// SPDX-License-Identifier: MPL-2.0
//! Entrance, exit and progress animation for the displayed toast.
//!
//! The animator decides which values move, where to, how fast and along
//! which curve; the sampling itself is delegated to [`Tween`].

use super::request::ToastId;
use super::style::Edge;
use crate::animation::{Easing, Tween};
use crate::config::defaults::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, ENTRANCE_MS, EXIT_DISPLACEMENT, EXIT_MS,
    OFFSCREEN_FACTOR, TRACK_WIDTH_RATIO,
};
use std::time::{Duration, Instant};

const ENTRANCE: Duration = Duration::from_millis(ENTRANCE_MS);
const EXIT: Duration = Duration::from_millis(EXIT_MS);

/// Size of the surface toasts are drawn on, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Full width of the progress track.
    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.width * TRACK_WIDTH_RATIO
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

/// Where the displayed toast is in its visual lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Resting,
    Exiting,
}

/// Animation state of one displayed toast.
#[derive(Debug, Clone)]
pub struct LifecycleAnimator {
    token: ToastId,
    edge: Edge,
    track_width: f32,
    offset: Tween,
    progress: Tween,
    exiting: bool,
}

impl LifecycleAnimator {
    /// Starts the entrance of a freshly promoted toast.
    ///
    /// The card starts far off-screen on its own edge and eases to rest,
    /// while the progress bar starts filling over the whole `duration`.
    #[must_use]
    pub fn enter(
        token: ToastId,
        edge: Edge,
        viewport: Viewport,
        duration: Duration,
        now: Instant,
    ) -> Self {
        let mut offset = Tween::new(edge.outward() * viewport.height * OFFSCREEN_FACTOR);
        offset.retarget(0.0, ENTRANCE, Easing::EaseInOut, now);

        let track_width = viewport.track_width();
        let mut progress = Tween::new(0.0);
        progress.retarget(track_width, duration, Easing::Linear, now);

        Self {
            token,
            edge,
            track_width,
            offset,
            progress,
            exiting: false,
        }
    }

    /// Slides the card off its edge. Repeated calls are ignored.
    pub fn exit(&mut self, now: Instant) {
        if self.exiting {
            return;
        }
        self.exiting = true;
        self.offset.retarget(
            self.edge.outward() * EXIT_DISPLACEMENT,
            EXIT,
            Easing::EaseInOut,
            now,
        );
    }

    /// Retargets the progress bar to the fraction of lifetime elapsed.
    ///
    /// The bar moves linearly to the new target over `step`, so successive
    /// ticks approximate a continuous countdown.
    pub fn update_progress(
        &mut self,
        elapsed: Duration,
        duration: Duration,
        step: Duration,
        now: Instant,
    ) {
        let fraction = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        self.progress
            .retarget(fraction * self.track_width, step, Easing::Linear, now);
    }

    /// Applies a new viewport; takes effect from the next progress update.
    pub fn resize(&mut self, viewport: Viewport) {
        self.track_width = viewport.track_width();
    }

    #[must_use]
    pub fn token(&self) -> ToastId {
        self.token
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        if self.exiting {
            Phase::Exiting
        } else if self.offset.is_settled(now) {
            Phase::Resting
        } else {
            Phase::Entering
        }
    }

    /// Vertical displacement from the resting position at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        self.offset.value_at(now)
    }

    /// Progress bar width at `now`.
    #[must_use]
    pub fn progress_width(&self, now: Instant) -> f32 {
        self.progress.value_at(now)
    }

    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    /// Whether the exit has run to completion at `now`.
    #[must_use]
    pub fn has_left(&self, now: Instant) -> bool {
        self.exiting && self.offset.is_settled(now)
    }

    /// Whether any animated value is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.offset.is_settled(now) || !self.progress.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const EPS: f32 = 1e-3;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 600.0)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn bottom_entrance_starts_below_and_rests_at_zero() {
        let t0 = Instant::now();
        let animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Bottom, viewport(), ms(3000), t0);

        assert_abs_diff_eq!(animator.offset(t0), 600.0 * OFFSCREEN_FACTOR, epsilon = EPS);
        assert_eq!(animator.phase(t0), Phase::Entering);
        assert_abs_diff_eq!(animator.offset(t0 + ms(500)), 0.0, epsilon = EPS);
        assert_eq!(animator.phase(t0 + ms(500)), Phase::Resting);
    }

    #[test]
    fn top_entrance_starts_above() {
        let t0 = Instant::now();
        let animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Top, viewport(), ms(3000), t0);

        assert!(animator.offset(t0) < 0.0);
        assert_abs_diff_eq!(animator.offset(t0 + ms(600)), 0.0, epsilon = EPS);
    }

    #[test]
    fn exit_moves_away_from_edge() {
        let t0 = Instant::now();
        let mut top = LifecycleAnimator::enter(ToastId::new(1), Edge::Top, viewport(), ms(3000), t0);
        let mut bottom =
            LifecycleAnimator::enter(ToastId::new(2), Edge::Bottom, viewport(), ms(3000), t0);

        let leave = t0 + ms(1000);
        top.exit(leave);
        bottom.exit(leave);

        assert_eq!(top.phase(leave), Phase::Exiting);
        assert_abs_diff_eq!(top.offset(leave + ms(500)), -EXIT_DISPLACEMENT, epsilon = EPS);
        assert_abs_diff_eq!(
            bottom.offset(leave + ms(500)),
            EXIT_DISPLACEMENT,
            epsilon = EPS
        );
    }

    #[test]
    fn repeated_exit_does_not_restart_animation() {
        let t0 = Instant::now();
        let mut animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Bottom, viewport(), ms(3000), t0);

        animator.exit(t0 + ms(1000));
        animator.exit(t0 + ms(1400));

        assert_abs_diff_eq!(
            animator.offset(t0 + ms(1500)),
            EXIT_DISPLACEMENT,
            epsilon = EPS
        );
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let t0 = Instant::now();
        let mut animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Bottom, viewport(), ms(2000), t0);
        let track = viewport().track_width();

        let tick = t0 + ms(1000);
        animator.update_progress(ms(1000), ms(2000), ms(100), tick);

        assert_abs_diff_eq!(animator.progress.target(), track / 2.0, epsilon = EPS);
        assert_abs_diff_eq!(
            animator.progress_width(tick + ms(100)),
            track / 2.0,
            epsilon = EPS
        );
    }

    #[test]
    fn progress_is_clamped_to_track() {
        let t0 = Instant::now();
        let mut animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Bottom, viewport(), ms(1000), t0);

        animator.update_progress(ms(5000), ms(1000), ms(100), t0);

        assert_abs_diff_eq!(
            animator.progress.target(),
            viewport().track_width(),
            epsilon = EPS
        );
    }

    #[test]
    fn settles_after_entrance_and_full_duration() {
        let t0 = Instant::now();
        let animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Bottom, viewport(), ms(1000), t0);

        assert!(animator.is_animating(t0 + ms(999)));
        assert!(!animator.is_animating(t0 + ms(1000)));
    }

    #[test]
    fn has_left_once_exit_settles() {
        let t0 = Instant::now();
        let mut animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Top, viewport(), ms(3000), t0);
        assert!(!animator.has_left(t0 + ms(1000)));

        animator.exit(t0 + ms(1000));

        assert!(!animator.has_left(t0 + ms(1499)));
        assert!(animator.has_left(t0 + ms(1500)));
    }

    #[test]
    fn resize_changes_track_width() {
        let t0 = Instant::now();
        let mut animator =
            LifecycleAnimator::enter(ToastId::new(1), Edge::Bottom, viewport(), ms(1000), t0);
        animator.resize(Viewport::new(500.0, 400.0));
        assert_abs_diff_eq!(animator.track_width(), 500.0 * TRACK_WIDTH_RATIO, epsilon = EPS);
    }
}
