// SPDX-License-Identifier: MPL-2.0
//! The toast provider: one queue, one timer, one animator.
//!
//! Every operation takes the current `Instant` explicitly and runs to
//! completion before returning, so a single-threaded event loop can drive the
//! provider from user actions, timer wake-ups and ticks in any interleaving.
//! Each change to the displayed slot is followed inline by exactly one
//! promotion attempt.

use super::animator::{LifecycleAnimator, Phase, Viewport};
use super::queue::{Admission, Behavior, OverflowPolicy, ToastQueue};
use super::request::{ProviderDefaults, Request, ToastId, ToastParams};
use super::scheduler::{ArmedTimer, CancelReason, DismissScheduler, Fire};
use super::style::ToastStyle;
use crate::config::defaults::{DEFAULT_EXIT_LEAD_MS, DEFAULT_TICK_MS};
use std::time::{Duration, Instant};

/// Runtime settings of one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub defaults: ProviderDefaults,
    pub max_pending: Option<usize>,
    pub overflow: OverflowPolicy,
    pub tick_period: Duration,
    pub exit_lead: Duration,
    pub viewport: Viewport,
}

impl ProviderConfig {
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.defaults.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ToastStyle) -> Self {
        self.defaults.style = style;
        self
    }

    #[must_use]
    pub fn with_max_pending(mut self, max_pending: usize, overflow: OverflowPolicy) -> Self {
        self.max_pending = Some(max_pending);
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            defaults: ProviderDefaults::default(),
            max_pending: None,
            overflow: OverflowPolicy::default(),
            tick_period: Duration::from_millis(DEFAULT_TICK_MS),
            exit_lead: Duration::from_millis(DEFAULT_EXIT_LEAD_MS),
            viewport: Viewport::default(),
        }
    }
}

/// What happened to a toast handed to [`ToastProvider::show_toast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueued {
    /// Displayed immediately.
    Shown(ToastId),
    /// Waiting; `position` counts from the head of the pending list.
    Queued { id: ToastId, position: usize },
    /// Refused by a full bounded queue.
    Dropped(ToastId),
}

impl Enqueued {
    #[must_use]
    pub fn id(self) -> ToastId {
        match self {
            Enqueued::Shown(id) | Enqueued::Queued { id, .. } | Enqueued::Dropped(id) => id,
        }
    }
}

/// Everything rendering needs for the displayed toast at one instant.
#[derive(Debug, Clone, Copy)]
pub struct ToastFrame<'a> {
    pub request: &'a Request,
    pub offset: f32,
    pub progress_width: f32,
    pub track_width: f32,
    pub phase: Phase,
    pub viewport: Viewport,
}

/// Owns the queue state of one provider scope.
#[derive(Debug)]
pub struct ToastProvider {
    queue: ToastQueue,
    scheduler: DismissScheduler,
    animator: Option<LifecycleAnimator>,
    /// The toast that just left the displayed slot, kept for its exit.
    leaving: Option<(Request, LifecycleAnimator)>,
    defaults: ProviderDefaults,
    viewport: Viewport,
    armed: Option<ArmedTimer>,
}

impl ToastProvider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            queue: ToastQueue::new(config.max_pending, config.overflow),
            scheduler: DismissScheduler::new(config.tick_period, config.exit_lead),
            animator: None,
            leaving: None,
            defaults: config.defaults,
            viewport: config.viewport,
            armed: None,
        }
    }

    /// Resolves `params` and enqueues the toast with `behavior`.
    pub fn show_toast(&mut self, params: ToastParams, behavior: Behavior, now: Instant) -> Enqueued {
        let id = self.queue.next_id();
        let request = Request::resolve(id, params, &self.defaults);
        tracing::debug!(id = %id, ?behavior, severity = ?request.severity(), "toast requested");

        match behavior {
            Behavior::Append => {
                let admission = self.queue.push_back(request);
                if self.promote(now) == Some(id) {
                    return Enqueued::Shown(id);
                }
                match admission {
                    Admission::Accepted { position } => Enqueued::Queued { id, position },
                    Admission::Evicted { position, evicted } => {
                        tracing::warn!(id = %id, evicted = %evicted, "pending queue full, dropped oldest toast");
                        Enqueued::Queued { id, position }
                    }
                    Admission::Rejected => {
                        tracing::warn!(id = %id, "pending queue full, dropped incoming toast");
                        Enqueued::Dropped(id)
                    }
                }
            }
            Behavior::ReplaceNow => {
                // The old handle must be gone before the new timer is armed.
                self.scheduler.cancel(CancelReason::Replaced);
                self.armed = None;
                self.animator = None;
                self.leaving = None;
                let discarded = self.queue.replace_all(request);
                if discarded > 0 {
                    tracing::debug!(id = %id, discarded, "replace discarded toasts");
                }
                self.promote(now);
                Enqueued::Shown(id)
            }
        }
    }

    /// Moves the head of the pending list into the displayed slot, arms its
    /// timer and starts its entrance.
    ///
    /// A no-op when a toast is already displayed or nothing is pending, so it
    /// is safe to call from any trigger.
    pub fn promote(&mut self, now: Instant) -> Option<ToastId> {
        let request = self.queue.promote_head()?;
        let id = request.id();
        let duration = request.duration();
        let edge = request.style().edge;
        tracing::debug!(id = %id, title = request.title().unwrap_or_default(), "toast promoted");

        self.leaving = None;
        self.armed = Some(self.scheduler.arm(id, duration, now));
        self.animator = Some(LifecycleAnimator::enter(
            id,
            edge,
            self.viewport,
            duration,
            now,
        ));
        Some(id)
    }

    /// Closes the displayed toast before its timer expires.
    ///
    /// Returns `false` when nothing is displayed.
    pub fn close(&mut self, now: Instant) -> bool {
        if self.queue.current().is_none() {
            tracing::debug!("close requested with no toast displayed");
            return false;
        }
        self.scheduler.cancel(CancelReason::Closed);
        self.armed = None;
        self.retire(now);
        true
    }

    /// Empties the displayed slot and promotes the next toast.
    ///
    /// The retired toast keeps sliding out until its exit settles or another
    /// toast is promoted, whichever comes first.
    fn retire(&mut self, now: Instant) {
        let request = self.queue.clear_current();
        let animator = self.animator.take();
        self.leaving = request.zip(animator).map(|(request, mut animator)| {
            animator.exit(now);
            (request, animator)
        });
        self.promote(now);
    }

    /// Delivers a one-shot timer wake-up tagged with `token`.
    ///
    /// Wake-ups for cancelled or already expired timers are ignored, as are
    /// wake-ups that arrive before the deadline.
    pub fn expire(&mut self, token: ToastId, now: Instant) -> bool {
        match self.scheduler.fire(token, now) {
            Fire::Expired(_) => {
                self.retire(now);
                true
            }
            Fire::Stale | Fire::Early => false,
        }
    }

    /// Periodic tick: refreshes the progress bar, starts the exit lead-in and
    /// expires the displayed toast once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(sample) = self.scheduler.tick(now) {
            tracing::trace!(id = %sample.token, elapsed_ms = sample.elapsed.as_millis() as u64, "progress tick");
            let step = self.scheduler.tick_period();
            if let Some(animator) = self
                .animator
                .as_mut()
                .filter(|animator| animator.token() == sample.token)
            {
                animator.update_progress(sample.elapsed, sample.duration, step, now);
            }
        }

        if self.scheduler.exit_due(now) {
            if let Some(animator) = self.animator.as_mut() {
                animator.exit(now);
            }
        }

        if let Some(token) = self.scheduler.due(now) {
            self.expire(token, now);
        }
    }

    /// Cancels everything; the provider is left idle.
    pub fn teardown(&mut self) {
        self.scheduler.cancel(CancelReason::Teardown);
        self.armed = None;
        self.animator = None;
        self.leaving = None;
        self.queue.clear();
    }

    /// Applies a new viewport to future entrances and the live progress bar.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(animator) = self.animator.as_mut() {
            animator.resize(viewport);
        }
    }

    /// The timer armed since the last call, for runtimes that schedule a
    /// real wake-up per timer.
    pub fn take_armed(&mut self) -> Option<ArmedTimer> {
        self.armed.take()
    }

    /// The displayed toast and its live animated values.
    ///
    /// With nothing displayed, a toast that was just closed or expired is
    /// reported in its exit phase until it has left the screen.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Option<ToastFrame<'_>> {
        let (request, animator) = match (self.queue.current(), self.animator.as_ref()) {
            (Some(request), Some(animator)) => (request, animator),
            _ => self.outgoing(now)?,
        };
        Some(ToastFrame {
            request,
            offset: animator.offset(now),
            progress_width: animator.progress_width(now),
            track_width: animator.track_width(),
            phase: animator.phase(now),
            viewport: self.viewport,
        })
    }

    fn outgoing(&self, now: Instant) -> Option<(&Request, &LifecycleAnimator)> {
        self.leaving
            .as_ref()
            .filter(|(_, animator)| !animator.has_left(now))
            .map(|(request, animator)| (request, animator))
    }

    #[must_use]
    pub fn current(&self) -> Option<&Request> {
        self.queue.current()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Request> {
        self.queue.pending()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.queue.pending_len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_idle()
    }

    /// Whether the periodic tick should be running.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.queue.current().is_some()
    }

    /// Whether any animated value is moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator
            .as_ref()
            .is_some_and(|animator| animator.is_animating(now))
            || self.outgoing(now).is_some()
    }

    #[must_use]
    pub fn scheduler(&self) -> &DismissScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}
