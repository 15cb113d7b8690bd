// SPDX-License-Identifier: MPL-2.0
//! Dismiss timer and progress tick for the displayed toast.
//!
//! Each displayed toast gets exactly one one-shot timer, tagged with its
//! [`ToastId`]. The timer ends either `Expired` (its deadline passed and the
//! matching token fired) or `Cancelled` (replace, close or teardown). Once
//! the handle is gone, any wake-up still carrying its token is stale and
//! ignored.

use super::request::ToastId;
use crate::config::defaults::ENTRANCE_MS;
use std::time::{Duration, Instant};

const ENTRANCE: Duration = Duration::from_millis(ENTRANCE_MS);

/// Terminal and non-terminal states of a dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Armed,
    Expired,
    Cancelled,
}

/// Why a timer was cancelled before its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Replaced,
    Closed,
    Teardown,
}

/// A freshly armed timer, published so a runtime can schedule a wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedTimer {
    pub token: ToastId,
    pub after: Duration,
    pub deadline: Instant,
}

/// Outcome of delivering a wake-up to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fire {
    /// The token matched and the deadline has passed.
    Expired(ToastId),
    /// No timer, or a timer for a different toast.
    Stale,
    /// The token matched but the deadline is still ahead.
    Early,
}

/// Elapsed-time snapshot produced by a progress tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSample {
    pub token: ToastId,
    pub elapsed: Duration,
    pub remaining: Duration,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy)]
struct DismissTimer {
    token: ToastId,
    armed_at: Instant,
    deadline: Instant,
    duration: Duration,
}

/// Owns the dismiss timer and the progress ticker.
#[derive(Debug)]
pub struct DismissScheduler {
    timer: Option<DismissTimer>,
    ticking: bool,
    tick_period: Duration,
    exit_lead: Duration,
    last_transition: Option<(ToastId, TimerState)>,
}

impl DismissScheduler {
    #[must_use]
    pub fn new(tick_period: Duration, exit_lead: Duration) -> Self {
        Self {
            timer: None,
            ticking: false,
            tick_period,
            exit_lead,
            last_transition: None,
        }
    }

    /// Arms the one-shot timer for `token` and starts the progress ticker.
    ///
    /// A timer still armed for another toast is cancelled first, so at most
    /// one timer exists at any time.
    pub fn arm(&mut self, token: ToastId, duration: Duration, now: Instant) -> ArmedTimer {
        if let Some(previous) = self.timer {
            tracing::warn!(previous = %previous.token, next = %token, "arming over a live timer");
            self.cancel(CancelReason::Replaced);
        }

        let deadline = now + duration;
        self.timer = Some(DismissTimer {
            token,
            armed_at: now,
            deadline,
            duration,
        });
        self.ticking = true;
        self.last_transition = Some((token, TimerState::Armed));
        tracing::debug!(id = %token, after_ms = duration.as_millis() as u64, "dismiss timer armed");

        ArmedTimer {
            token,
            after: duration,
            deadline,
        }
    }

    /// Drops the armed timer and stops the ticker. Returns the token of the
    /// cancelled timer, if there was one.
    pub fn cancel(&mut self, reason: CancelReason) -> Option<ToastId> {
        self.ticking = false;
        let timer = self.timer.take()?;
        self.last_transition = Some((timer.token, TimerState::Cancelled));
        tracing::debug!(id = %timer.token, ?reason, "dismiss timer cancelled");
        Some(timer.token)
    }

    /// Delivers a wake-up tagged with `token`.
    pub fn fire(&mut self, token: ToastId, now: Instant) -> Fire {
        let Some(timer) = self.timer.filter(|timer| timer.token == token) else {
            tracing::trace!(id = %token, "stale dismiss wake-up ignored");
            return Fire::Stale;
        };
        if now < timer.deadline {
            return Fire::Early;
        }

        self.timer = None;
        self.ticking = false;
        self.last_transition = Some((token, TimerState::Expired));
        tracing::debug!(id = %token, "dismiss timer expired");
        Fire::Expired(token)
    }

    /// Token of the armed timer if its deadline has passed at `now`.
    #[must_use]
    pub fn due(&self, now: Instant) -> Option<ToastId> {
        self.timer
            .filter(|timer| now >= timer.deadline)
            .map(|timer| timer.token)
    }

    /// Samples elapsed time for the progress indicator.
    ///
    /// The ticker stops itself once remaining time reaches zero; the final
    /// sample is still returned.
    pub fn tick(&mut self, now: Instant) -> Option<TickSample> {
        if !self.ticking {
            return None;
        }
        let timer = self.timer?;

        let remaining = timer.deadline.saturating_duration_since(now);
        if remaining.is_zero() {
            self.ticking = false;
        }

        Some(TickSample {
            token: timer.token,
            elapsed: now.saturating_duration_since(timer.armed_at),
            remaining,
            duration: timer.duration,
        })
    }

    /// Whether the exit animation should start: the timer is within
    /// `exit_lead` of its deadline.
    ///
    /// The lead never reaches back into the entrance, so a short toast
    /// finishes arriving before it starts to leave.
    #[must_use]
    pub fn exit_due(&self, now: Instant) -> bool {
        self.timer.is_some_and(|timer| {
            let lead = self
                .exit_lead
                .min(timer.duration.saturating_sub(ENTRANCE));
            timer.deadline.saturating_duration_since(now) <= lead
        })
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|timer| timer.deadline.saturating_duration_since(now))
    }

    #[must_use]
    pub fn armed_token(&self) -> Option<ToastId> {
        self.timer.map(|timer| timer.token)
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Most recent state change, for inspection.
    #[must_use]
    pub fn last_transition(&self) -> Option<(ToastId, TimerState)> {
        self.last_transition
    }
}
