// SPDX-License-Identifier: MPL-2.0
//! Pending toasts plus the single displayed slot.
//!
//! The queue only stores; deciding when to promote and what to arm belongs to
//! the provider, which calls [`ToastQueue::promote_head`] after every change
//! to the displayed slot.

use super::request::{Request, ToastId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How a new toast is enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behavior {
    /// Wait behind the displayed toast and every pending one.
    #[default]
    Append,
    /// Discard the displayed toast and every pending one, show this now.
    ReplaceNow,
}

impl std::str::FromStr for Behavior {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "append" | "row" => Ok(Behavior::Append),
            "replace" | "replace_now" => Ok(Behavior::ReplaceNow),
            other => Err(format!("unknown behavior '{other}'")),
        }
    }
}

/// What to do when a bounded queue is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Evict the longest-waiting pending toast to make room.
    #[default]
    DropOldest,
    /// Refuse the incoming toast.
    DropNewest,
}

/// Result of pushing onto the pending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted { position: usize },
    Evicted { position: usize, evicted: ToastId },
    Rejected,
}

/// Pending requests in arrival order and the currently displayed one.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Request>,
    current: Option<Request>,
    next_id: u64,
    max_pending: Option<usize>,
    overflow: OverflowPolicy,
}

impl ToastQueue {
    #[must_use]
    pub fn new(max_pending: Option<usize>, overflow: OverflowPolicy) -> Self {
        Self {
            max_pending,
            overflow,
            ..Self::default()
        }
    }

    /// Allocates the next identity token for this queue.
    pub fn next_id(&mut self) -> ToastId {
        self.next_id += 1;
        ToastId::new(self.next_id)
    }

    /// Appends `request` at the tail, honoring the pending bound.
    ///
    /// The bound only applies while a toast is displayed; an idle queue
    /// always accepts, since the request is promoted straight away.
    pub fn push_back(&mut self, request: Request) -> Admission {
        let full = match self.max_pending {
            Some(max) => self.current.is_some() && self.pending.len() >= max,
            None => false,
        };

        if !full {
            self.pending.push_back(request);
            return Admission::Accepted {
                position: self.pending.len() - 1,
            };
        }

        match self.overflow {
            OverflowPolicy::DropNewest => Admission::Rejected,
            OverflowPolicy::DropOldest => match self.pending.pop_front() {
                Some(evicted) => {
                    self.pending.push_back(request);
                    Admission::Evicted {
                        position: self.pending.len() - 1,
                        evicted: evicted.id(),
                    }
                }
                // Bound of zero: nothing can wait.
                None => Admission::Rejected,
            },
        }
    }

    /// Empties both the displayed slot and the pending list, then makes
    /// `request` the sole pending entry.
    ///
    /// Returns how many toasts were discarded.
    pub fn replace_all(&mut self, request: Request) -> usize {
        let discarded = self.pending.len() + usize::from(self.current.is_some());
        self.current = None;
        self.pending.clear();
        self.pending.push_back(request);
        discarded
    }

    /// Moves the head of the pending list into the displayed slot.
    ///
    /// A no-op returning `None` when a toast is already displayed or nothing
    /// is pending.
    pub fn promote_head(&mut self) -> Option<&Request> {
        if self.current.is_some() {
            return None;
        }
        let next = self.pending.pop_front()?;
        self.current = Some(next);
        self.current.as_ref()
    }

    /// Empties the displayed slot.
    pub fn clear_current(&mut self) -> Option<Request> {
        self.current.take()
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.current = None;
        self.pending.clear();
    }

    #[must_use]
    pub fn current(&self) -> Option<&Request> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Request> {
        self.pending.iter()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Nothing displayed and nothing waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }
}
