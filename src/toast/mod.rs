// SPDX-License-Identifier: MPL-2.0
//! Toast scheduling and lifecycle engine.
//!
//! At most one toast is visible per provider. Further requests wait in
//! arrival order, or replace everything at once. A displayed toast is armed
//! with a one-shot dismiss timer, animated in from its edge, counted down by a
//! progress bar and animated out before the next one is promoted.
//!
//! ```
//! use iced_toast::toast::{Behavior, ProviderConfig, ToastOptions, ToastParams, ToastProvider};
//! use std::time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut provider = ToastProvider::new(ProviderConfig::default());
//! let first = provider
//!     .show_toast(ToastParams::info(ToastOptions::text("A")), Behavior::Append, t0)
//!     .id();
//! provider.show_toast(ToastParams::info(ToastOptions::text("B")), Behavior::Append, t0);
//!
//! provider.expire(first, t0 + Duration::from_millis(3000));
//! assert_eq!(provider.current().and_then(|toast| toast.title()), Some("B"));
//! ```

pub mod animator;
pub mod provider;
pub mod queue;
pub mod request;
pub mod scheduler;
pub mod scope;
pub mod style;

pub use animator::{LifecycleAnimator, Phase, Viewport};
pub use provider::{Enqueued, ProviderConfig, ToastFrame, ToastProvider};
pub use queue::{Admission, Behavior, OverflowPolicy, ToastQueue};
pub use request::{
    Affordance, Content, ProviderDefaults, Request, Severity, TextSegment, ToastId,
    ToastOptions, ToastParams,
};
pub use scheduler::{ArmedTimer, CancelReason, DismissScheduler, Fire, TimerState};
pub use scope::ToastScope;
pub use style::{
    resolve_style, Dimension, Edge, ResolvedStyle, ResolvedTextStyle, TextStyle, ToastStyle,
};
