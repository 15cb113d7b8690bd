// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between redraws while an animation is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the progress tick subscription, active while a toast is displayed.
pub fn create_tick_subscription(needs_tick: bool, period: Duration) -> Subscription<Message> {
    if needs_tick {
        time::every(period).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the frame subscription, active while entrance, exit or progress
/// animations are moving.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Routes window resizes so the viewport tracks the real window size.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::Resized(size));
        }
        None
    })
}
