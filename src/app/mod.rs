// SPDX-License-Identifier: MPL-2.0
//! Demo application: a window with buttons that drive one toast provider.
//!
//! The `App` owns a [`ToastScope`] and translates messages into provider
//! calls. Every call that may promote a toast is followed by
//! [`App::schedule_expiry`], which turns the freshly armed timer into a
//! one-shot `Task` delivering [`Message::Expired`].

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::config::defaults::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::toast::{
    Affordance, Behavior, Content, Severity, TextSegment, ToastOptions, ToastParams,
    ToastProvider, ToastScope, ToastStyle, Viewport,
};
use crate::ui::toast;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    scope: ToastScope,
    config: Config,
    viewport: Viewport,
    /// Number of toasts requested so far, used to label demo toasts.
    requested: u64,
    /// Last usage error, shown under the controls.
    last_error: Option<String>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mounted", &self.scope.is_mounted())
            .field("requested", &self.requested)
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the config named by `flags`, or the default one, then applies the
/// command-line overrides.
fn load_config(flags: &Flags) -> (Config, Option<String>) {
    let (mut config, warning) = match &flags.config_path {
        Some(path) => match config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                (Config::default(), Some(err.to_string()))
            }
        },
        None => config::load(),
    };

    if let Some(duration_ms) = flags.duration_ms {
        config.duration_ms = Some(duration_ms);
    }
    if let Some(edge) = flags.edge {
        config.style = ToastStyle {
            position: Some(edge),
            ..config.style
        };
    }
    (config, warning)
}

/// Options of the demo toast for `severity`.
fn demo_options(severity: Severity, number: u64) -> ToastOptions {
    let (title, leading) = match severity {
        Severity::Success => ("Saved", "✔"),
        Severity::Info => ("Heads up", "ℹ"),
        Severity::Error => ("Something failed", "✖"),
        Severity::Warning => ("Careful", "⚠"),
        Severity::Default => ("Hello", "•"),
    };

    ToastOptions::default()
        .message(
            Content::text(title).secondary(TextSegment::new(format!("Toast number {number}"))),
        )
        .leading(Affordance::new(leading))
        .closable(Affordance::new("✕"))
        .progress_color(progress_color_for(severity))
}

fn progress_color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "#43b367",
        Severity::Info => "#6496ff",
        Severity::Error => "#e53935",
        Severity::Warning => "#f1a620",
        Severity::Default => "blue",
    }
}

impl App {
    /// Initializes application state from the command-line flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = load_config(&flags);
        (Self::with_config(config, warning), Task::none())
    }

    /// Builds the app around an already loaded config, with the provider
    /// mounted.
    fn with_config(config: Config, config_warning: Option<String>) -> Self {
        let viewport = Viewport::default();
        Self {
            scope: ToastScope::mounted(config.provider_config(viewport)),
            config,
            viewport,
            requested: 0,
            last_error: None,
            config_warning,
        }
    }

    fn title(&self) -> String {
        match self.scope.provider().and_then(ToastProvider::current) {
            Some(current) => format!("Iced Toast - {}", current.title().unwrap_or("toast")),
            None => "Iced Toast".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let provider = self.scope.provider();
        let tick_sub = subscription::create_tick_subscription(
            provider.is_some_and(ToastProvider::needs_tick),
            self.config.tick_period(),
        );
        let frame_sub = subscription::create_frame_subscription(
            provider.is_some_and(|provider| provider.is_animating(now)),
        );
        let event_sub = subscription::create_event_subscription();

        Subscription::batch([event_sub, tick_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Show(severity) => {
                let params = ToastParams::new(severity, demo_options(severity, self.requested + 1));
                self.request(params, Behavior::Append, now)
            }
            Message::ReplaceWithError => {
                let params = ToastParams::error(
                    demo_options(Severity::Error, self.requested + 1)
                        .message(Content::text("Urgent").secondary(TextSegment::new(
                            "Replaced everything that was queued",
                        ))),
                );
                self.request(params, Behavior::ReplaceNow, now)
            }
            Message::Close | Message::Toast(toast::Message::Close) => {
                match self.scope.use_toast() {
                    Ok(provider) => {
                        provider.close(now);
                    }
                    Err(err) => self.last_error = Some(err.to_string()),
                }
                self.schedule_expiry()
            }
            Message::ToggleProvider => {
                if !self.scope.unmount() {
                    self.scope
                        .mount(self.config.provider_config(self.viewport));
                    self.last_error = None;
                }
                Task::none()
            }
            Message::Tick(instant) => {
                if let Some(provider) = self.scope.provider_mut() {
                    provider.tick(instant);
                }
                self.schedule_expiry()
            }
            // Nothing to do: the redraw after update samples fresh values.
            Message::Frame(_) => Task::none(),
            Message::Expired(token) => {
                if let Some(provider) = self.scope.provider_mut() {
                    provider.expire(token, now);
                }
                self.schedule_expiry()
            }
            Message::Resized(size) => {
                self.viewport = Viewport::new(size.width, size.height);
                if let Some(provider) = self.scope.provider_mut() {
                    provider.resize(self.viewport);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            provider: self.scope.provider(),
            last_error: self.last_error.as_deref(),
            config_warning: self.config_warning.as_deref(),
            now: Instant::now(),
        })
    }

    fn request(&mut self, params: ToastParams, behavior: Behavior, now: Instant) -> Task<Message> {
        match self.scope.show_toast(params, behavior, now) {
            Ok(_) => {
                self.requested += 1;
                self.schedule_expiry()
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Task::none()
            }
        }
    }

    /// Turns the most recently armed dismiss timer into a one-shot task.
    fn schedule_expiry(&mut self) -> Task<Message> {
        let Some(armed) = self
            .scope
            .provider_mut()
            .and_then(ToastProvider::take_armed)
        else {
            return Task::none();
        };

        Task::perform(
            async move {
                tokio::time::sleep(armed.after).await;
                armed.token
            },
            Message::Expired,
        )
    }
}
