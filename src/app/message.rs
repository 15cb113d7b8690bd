// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{Edge, Severity, ToastId};
use crate::ui::toast;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Append a toast of the given severity.
    Show(Severity),
    /// Replace everything with an urgent error toast.
    ReplaceWithError,
    /// Close the displayed toast from the controls.
    Close,
    /// Mount or unmount the provider.
    ToggleProvider,
    Toast(toast::Message),
    /// Periodic progress tick while a toast is displayed.
    Tick(Instant),
    /// Redraw request while an animation is running.
    Frame(Instant),
    /// A one-shot dismiss timer woke up.
    Expired(ToastId),
    Resized(iced::Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Explicit config file, bypassing the default location.
    pub config_path: Option<PathBuf>,
    /// Provider-wide display duration override.
    pub duration_ms: Option<u64>,
    /// Provider-wide edge override.
    pub edge: Option<Edge>,
}

impl Flags {
    /// Reads `--config <path>`, `--duration <ms>` and `--edge <top|bottom>`.
    pub fn from_args(args: &mut pico_args::Arguments) -> Result<Self, pico_args::Error> {
        Ok(Self {
            config_path: args.opt_value_from_str("--config")?,
            duration_ms: args.opt_value_from_str("--duration")?,
            edge: args.opt_value_from_str("--edge")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(values: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(values.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_all_flags() {
        let mut args = args(&["--config", "demo.toml", "--duration", "4500", "--edge", "top"]);

        let flags = Flags::from_args(&mut args).expect("valid flags");

        assert_eq!(flags.config_path, Some(PathBuf::from("demo.toml")));
        assert_eq!(flags.duration_ms, Some(4500));
        assert_eq!(flags.edge, Some(Edge::Top));
    }

    #[test]
    fn missing_flags_are_none() {
        let flags = Flags::from_args(&mut args(&[])).expect("valid flags");
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn bad_edge_is_rejected() {
        assert!(Flags::from_args(&mut args(&["--edge", "left"])).is_err());
    }
}
