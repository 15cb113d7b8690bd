// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

fn main() -> iced::Result {
    iced_toast::logging::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = match Flags::from_args(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("usage: iced_toast [--config <path>] [--duration <ms>] [--edge <top|bottom>]");
            std::process::exit(2);
        }
    };
    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unknown argument");
    }

    app::run(flags)
}
