// SPDX-License-Identifier: MPL-2.0
use app_forge::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        prompt: args.opt_value_from_str("--prompt").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
