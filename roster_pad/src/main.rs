use clap::Parser;
use rp_core::{err, info};

use crate::config::{RosterConfig, ThemeLightness};
use crate::state::RosterPad;

mod config;
mod menu_renderer;
mod message_update;
mod state;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Override the configured theme for this session (not saved)
    #[arg(long, value_enum)]
    theme: Option<ThemeLightness>,

    /// Don't print log messages to the terminal
    #[arg(long)]
    quiet: bool,
}

fn main() -> iced::Result {
    let args = Args::parse();
    rp_core::print::set_print(!args.quiet);

    info!("Started RosterPad v{}", rp_core::VERSION_NAME);

    let mut config = match RosterConfig::load_s() {
        Ok(config) => config,
        Err(error) => {
            err!("Could not load config: {error}\nFalling back to defaults.");
            RosterConfig::default()
        }
    };
    if let Some(theme) = args.theme {
        config.theme = Some(theme);
    }

    let (width, height) = config.c_window_size();

    iced::application(RosterPad::title, RosterPad::update, RosterPad::view)
        .theme(RosterPad::theme)
        .window_size(iced::Size { width, height })
        .run_with(move || RosterPad::new(config))
}
