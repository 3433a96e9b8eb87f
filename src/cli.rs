//! Command-line argument parsing for the widget

use clap::Parser;

/// A floating desktop assistant widget
#[derive(Parser, Debug)]
#[command(name = "companion", version, about = "A floating desktop assistant widget")]
pub struct CliArgs {
    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub height: u32,
}
