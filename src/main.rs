mod runtime;
mod view;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use companion::cli::CliArgs;

fn main() -> Result<()> {
    companion::tracing::init();

    let args = CliArgs::parse();

    let event_loop = EventLoop::new()?;
    let mut app = runtime::App::new(args.width, args.height);

    event_loop.run_app(&mut app)?;

    Ok(())
}
