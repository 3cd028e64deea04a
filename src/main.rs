//! gridfb - a grid file browser for the terminal
//!
//! Shows the working directory as a grid of icons. Click a folder to enter
//! it, click a file to run it, Backspace goes up.

use std::io::{self, stdout};
use std::panic;
use std::process::ExitCode;

use crossterm::{
    event::{self, DisableMouseCapture},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

mod config;
mod errors;
mod fs;
mod input;
mod layout;
mod logging;
mod providers;
mod state;
mod ui;

use config::Config;
use errors::AppResult;
use providers::{LocalProvider, ProcessLauncher};
use state::App;
use ui::RenderContext;

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Main event loop: draw, then wait up to one frame for input
fn run(render: &mut RenderContext, app: &mut App) -> io::Result<()> {
    let frame_delay = app.config.general.frame_delay();
    while !app.should_quit {
        render.draw(app)?;
        if event::poll(frame_delay)? {
            let event = event::read()?;
            input::handle_event(app, &event);
        }
    }
    Ok(())
}

fn start() -> AppResult<()> {
    let config = Config::load();
    let mut app = App::new(
        config,
        Box::new(LocalProvider::new()),
        Box::new(ProcessLauncher::new()),
    )?;

    let mut render = RenderContext::new()?;
    let result = run(&mut render, &mut app);
    render.restore()?;
    result?;

    log::info!("exiting");
    Ok(())
}

fn main() -> ExitCode {
    setup_panic_hook();
    logging::init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("fb: {}", e);
            ExitCode::FAILURE
        }
    }
}
