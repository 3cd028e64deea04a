//! Terminal setup and per-frame drawing

use std::io::{self, stdout, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::state::{App, Mode};
use super::{BufferCanvas, ErrorDialog};

/// The terminal the browser draws into
pub struct RenderContext {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl RenderContext {
    /// Switch the terminal to raw mode on the alternate screen, with mouse
    /// reporting on
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let setup = (|| -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        })();
        let terminal = undo_on_error(setup, || {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        Ok(Self { terminal })
    }

    /// Draw one frame. The window size is read from the terminal every
    /// time, so resizes are picked up here.
    pub fn draw(&mut self, app: &mut App) -> io::Result<()> {
        self.terminal.draw(|frame| draw_frame(frame, app))?;
        Ok(())
    }

    /// Put the terminal back the way it was
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

/// Run `undo` when a half-finished setup step failed
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Chrome, then the grid, then the error dialog on top if one is open
pub fn draw_frame(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    {
        let mut canvas = BufferCanvas::new(frame.buffer_mut(), &app.theme);
        app.view.refresh(&mut canvas, area.into());
        app.view.paint(&mut canvas);
    }
    if let Mode::Error { message } = &app.mode {
        frame.render_widget(ErrorDialog::new(message, &app.theme), area);
    }
}
