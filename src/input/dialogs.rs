//! Error dialog handler

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};

use crate::state::app::App;

/// The dialog is modal: it closes on Enter, Esc, Space or a click, and
/// everything else is dropped. The quit keys still work.
pub fn handle_error_mode(app: &mut App, event: &Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if app.router.is_quit(key) {
                app.should_quit = true;
                return;
            }
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.dismiss_error(),
                _ => {}
            }
        }
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => app.dismiss_error(),
        _ => {}
    }
}
