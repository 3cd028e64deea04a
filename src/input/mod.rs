//! Input handling
//!
//! Events are dispatched on the current application mode: the grid gets
//! them through the router, an open dialog swallows them.

mod dialogs;
mod router;

pub use router::{Action, InputRouter};

use crossterm::event::Event;

use crate::state::{App, Mode};

/// Handle one terminal event based on current mode
pub fn handle_event(app: &mut App, event: &Event) {
    match &app.mode {
        Mode::Normal => {
            if let Some(action) = app.router.route(event) {
                app.dispatch(action);
            }
        }
        Mode::Error { .. } => dialogs::handle_error_mode(app, event),
    }
}
