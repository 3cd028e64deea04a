//! Raw terminal events to browser actions

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEventKind};

use crate::config::KeyBindings;

/// What the user asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Click at a cell; resolved to an entry by hit-testing
    Activate { x: i32, y: i32 },
    /// Go to the parent directory
    NavigateUp,
    Quit,
}

/// Classifies events one at a time. Nothing is remembered between events,
/// so every press is judged on its own.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    keys: KeyBindings,
}

impl InputRouter {
    pub fn new(keys: KeyBindings) -> Self {
        Self { keys }
    }

    pub fn route(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.is_quit(key) {
                    Some(Action::Quit)
                } else if self.keys.matches("parent", key) {
                    Some(Action::NavigateUp)
                } else {
                    None
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(Action::Activate {
                    x: i32::from(mouse.column),
                    y: i32::from(mouse.row),
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Terminals have no close button; the quit keys stand in for it
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        self.keys.matches("quit", key) || self.keys.matches("quit_alt", key)
    }
}
