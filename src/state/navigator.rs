//! Carrying out actions on the view

use std::path::Path;

use crate::errors::BrowseResult;
use crate::input::Action;
use crate::providers::Launcher;
use super::view::DirectoryView;

/// Whether the main loop keeps going after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Navigator {
    launcher: Box<dyn Launcher>,
    run_executables: bool,
}

impl Navigator {
    pub fn new(launcher: Box<dyn Launcher>, run_executables: bool) -> Self {
        Self { launcher, run_executables }
    }

    /// Apply one action. Errors leave the view as it was.
    pub fn apply(&mut self, action: Action, view: &mut DirectoryView) -> BrowseResult<Flow> {
        match action {
            Action::Quit => return Ok(Flow::Quit),
            Action::NavigateUp => view.cd(Path::new(".."))?,
            Action::Activate { x, y } => {
                let Some(entry) = view.hit_test(x, y) else {
                    return Ok(Flow::Continue);
                };
                let (name, is_dir) = (entry.os_name.clone(), entry.is_dir);
                if is_dir {
                    view.cd(Path::new(&name))?;
                } else if self.run_executables {
                    let program = view.path().join(&name);
                    self.launcher.launch(&program)?;
                } else {
                    log::debug!("not launching {}: run_executables is off", name.to_string_lossy());
                }
            }
        }
        Ok(Flow::Continue)
    }
}
