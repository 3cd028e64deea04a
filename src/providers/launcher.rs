//! Starting programs picked in the grid

use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::errors::{BrowseError, BrowseResult};

/// Starts a program without waiting for it
pub trait Launcher {
    fn launch(&mut self, program: &Path) -> BrowseResult<()>;
}

/// Launcher backed by `std::process`
///
/// The child's stdio is detached so it cannot scribble over the grid.
/// Children are never waited on; finished ones are reaped on the next
/// launch so they do not linger as zombies.
#[derive(Debug, Default)]
pub struct ProcessLauncher {
    children: Vec<Child>,
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every child that has exited
    fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("pid {} exited: {}", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                log::debug!("pid {}: {}", child.id(), e);
                false
            }
        });
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, program: &Path) -> BrowseResult<()> {
        self.reap();
        let child = Command::new(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BrowseError::launch(program, e))?;
        log::info!("launched {} (pid {})", program.display(), child.id());
        self.children.push(child);
        Ok(())
    }
}
