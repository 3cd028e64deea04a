//! OS capabilities the browser consumes
//!
//! Providers abstract the filesystem side of browsing (listing and changing
//! the working directory); launchers abstract starting a program. The view
//! and navigator only talk to these traits, so tests can swap in memory
//! doubles.

mod launcher;
mod local;
#[cfg(test)]
pub mod memory;

pub use launcher::{Launcher, ProcessLauncher};
pub use local::LocalProvider;

use std::path::{Path, PathBuf};

use crate::errors::BrowseResult;
use crate::fs::DirEntryInfo;

/// Trait for directory providers
///
/// Paths passed to `change_directory` may be relative to the current
/// directory, including "..".
pub trait DirectoryProvider {
    /// List the entries of `path`
    fn list_entries(&mut self, path: &Path) -> BrowseResult<Vec<DirEntryInfo>>;

    /// Make `path` the current directory
    fn change_directory(&mut self, path: &Path) -> BrowseResult<()>;

    /// Absolute path of the current directory
    fn current_path(&self) -> BrowseResult<PathBuf>;
}
