//! Local filesystem provider

use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{BrowseError, BrowseResult};
use crate::fs::DirEntryInfo;
use super::DirectoryProvider;

/// Provider backed by the process working directory
#[derive(Debug, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryProvider for LocalProvider {
    fn list_entries(&mut self, path: &Path) -> BrowseResult<Vec<DirEntryInfo>> {
        crate::fs::read_directory(path).map_err(|e| BrowseError::list(path, e))
    }

    fn change_directory(&mut self, path: &Path) -> BrowseResult<()> {
        env::set_current_dir(path).map_err(|e| BrowseError::path(path, e))
    }

    fn current_path(&self) -> BrowseResult<PathBuf> {
        env::current_dir().map_err(|e| BrowseError::path(".", e))
    }
}
