//! In-memory directory tree for tests

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::errors::{BrowseError, BrowseResult};
use crate::fs::DirEntryInfo;
use super::DirectoryProvider;

#[derive(Debug, Default)]
pub struct MemoryProvider {
    dirs: HashMap<PathBuf, Vec<DirEntryInfo>>,
    unreadable: HashSet<PathBuf>,
    cwd: PathBuf,
}

impl MemoryProvider {
    /// A tree containing only "/", with "/" as the current directory
    pub fn new() -> Self {
        let mut provider = Self { cwd: PathBuf::from("/"), ..Self::default() };
        provider.dirs.insert(PathBuf::from("/"), Vec::new());
        provider
    }

    /// Add a directory (and its missing ancestors) to the tree
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), true);
        self
    }

    /// Add a file to the tree
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), false);
        self
    }

    /// Listing this directory fails, entering it still works
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    pub fn at(mut self, path: &str) -> Self {
        self.cwd = PathBuf::from(path);
        self
    }

    fn insert(&mut self, path: &Path, is_dir: bool) {
        if let Some(parent) = path.parent()
            && !self.dirs.contains_key(parent)
        {
            self.insert(parent, true);
        }
        if is_dir {
            self.dirs.entry(path.to_path_buf()).or_default();
        }
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        let siblings = self.dirs.entry(parent.to_path_buf()).or_default();
        if !siblings.iter().any(|e| e.os_name.as_os_str() == name) {
            siblings.push(DirEntryInfo::new(name, is_dir));
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let mut resolved = if path.is_absolute() { PathBuf::new() } else { self.cwd.clone() };
        for component in path.components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                other => resolved.push(other),
            }
        }
        resolved
    }
}

impl DirectoryProvider for MemoryProvider {
    fn list_entries(&mut self, path: &Path) -> BrowseResult<Vec<DirEntryInfo>> {
        let path = self.resolve(path);
        if self.unreadable.contains(&path) {
            return Err(BrowseError::list(path, io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")));
        }
        self.dirs
            .get(&path)
            .cloned()
            .ok_or_else(|| BrowseError::list(path, io::Error::new(io::ErrorKind::NotFound, "not found")))
    }

    fn change_directory(&mut self, path: &Path) -> BrowseResult<()> {
        let target = self.resolve(path);
        if !self.dirs.contains_key(&target) {
            return Err(BrowseError::path(path, io::Error::new(io::ErrorKind::NotFound, "not found")));
        }
        self.cwd = target;
        Ok(())
    }

    fn current_path(&self) -> BrowseResult<PathBuf> {
        Ok(self.cwd.clone())
    }
}
