//! File entry representation

use std::ffi::OsString;
use std::path::Path;

use crate::layout::{GridSlot, Rect};

/// One item as returned by a directory listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// File/directory name (not full path), for display
    pub name: String,
    /// The name as the OS returned it; used to open the entry
    pub os_name: OsString,
    /// Whether this is a directory (symlinks are resolved)
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn new(os_name: impl Into<OsString>, is_dir: bool) -> Self {
        let os_name = os_name.into();
        let name = os_name.to_string_lossy().into_owned();
        Self { name, os_name, is_dir }
    }

    #[cfg(test)]
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self::new(name, true)
    }

    #[cfg(test)]
    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, false)
    }
}

/// Which picture is drawn for an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Directory,
    TextFile,
    Generic,
}

/// An entry of the current listing, positioned on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Display name; may contain replacement characters
    pub name: String,
    pub os_name: OsString,
    pub is_dir: bool,
    /// Extension without the dot, if the name has one
    pub extension: Option<String>,
    pub icon_rect: Rect,
    pub label_rect: Rect,
}

impl Entry {
    pub fn place(&mut self, slot: GridSlot) {
        self.icon_rect = slot.icon;
        self.label_rect = slot.label;
    }

    pub fn slot(&self) -> GridSlot {
        GridSlot { icon: self.icon_rect, label: self.label_rect }
    }

    /// Directories get the folder icon; `*.txt` names (a bare ".txt" does
    /// not count) get the text icon; everything else is generic.
    pub fn icon_kind(&self) -> IconKind {
        if self.is_dir {
            IconKind::Directory
        } else if self.name.len() > 4 && self.name.ends_with(".txt") {
            IconKind::TextFile
        } else {
            IconKind::Generic
        }
    }
}

impl From<DirEntryInfo> for Entry {
    fn from(info: DirEntryInfo) -> Self {
        let extension = Path::new(&info.os_name)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        Self {
            name: info.name,
            os_name: info.os_name,
            is_dir: info.is_dir,
            extension,
            icon_rect: Rect::default(),
            label_rect: Rect::default(),
        }
    }
}
