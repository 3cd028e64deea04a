//! The directory shown in the grid
//!
//! `DirectoryView` owns the current path, its positioned entries and the
//! viewport they are packed into. A frame is `refresh` (chrome) followed by
//! `paint` (entries); navigation goes through `cd`.

use std::path::{Path, PathBuf};

use crate::errors::BrowseResult;
use crate::fs::{DirEntryInfo, Entry};
use crate::layout::{GridGeometry, Rect};
use crate::providers::DirectoryProvider;
use crate::ui::canvas::{fit_label, PanelKind};
use crate::ui::Canvas;

/// Sizes of the window chrome and the icon grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewGeometry {
    pub grid: GridGeometry,
    /// Rows taken by the address bar at the top of the window
    pub address_bar_height: i32,
    /// Blank columns left of the address bar and the viewport
    pub left_margin: i32,
}

impl ViewGeometry {
    /// Split the window into the address bar and the viewport below it
    pub fn chrome(&self, window: Rect) -> (Rect, Rect) {
        let x = window.x + self.left_margin;
        let w = (window.w - self.left_margin).max(0);
        let bar_h = self.address_bar_height.min(window.h).max(0);
        let address_bar = Rect::new(x, window.y, w, bar_h);
        let viewport = Rect::new(x, window.y + bar_h, w, (window.h - bar_h).max(0));
        (address_bar, viewport)
    }
}

pub struct DirectoryView {
    path: PathBuf,
    entries: Vec<Entry>,
    viewport: Rect,
    /// Cached label text no longer matches the entries or their widths
    labels_dirty: bool,
    labels: Vec<String>,
    geometry: ViewGeometry,
    provider: Box<dyn DirectoryProvider>,
}

impl std::fmt::Debug for DirectoryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryView")
            .field("path", &self.path)
            .field("entries", &self.entries.len())
            .field("viewport", &self.viewport)
            .field("labels_dirty", &self.labels_dirty)
            .finish()
    }
}

impl DirectoryView {
    /// Create an empty view of the provider's current directory
    pub fn new(provider: Box<dyn DirectoryProvider>, geometry: ViewGeometry) -> BrowseResult<Self> {
        let path = provider.current_path()?;
        Ok(Self {
            path,
            entries: Vec::new(),
            viewport: Rect::default(),
            labels_dirty: true,
            labels: Vec::new(),
            geometry,
            provider,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    #[cfg(test)]
    pub fn labels_dirty(&self) -> bool {
        self.labels_dirty
    }

    /// Move the grid to a new viewport, re-packing entries if it changed
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.apply_layout();
        }
    }

    /// Re-list the current directory.
    ///
    /// The old listing is dropped first: if listing fails the view is left
    /// empty rather than showing stale entries.
    pub fn reload(&mut self) -> BrowseResult<()> {
        self.replace_entries(Vec::new());
        let listing = self.provider.list_entries(&self.path)?;
        self.replace_entries(listing);
        Ok(())
    }

    /// Position every entry in the grid, in listing order
    pub fn apply_layout(&mut self) {
        let slots = self.geometry.grid.layout(self.entries.len(), self.viewport);
        let mut moved = false;
        for (entry, slot) in self.entries.iter_mut().zip(slots) {
            if entry.slot() != slot {
                entry.place(slot);
                moved = true;
            }
        }
        if moved {
            self.labels_dirty = true;
        }
    }

    /// Entry whose icon is under the point, if any
    pub fn hit_test(&self, x: i32, y: i32) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.icon_rect.contains(x, y))
    }

    /// Change to `path` (relative to the current directory, or "..").
    ///
    /// The new directory is listed before anything is committed. When the
    /// change or the listing fails the view keeps its path and entries, and
    /// the provider is moved back to the previous directory.
    pub fn cd(&mut self, path: &Path) -> BrowseResult<()> {
        let previous = self.path.clone();
        self.provider.change_directory(path)?;

        let listed = self.provider.current_path().and_then(|new_path| {
            let listing = self.provider.list_entries(&new_path)?;
            Ok((new_path, listing))
        });

        match listed {
            Ok((new_path, listing)) => {
                log::info!("cd {} -> {}", previous.display(), new_path.display());
                self.path = new_path;
                self.replace_entries(listing);
                self.apply_layout();
                Ok(())
            }
            Err(e) => {
                if let Err(rollback) = self.provider.change_directory(&previous) {
                    log::warn!("could not return to {}: {}", previous.display(), rollback);
                }
                Err(e)
            }
        }
    }

    /// Draw the window chrome: address bar with the current path and the
    /// viewport background. Recomputes the viewport from the window size.
    pub fn refresh(&mut self, canvas: &mut dyn Canvas, window: Rect) {
        let (address_bar, viewport) = self.geometry.chrome(window);
        self.set_viewport(viewport);

        canvas.draw_panel(window, PanelKind::Window);
        canvas.draw_panel(address_bar, PanelKind::AddressBar);
        canvas.draw_address(&self.display_path(), address_bar);
        canvas.draw_panel(viewport, PanelKind::Viewport);
    }

    /// Draw every entry's icon and label
    pub fn paint(&mut self, canvas: &mut dyn Canvas) {
        if self.labels_dirty {
            self.labels = self
                .entries
                .iter()
                .map(|entry| fit_label(&entry.name, entry.label_rect.w.max(0) as usize))
                .collect();
        }

        for (entry, label) in self.entries.iter().zip(&self.labels) {
            canvas.draw_icon(entry.icon_kind(), entry.icon_rect);
            canvas.draw_label(label, entry.label_rect);
        }
        self.labels_dirty = false;
    }

    fn replace_entries(&mut self, listing: Vec<DirEntryInfo>) {
        self.entries = listing.into_iter().map(Entry::from).collect();
        self.labels.clear();
        self.labels_dirty = true;
    }

    /// Current path with the home directory shown as ~
    fn display_path(&self) -> String {
        abbreviate_home(&self.path, std::env::var("HOME").ok().as_deref())
    }
}

fn abbreviate_home(path: &Path, home: Option<&str>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home.filter(|h| !h.is_empty() && *h != "/")
        && let Some(rest) = path_str.strip_prefix(home)
        && (rest.is_empty() || rest.starts_with(std::path::MAIN_SEPARATOR))
    {
        return format!("~{}", rest);
    }
    path_str.into_owned()
}
