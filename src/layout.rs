//! Grid packing for file icons
//!
//! Icons are placed left to right, wrapping into rows. Each row is one icon
//! tall plus the label band underneath it.

/// Axis-aligned rectangle, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Half-open containment: the left and top edges belong to the rect,
    /// the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    #[cfg(test)]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Intersection with `bounds`, or None when nothing is left.
    pub fn clip(&self, bounds: &Rect) -> Option<Rect> {
        let x = self.x.max(bounds.x);
        let y = self.y.max(bounds.y);
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

impl From<ratatui::layout::Rect> for Rect {
    fn from(area: ratatui::layout::Rect) -> Self {
        Self::new(
            i32::from(area.x),
            i32::from(area.y),
            i32::from(area.width),
            i32::from(area.height),
        )
    }
}

/// Width and height of one icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Position of one entry: its icon and the label drawn below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSlot {
    pub icon: Rect,
    pub label: Rect,
}

/// Icon geometry shared by every slot of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub icon: Size,
    pub label_height: i32,
    pub label_padding: i32,
}

impl GridGeometry {
    /// Number of icons that fit side by side. Never 0: a viewport narrower
    /// than one icon stacks everything in a single column.
    pub fn columns(&self, viewport: &Rect) -> i32 {
        if self.icon.w <= 0 {
            return 1;
        }
        (viewport.w / self.icon.w).max(1)
    }

    pub fn row_height(&self) -> i32 {
        self.icon.h + self.label_height
    }

    pub fn layout(&self, count: usize, viewport: Rect) -> Vec<GridSlot> {
        layout(count, viewport, self.icon, self.label_height, self.label_padding)
    }
}

/// Compute icon and label rectangles for `count` entries inside `viewport`.
///
/// Rows that fit on one line go through the same arithmetic as wrapped
/// rows, so the first row is identical whether or not the grid wraps.
pub fn layout(count: usize, viewport: Rect, icon: Size, label_height: i32, label_padding: i32) -> Vec<GridSlot> {
    let geometry = GridGeometry { icon, label_height, label_padding };
    let columns = geometry.columns(&viewport) as usize;

    (0..count)
        .map(|i| {
            let row = (i / columns) as i32;
            let col = (i % columns) as i32;
            let icon_rect = Rect::new(
                viewport.x + col * icon.w,
                viewport.y + row * geometry.row_height(),
                icon.w,
                icon.h,
            );
            let label_rect = Rect::new(
                icon_rect.x + label_padding,
                icon_rect.y + icon.h,
                icon.w - label_padding,
                icon.h,
            );
            GridSlot { icon: icon_rect, label: label_rect }
        })
        .collect()
}
