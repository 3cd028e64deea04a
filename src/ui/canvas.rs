//! Drawing surface handed to the directory view
//!
//! The view only knows rectangles and what goes in them. `BufferCanvas`
//! turns those calls into cells of a ratatui buffer, clipping anything that
//! falls outside it.

use ratatui::{
    buffer::Buffer,
    layout::Rect as CellArea,
    style::{Color, Style},
};

use crate::fs::IconKind;
use crate::layout::Rect;
use super::Theme;

/// Background surfaces of the window chrome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    /// Everything not covered by the address bar or the viewport
    Window,
    AddressBar,
    Viewport,
}

/// Render adapter used by the view
pub trait Canvas {
    fn draw_panel(&mut self, rect: Rect, kind: PanelKind);
    fn draw_address(&mut self, text: &str, rect: Rect);
    fn draw_icon(&mut self, kind: IconKind, rect: Rect);
    fn draw_label(&mut self, text: &str, rect: Rect);
}

/// Canvas over a ratatui buffer
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    theme: &'a Theme,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, theme: &'a Theme) -> Self {
        Self { buf, theme }
    }

    /// Clip `rect` to the buffer and convert it to cell coordinates
    fn cells(&self, rect: Rect) -> Option<CellArea> {
        let bounds = Rect::from(*self.buf.area());
        let clipped = rect.clip(&bounds)?;
        // Inside the buffer, so every coordinate fits in u16
        Some(CellArea::new(
            clipped.x as u16,
            clipped.y as u16,
            clipped.w as u16,
            clipped.h as u16,
        ))
    }

    fn fill(&mut self, rect: Rect, ch: char, style: Style) {
        let Some(area) = self.cells(rect) else {
            return;
        };
        for row in area.top()..area.bottom() {
            for col in area.left()..area.right() {
                self.buf[(col, row)].set_char(ch).set_style(style);
            }
        }
    }

    fn page(&mut self, body: Rect, page: Color, mark: Color, glyph: char) {
        self.fill(body, ' ', Style::default().bg(page));
        if body.h > 2 && body.w > 2 {
            let lines = Rect::new(body.x + 1, body.y + 1, body.w - 2, body.h - 2);
            if glyph != ' ' {
                self.fill(lines, glyph, Style::default().fg(mark).bg(page));
            }
        }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn draw_panel(&mut self, rect: Rect, kind: PanelKind) {
        let bg = match kind {
            PanelKind::Window => self.theme.window_bg,
            PanelKind::AddressBar => self.theme.address_bar_bg,
            PanelKind::Viewport => self.theme.viewport_bg,
        };
        self.fill(rect, ' ', Style::default().bg(bg));
    }

    fn draw_address(&mut self, text: &str, rect: Rect) {
        let Some(area) = self.cells(rect) else {
            return;
        };
        let style = Style::default()
            .fg(self.theme.address_bar_fg)
            .bg(self.theme.address_bar_bg);
        let width = usize::from(area.width.saturating_sub(1));
        let shown = fit_path(text, width);
        self.buf.set_stringn(area.x + 1, area.y, &shown, width, style);
    }

    fn draw_icon(&mut self, kind: IconKind, rect: Rect) {
        // One blank column on each side keeps neighbours apart
        if rect.w < 3 || rect.h < 1 {
            return;
        }
        let body = Rect::new(rect.x + 1, rect.y, rect.w - 2, rect.h);

        match kind {
            IconKind::Directory => {
                let tab = Rect::new(body.x, body.y, (body.w / 2).max(1), 1);
                self.fill(tab, '▄', Style::default().fg(self.theme.icon_directory_tab));
                let folder = Rect::new(body.x, body.y + 1, body.w, body.h - 1);
                self.fill(folder, ' ', Style::default().bg(self.theme.icon_directory));
            }
            IconKind::TextFile => {
                self.page(body, self.theme.icon_text_page, self.theme.icon_text_lines, '─');
            }
            IconKind::Generic => {
                self.page(body, self.theme.icon_generic_page, self.theme.icon_generic_fold, ' ');
                let corner = Rect::new(body.right() - 1, body.y, 1, 1);
                let style = Style::default()
                    .fg(self.theme.icon_generic_fold)
                    .bg(self.theme.viewport_bg);
                self.fill(corner, '◣', style);
            }
        }
    }

    fn draw_label(&mut self, text: &str, rect: Rect) {
        let Some(area) = self.cells(rect) else {
            return;
        };
        let style = Style::default().fg(self.theme.label_fg);
        self.buf.set_stringn(area.x, area.y, text, usize::from(area.width), style);
    }
}

/// Fit a label into `max_width` columns, keeping the start of the name
pub fn fit_label(name: &str, max_width: usize) -> String {
    if name.chars().count() <= max_width {
        name.to_string()
    } else if max_width <= 1 {
        name.chars().take(max_width).collect()
    } else {
        let mut result: String = name.chars().take(max_width - 1).collect();
        result.push('…');
        result
    }
}

/// Fit a path into `max_width` columns, keeping its tail
pub fn fit_path(path: &str, max_width: usize) -> String {
    let char_count = path.chars().count();
    if char_count <= max_width {
        path.to_string()
    } else if max_width <= 1 {
        "…".chars().take(max_width).collect()
    } else {
        let skip = char_count - max_width + 1;
        let mut result = String::from("…");
        result.extend(path.chars().skip(skip));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> Buffer {
        Buffer::empty(CellArea::new(0, 0, 20, 8))
    }

    #[test]
    fn test_fit_label() {
        assert_eq!(fit_label("short", 10), "short");
        assert_eq!(fit_label("very-long-name.txt", 8), "very-lo…");
        assert_eq!(fit_label("abc", 1), "a");
        assert_eq!(fit_label("abc", 0), "");
    }

    #[test]
    fn test_fit_path_keeps_tail() {
        assert_eq!(fit_path("/home/user", 20), "/home/user");
        assert_eq!(fit_path("/home/user/projects", 9), "…projects");
    }

    #[test]
    fn test_panel_fill_is_clipped() {
        let theme = Theme::classic();
        let mut buf = buffer();
        let mut canvas = BufferCanvas::new(&mut buf, &theme);
        canvas.draw_panel(Rect::new(-5, 6, 100, 100), PanelKind::Viewport);

        assert_eq!(buf[(0, 6)].bg, theme.viewport_bg);
        assert_eq!(buf[(19, 7)].bg, theme.viewport_bg);
        assert_eq!(buf[(0, 5)].bg, Color::Reset);
    }

    #[test]
    fn test_directory_icon_has_tab_and_body() {
        let theme = Theme::dark();
        let mut buf = buffer();
        let mut canvas = BufferCanvas::new(&mut buf, &theme);
        canvas.draw_icon(IconKind::Directory, Rect::new(0, 0, 10, 4));

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].symbol(), "▄");
        assert_eq!(buf[(1, 1)].bg, theme.icon_directory);
        assert_eq!(buf[(8, 3)].bg, theme.icon_directory);
        assert_eq!(buf[(9, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_text_icon_has_lines() {
        let theme = Theme::dark();
        let mut buf = buffer();
        let mut canvas = BufferCanvas::new(&mut buf, &theme);
        canvas.draw_icon(IconKind::TextFile, Rect::new(0, 0, 10, 4));

        assert_eq!(buf[(1, 0)].bg, theme.icon_text_page);
        assert_eq!(buf[(2, 1)].symbol(), "─");
        assert_eq!(buf[(2, 1)].fg, theme.icon_text_lines);
    }

    #[test]
    fn test_label_and_address_text() {
        let theme = Theme::dark();
        let mut buf = buffer();
        let mut canvas = BufferCanvas::new(&mut buf, &theme);
        canvas.draw_label("notes", Rect::new(2, 5, 4, 4));
        canvas.draw_address("/tmp", Rect::new(0, 0, 20, 1));

        let label: String = (2..6).map(|x| buf[(x, 5)].symbol().to_string()).collect();
        assert_eq!(label, "note");
        assert_eq!(buf[(6, 5)].symbol(), " ");
        let address: String = (1..5).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(address, "/tmp");
    }
}
