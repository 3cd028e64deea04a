//! UI components

pub mod canvas;
pub mod dialog;
mod dialog_helpers;
pub mod render;
pub mod theme;

pub use canvas::{BufferCanvas, Canvas};
pub use dialog::ErrorDialog;
pub use render::RenderContext;
pub use theme::Theme;
pub use theme::ThemeConfig;
