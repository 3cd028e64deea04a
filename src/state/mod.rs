pub mod app;
pub mod mode;
pub mod navigator;
pub mod view;

pub use app::App;
pub use mode::Mode;
pub use navigator::{Flow, Navigator};
pub use view::{DirectoryView, ViewGeometry};
