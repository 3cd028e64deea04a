//! Filesystem module

pub mod entry;
pub mod ops;

pub use entry::{DirEntryInfo, Entry, IconKind};
pub use ops::read_directory;
