use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while browsing. The current action is abandoned and the
/// message is shown in the error dialog; the main loop keeps running.
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Cannot list '{}': {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot enter '{}': {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot launch '{}': {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BrowseError {
    pub fn list(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::List { path: path.into(), source }
    }

    pub fn path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Path { path: path.into(), source }
    }

    pub fn launch(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Launch { path: path.into(), source }
    }
}

pub type BrowseResult<T> = Result<T, BrowseError>;

/// Startup and terminal errors. Without a working terminal there is no UI
/// to report to, so these end the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Startup failed: {0}")]
    Browse(#[from] BrowseError),
}

pub type AppResult<T> = Result<T, AppError>;
