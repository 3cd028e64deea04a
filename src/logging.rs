//! Log setup
//!
//! The screen belongs to the UI, so records go to `gridfb.log` in the
//! config directory. `GRIDFB_LOG` takes the usual env_logger filter syntax.

use std::fs::{self, OpenOptions};

use env_logger::{Builder, Env, Target};

use crate::config;

pub const LOG_ENV: &str = "GRIDFB_LOG";

/// Start logging to the log file. Without a writable file the browser runs
/// with logging off.
pub fn init() {
    let Some(path) = config::log_file() else {
        return;
    };
    if let Some(dir) = path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
