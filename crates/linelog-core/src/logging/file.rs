//! Dated log file sink

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::timestamp::format_log_file_name;

/// Type alias for the logger's file destination
pub type BoxedFileSink = Box<dyn Write + Send>;

/// Path of a new log file inside `dir`, named from the current local time
pub fn log_file_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref()
        .join(format_log_file_name(&Local::now().naive_local()))
}

/// Create `dir` if needed and open a fresh log file inside it
///
/// The file is opened for reading and writing and any previous content
/// at the same path is discarded.
pub fn open_log_file(dir: impl AsRef<Path>) -> std::io::Result<(PathBuf, File)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = log_file_path(dir);
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    Ok((path, file))
}
