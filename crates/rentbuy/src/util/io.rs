//! File helpers

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while writing `path`: `settings.yaml` → `settings.yaml.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("rentbuy"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `content` in one step.
///
/// The content goes to a temporary file next to the target first and is then
/// renamed over it, so readers see either the old file or the new one.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp = temp_path(path);
    if let Err(err) = fs::write(&temp, content) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    fs::rename(&temp, path)
}
