//! Filesystem utility functions
//!
//! This module provides common filesystem operations used across the codebase.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Move a file to a new location
///
/// Tries a plain rename first. When that fails and the source is a regular
/// file (for example when `dst` lives on another filesystem), falls back to
/// copying the contents and removing the source. Symbolic links are moved as
/// links and never copied.
///
/// # Errors
/// Returns the rename error if no fallback applies, or the error of the
/// failing copy/remove step.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    let rename_err = match fs::rename(src, dst) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    let meta = fs::symlink_metadata(src)?;
    if !meta.file_type().is_file() {
        return Err(rename_err);
    }

    tracing::debug!(src = %src.display(), dst = %dst.display(), error = %rename_err, "rename failed, copying instead");
    fs::copy(src, dst)?;
    fs::remove_file(src)
}

/// Resolve `.` and `..` components of `path` lexically
///
/// The filesystem is not consulted, so symlinked directories along the way
/// are not followed. A `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
