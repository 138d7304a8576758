//! Profile switching logic.
//!
//! This module implements the core mechanism of `gitrc`: the active link.
//! It handles:
//! - Detecting what currently sits at the active link path.
//! - Resolving the link back to a profile name.
//! - Pointing the link at another profile.
//!
//! The link target is the only mutable "current profile" state. A regular
//! file at the link path is user data and is never replaced.
//!
//! There is no locking. Two gitrc processes switching at once race and the
//! last rename wins.

use std::ffi::OsString;
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::fs_utils::normalize;
use crate::paths::Paths;

/// Represents what exists at the active link path (~/.gitconfig)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Missing,
    RegularFile,
    Directory,
    /// `target` is resolved against the link's directory when stored relative
    Symlink { target: PathBuf },
}

impl LinkStatus {
    pub fn detect(path: &Path) -> Result<Self, StoreError> {
        // symlink_metadata does not follow the link, so dangling links are still links
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let raw = fs::read_link(path).map_err(StoreError::io("read link", path))?;
                let target = match path.parent() {
                    Some(parent) if raw.is_relative() => normalize(&parent.join(raw)),
                    _ => normalize(&raw),
                };
                Ok(Self::Symlink { target })
            }
            Ok(meta) if meta.is_dir() => Ok(Self::Directory),
            Ok(_) => Ok(Self::RegularFile),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::Missing),
            Err(e) => Err(StoreError::io("inspect", path)(e)),
        }
    }

    /// Name of the profile this link points at, if it points into the profiles directory
    pub fn profile_name(&self, paths: &Paths) -> Option<String> {
        match self {
            Self::Symlink { target } if paths.is_in_profiles_dir(target) => target
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Outcome of a switch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The link already pointed at the profile; nothing was touched
    AlreadyActive,
    /// The link now points at the profile
    Switched { previous: Option<PathBuf> },
}

/// Resolve the currently active profile, if any
pub fn active_profile(paths: &Paths) -> Result<Option<String>, StoreError> {
    Ok(LinkStatus::detect(&paths.active_link)?.profile_name(paths))
}

/// Detect the active link and refuse to continue if it holds real data
pub fn ensure_link_replaceable(paths: &Paths) -> Result<LinkStatus, StoreError> {
    let status = LinkStatus::detect(&paths.active_link)?;
    match status {
        LinkStatus::RegularFile | LinkStatus::Directory => Err(StoreError::NotSymlink {
            link: paths.active_link.clone(),
            profiles_dir: paths.profiles_dir.clone(),
        }),
        _ => Ok(status),
    }
}

/// Switch to a specific profile
pub fn switch_to_profile(paths: &Paths, name: &str) -> Result<SwitchOutcome, StoreError> {
    let not_found = || StoreError::NotFound {
        name: name.to_string(),
    };
    if name.is_empty() {
        return Err(not_found());
    }
    crate::profiles::validate_profile_name(name)?;

    if !crate::profiles::profile_exists(paths, name) {
        return Err(not_found());
    }
    let profile = paths.profile(name);

    let previous = match ensure_link_replaceable(paths)? {
        LinkStatus::Symlink { target } if target == profile => {
            return Ok(SwitchOutcome::AlreadyActive);
        }
        LinkStatus::Symlink { target } => Some(target),
        _ => None,
    };

    replace_symlink(&profile, &paths.active_link)?;
    Ok(SwitchOutcome::Switched { previous })
}

/// Point `link` at `target`, replacing any existing link in one rename
pub fn replace_symlink(target: &Path, link: &Path) -> Result<(), StoreError> {
    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent).map_err(StoreError::io("create directory", parent))?;
    }

    let tmp = temp_link_path(link);
    if fs::symlink_metadata(&tmp).is_ok() {
        tracing::debug!(path = %tmp.display(), "removing stale temporary link");
        fs::remove_file(&tmp).map_err(StoreError::io("remove", &tmp))?;
    }

    make_symlink(target, &tmp)?;

    tracing::debug!(link = %link.display(), target = %target.display(), "swapping active link");
    if let Err(e) = fs::rename(&tmp, link) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::io("replace", link)(e));
    }

    Ok(())
}

/// Hidden sibling of `link` used while swapping
fn temp_link_path(link: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(link.file_name().unwrap_or_else(|| "gitconfig".as_ref()));
    name.push(".gitrc-tmp");
    link.with_file_name(name)
}

pub(crate) fn make_symlink(target: &Path, link: &Path) -> Result<(), StoreError> {
    tracing::debug!(link = %link.display(), target = %target.display(), "creating symlink");

    #[cfg(unix)]
    symlink(target, link).map_err(StoreError::io("create symlink", link))?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_file(target, link)
        .map_err(StoreError::io("create symlink", link))?;

    Ok(())
}
