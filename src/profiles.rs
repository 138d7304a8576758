//! Core profile management logic.
//!
//! This module handles the "data model" of profiles:
//! - Validating profile names
//! - Listing available profiles
//! - Creating and deleting profiles
//!
//! Each profile is a plain file in the profiles directory, named after the
//! profile. Its content is whatever git config the user puts in it.

use std::fs;

use crate::error::StoreError;
use crate::paths::Paths;
use crate::switch::{LinkStatus, ensure_link_replaceable};

/// Outcome of deleting a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The active link pointed at the deleted profile and was removed
    pub was_active: bool,
}

/// List available profiles, sorted by name
///
/// Entries starting with `.` are hidden. Names that are not valid UTF-8 are
/// shown with replacement characters.
pub fn list_profiles(paths: &Paths) -> Result<Vec<String>, StoreError> {
    let dir = &paths.profiles_dir;
    let mut profiles = Vec::new();

    for entry in fs::read_dir(dir).map_err(StoreError::io("read directory", dir))? {
        let entry = entry.map_err(StoreError::io("read directory", dir))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            profiles.push(name);
        }
    }
    profiles.sort();
    Ok(profiles)
}

/// Check if a profile exists
///
/// A profile that is itself a dangling symlink still exists: it occupies the
/// name and can be deleted.
pub fn profile_exists(paths: &Paths, name: &str) -> bool {
    fs::symlink_metadata(paths.profile(name)).is_ok()
}

/// Validate profile name
///
/// A name must be a single path component so the profile stays inside the
/// profiles directory.
pub fn validate_profile_name(name: &str) -> Result<(), StoreError> {
    let invalid = name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR);

    if invalid {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Create a new, empty profile. Does not activate it.
pub fn create_profile(paths: &Paths, name: &str) -> Result<std::path::PathBuf, StoreError> {
    if name.is_empty() {
        return Err(StoreError::MissingArgument {
            prompt: "What do you want to call your new .gitconfig file?",
            usage: "gitrc -n [name]",
        });
    }
    validate_profile_name(name)?;

    let path = paths.profile(name);
    if profile_exists(paths, name) {
        return Err(StoreError::AlreadyExists {
            name: name.to_string(),
            path,
        });
    }

    tracing::debug!(path = %path.display(), "creating profile");
    fs::write(&path, "").map_err(StoreError::io("create", &path))?;
    Ok(path)
}

/// Delete a profile
///
/// If the active link points at this profile it is removed first, leaving
/// no active profile.
pub fn delete_profile(paths: &Paths, name: &str) -> Result<DeleteOutcome, StoreError> {
    if name.is_empty() {
        return Err(StoreError::MissingArgument {
            prompt: "What .gitconfig file did you want to delete?",
            usage: "gitrc -d [name]",
        });
    }
    validate_profile_name(name)?;

    let path = paths.profile(name);
    if !profile_exists(paths, name) {
        return Err(StoreError::NotFound {
            name: name.to_string(),
        });
    }

    let status = ensure_link_replaceable(paths)?;
    let was_active = matches!(&status, LinkStatus::Symlink { target } if *target == path);
    if was_active {
        tracing::debug!(link = %paths.active_link.display(), "removing active link");
        fs::remove_file(&paths.active_link)
            .map_err(StoreError::io("remove", &paths.active_link))?;
    }

    tracing::debug!(path = %path.display(), "deleting profile");
    fs::remove_file(&path).map_err(StoreError::io("delete", &path))?;

    Ok(DeleteOutcome { was_active })
}
