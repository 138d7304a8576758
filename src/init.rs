//! First-run setup of the profiles directory.

use std::fs;
use std::io::ErrorKind;

use crate::error::StoreError;
use crate::fs_utils::move_file;
use crate::paths::Paths;
use crate::switch::{LinkStatus, SwitchOutcome, make_symlink, switch_to_profile};

/// Profile created and activated on first run
pub const DEFAULT_PROFILE: &str = "default";

/// State of the profiles directory after `ensure_store`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// The directory already existed; nothing was done
    Ready,
    /// The directory was created and `default` activated
    Bootstrapped {
        /// An existing gitconfig became the default profile
        adopted: bool,
        switch: SwitchOutcome,
    },
}

/// Make sure the profiles directory exists, creating it on first run
pub fn ensure_store(paths: &Paths) -> Result<StoreStatus, StoreError> {
    let dir = &paths.profiles_dir;
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => return Ok(StoreStatus::Ready),
        Ok(_) => return Err(StoreError::NotADirectory { path: dir.clone() }),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(StoreError::io("inspect", dir)(e)),
    }

    let existing = LinkStatus::detect(&paths.active_link)?;
    if existing == LinkStatus::Directory {
        return Err(StoreError::NotSymlink {
            link: paths.active_link.clone(),
            profiles_dir: dir.clone(),
        });
    }

    tracing::info!(dir = %dir.display(), "initialising profiles directory");
    fs::create_dir_all(dir).map_err(StoreError::io("create directory", dir))?;

    let default = paths.profile(DEFAULT_PROFILE);
    let adopted = match &existing {
        // Linking to the resolved target keeps relative links working from the new location
        LinkStatus::Symlink { target } if target.exists() => {
            tracing::debug!(target = %target.display(), to = %default.display(), "adopting linked gitconfig");
            make_symlink(target, &default)?;
            true
        }
        LinkStatus::RegularFile => {
            tracing::debug!(from = %paths.active_link.display(), to = %default.display(), "adopting existing gitconfig");
            move_file(&paths.active_link, &default).map_err(StoreError::io("move", &paths.active_link))?;
            true
        }
        _ => {
            tracing::debug!(path = %default.display(), "creating default profile");
            fs::write(&default, "").map_err(StoreError::io("create", &default))?;
            false
        }
    };

    let switch = switch_to_profile(paths, DEFAULT_PROFILE)?;
    Ok(StoreStatus::Bootstrapped { adopted, switch })
}
