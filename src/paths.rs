use anyhow::{Context, Result};
use directories::BaseDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::fs_utils::normalize;

/// Overrides the active link location
pub const ACTIVE_LINK_ENV: &str = "GITCONFIG";
/// Overrides the profiles directory location
pub const PROFILES_DIR_ENV: &str = "GITCONFIGS";

/// The two locations gitrc manages
#[derive(Debug, Clone)]
pub struct Paths {
    /// ~/.gitconfig, the symlink git reads
    pub active_link: PathBuf,
    /// ~/.gitconfigs, one file per profile
    pub profiles_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from the process environment
    pub fn new() -> Result<Self> {
        Self::resolve(|key| std::env::var_os(key))
    }

    /// Resolve paths using `lookup` for environment variables.
    ///
    /// Explicit overrides win. Otherwise both paths live in the home directory,
    /// taken from `HOME`, then `USERPROFILE`, then the platform default.
    /// Empty values are treated as unset.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        let home = || -> Result<PathBuf> {
            if let Some(home) = var("HOME").or_else(|| var("USERPROFILE")) {
                return Ok(home);
            }
            let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
            Ok(base_dirs.home_dir().to_path_buf())
        };

        let active_link = match var(ACTIVE_LINK_ENV) {
            Some(path) => path,
            None => home()?.join(".gitconfig"),
        };
        let profiles_dir = match var(PROFILES_DIR_ENV) {
            Some(path) => path,
            None => home()?.join(".gitconfigs"),
        };

        // Link targets are stored verbatim, so they must not depend on the cwd
        let active_link = std::path::absolute(&active_link)
            .map(|p| normalize(&p))
            .with_context(|| format!("Failed to resolve path: {}", active_link.display()))?;
        let profiles_dir = std::path::absolute(&profiles_dir)
            .map(|p| normalize(&p))
            .with_context(|| format!("Failed to resolve path: {}", profiles_dir.display()))?;

        Ok(Self {
            active_link,
            profiles_dir,
        })
    }

    /// Get the path of a profile file
    pub fn profile(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(name)
    }

    /// Check if a path names an entry directly inside the profiles directory
    pub fn is_in_profiles_dir(&self, path: &Path) -> bool {
        path.parent() == Some(self.profiles_dir.as_path())
    }
}
