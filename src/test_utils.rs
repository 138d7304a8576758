//! Test utilities shared across test modules

use crate::paths::Paths;
use tempfile::TempDir;

/// Create a Paths struct for testing using a temporary directory
///
/// Mimics an already initialised home: `.gitconfigs/` exists and `.gitconfig`
/// does not.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    let paths = Paths {
        active_link: temp_dir.path().join(".gitconfig"),
        profiles_dir: temp_dir.path().join(".gitconfigs"),
    };
    std::fs::create_dir_all(&paths.profiles_dir).unwrap();
    paths
}
