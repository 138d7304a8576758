//! Errors raised by profile store operations.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{prompt}\n\nUsage: {usage}")]
    MissingArgument {
        prompt: &'static str,
        usage: &'static str,
    },

    #[error(".gitconfig file \"{name}\" already exists ({})", path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error(".gitconfig file with the name \"{name}\" doesn't exist")]
    NotFound { name: String },

    #[error(
        "The current .gitconfig file ({}) is not a symbolic link. You may want to move this into {}.",
        link.display(),
        profiles_dir.display()
    )]
    NotSymlink {
        link: PathBuf,
        profiles_dir: PathBuf,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid profile name \"{name}\": it must be a plain file name")]
    InvalidName { name: String },

    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Build a closure that wraps an io error with the failing action and path
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}
