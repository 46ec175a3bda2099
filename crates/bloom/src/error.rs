//! Error type for the file-level build operations.
//!
//! The engine in `bloom-render` never fails; everything that can go wrong
//! here is file system access, template discovery or post-processing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// Reading, writing or creating a path failed.
    #[error("failed to {action} \"{}\": {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking a template directory failed.
    #[error("failed to walk \"{}\": {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// No template argument and nothing named `template.*` in the directory.
    #[error("no template file found in \"{}\" (expected a file named template.<ext>)", .dir.display())]
    TemplateNotFound { dir: PathBuf },

    /// A `.json` output was not valid JSON after substitution.
    #[error("generated JSON for \"{}\" is invalid: {source}", .template.display())]
    Json {
        template: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `git mv` and the plain rename both failed.
    #[error("failed to rename \"{}\" to \"{}\"", .from.display(), .to.display())]
    Rename { from: PathBuf, to: PathBuf },
}

impl BuildError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
