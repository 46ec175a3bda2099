//! File-level generation on top of the `bloom-render` engine.
//!
//! - [`build`]: templates to one theme per variant (and accent)
//! - [`build_template`]: theme files back to templates
//!
//! Both read every input up front per file, render in memory and write the
//! result, creating parent directories as needed.

mod build;
mod paths;
mod template;
mod walk;

use std::fs;
use std::path::Path;

use crate::error::{BuildError, Result};

pub use build::{build, pretty_json, BuildReport};
pub use paths::{template_path, theme_path, TemplateRoot};
pub use template::{build_template, Extracted};
pub use walk::{collect_files, find_default_template, DEFAULT_TEMPLATE_STEM};

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BuildError::io("read", path, e))
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| BuildError::io("write", path, e))
}

pub(crate) fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| BuildError::io("create", path, e))
}
