//! Template discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{BuildError, Result};

/// Stem a template file must have to be found without an explicit path.
pub const DEFAULT_TEMPLATE_STEM: &str = "template";

/// Lists the files to process for `path`.
///
/// A file yields itself. A directory is walked recursively and yields every
/// file below it, sorted by path.
pub fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    let metadata = path
        .metadata()
        .map_err(|e| BuildError::io("read", path, e))?;

    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|source| BuildError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Finds `template.<ext>` directly inside `dir`.
///
/// When several match, the first by file name wins.
pub fn find_default_template(dir: &Path) -> Result<PathBuf> {
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| BuildError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.file_stem().is_some_and(|stem| stem == DEFAULT_TEMPLATE_STEM)
        {
            tracing::debug!(template = %path.display(), "found default template");
            return Ok(path.to_path_buf());
        }
    }

    Err(BuildError::TemplateNotFound {
        dir: dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_file(dir: &Path, relative_path: &str, content: &str) {
        let full_path = dir.join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    #[test]
    fn test_single_file() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "theme.toml", "$base");
        let files = collect_files(&temp.path().join("theme.toml")).unwrap();
        assert_eq!(files, vec![temp.path().join("theme.toml")]);
    }

    #[test]
    fn test_directory_is_walked_recursively_and_sorted() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "b.json", "{}");
        create_file(temp.path(), "a/z.conf", "");
        create_file(temp.path(), "a/nested/y.conf", "");

        let files = collect_files(temp.path()).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("a/nested/y.conf"),
                PathBuf::from("a/z.conf"),
                PathBuf::from("b.json"),
            ]
        );
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = collect_files(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, BuildError::Io { action: "read", .. }));
    }

    #[test]
    fn test_default_template_by_stem() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "README.md", "");
        create_file(temp.path(), "template.yaml", "");
        create_file(temp.path(), "templates/template.json", "");

        let found = find_default_template(temp.path()).unwrap();
        assert_eq!(found, temp.path().join("template.yaml"));
    }

    #[test]
    fn test_default_template_in_missing_dir_is_walk_error() {
        let temp = TempDir::new().unwrap();
        let err = find_default_template(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, BuildError::Walk { .. }));
    }

    #[test]
    fn test_default_template_missing() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "theme.json", "");
        let err = find_default_template(temp.path()).unwrap_err();
        assert!(matches!(err, BuildError::TemplateNotFound { .. }));
    }
}
