//! Project scaffolding for `bloom init`: README build section and LICENSE.
//!
//! Existing files are found case-insensitively and renamed to their canonical
//! names (`git mv` inside a git repository, a plain rename otherwise).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BuildError, Result};

pub const README: &str = "README.md";
pub const LICENSE: &str = "LICENSE";

pub const BUILD_START_MARKER: &str = "<!-- BLOOM_BUILD_START -->";
pub const BUILD_END_MARKER: &str = "<!-- BLOOM_BUILD_END -->";

static BUILD_SECTION: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "(?s){}.*?{}",
        regex::escape(BUILD_START_MARKER),
        regex::escape(BUILD_END_MARKER)
    );
    Regex::new(&pattern).expect("build section pattern is valid")
});

/// What happened to one scaffolded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub path: PathBuf,
    /// Original name when the file was renamed to its canonical name.
    pub renamed_from: Option<PathBuf>,
    /// Whether the file content was written.
    pub written: bool,
}

/// The README section describing how to rebuild the theme.
pub fn build_section() -> String {
    format!(
        "{BUILD_START_MARKER}\nThis theme was built using [bloom](https://github.com/rose-pine/rose-pine-bloom):\n\n```sh\nbloom build <template>\n```\n{BUILD_END_MARKER}"
    )
}

/// Replaces the build section in `readme`, or appends one after a blank line.
pub fn upsert_build_section(readme: &str) -> String {
    let section = build_section();
    if BUILD_SECTION.is_match(readme) {
        return BUILD_SECTION
            .replace_all(readme, regex::NoExpand(&section))
            .into_owned();
    }

    let mut out = readme.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&section);
    out.push('\n');
    out
}

/// MIT license text for `year`.
pub fn license_text(year: i32) -> String {
    format!(
        r#"MIT License

Copyright (c) {year} Rosé Pine

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

/// Adds or refreshes the build section of `README.md` in `dir`.
pub fn ensure_readme(dir: &Path) -> Result<Scaffolded> {
    let (path, renamed_from) = normalize_file_name(dir, README)?;
    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(BuildError::io("read", &path, e)),
    };

    fs::write(&path, upsert_build_section(&existing))
        .map_err(|e| BuildError::io("write", &path, e))?;

    Ok(Scaffolded {
        path,
        renamed_from,
        written: true,
    })
}

/// Writes `LICENSE` in `dir` unless it already has content.
pub fn ensure_license(dir: &Path) -> Result<Scaffolded> {
    let (path, renamed_from) = normalize_file_name(dir, LICENSE)?;
    let has_content = fs::metadata(&path).is_ok_and(|m| m.len() > 0);

    if !has_content {
        let year = chrono::Local::now().year();
        fs::write(&path, license_text(year)).map_err(|e| BuildError::io("write", &path, e))?;
    }

    Ok(Scaffolded {
        path,
        renamed_from,
        written: !has_content,
    })
}

/// Finds `target` in `dir` ignoring case and renames it to `target`.
///
/// Returns the canonical path and, if a rename happened, the old path. A
/// missing file is not an error.
fn normalize_file_name(dir: &Path, target: &str) -> Result<(PathBuf, Option<PathBuf>)> {
    let canonical = dir.join(target);
    let entries = fs::read_dir(dir).map_err(|e| BuildError::io("read", dir, e))?;

    for entry in entries.filter_map(std::result::Result::ok) {
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.eq_ignore_ascii_case(target) {
            continue;
        }
        if name == target {
            return Ok((canonical, None));
        }

        let actual = entry.path();
        rename(dir, &actual, &canonical)?;
        tracing::info!(from = %actual.display(), to = %canonical.display(), "renamed");
        return Ok((canonical, Some(actual)));
    }

    Ok((canonical, None))
}

fn is_git_repo(dir: &Path) -> bool {
    dir.join(".git").exists()
}

fn rename(dir: &Path, from: &Path, to: &Path) -> Result<()> {
    if is_git_repo(dir) {
        let status = Command::new("git")
            .arg("mv")
            .arg(from)
            .arg(to)
            .current_dir(dir)
            .status();
        match status {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => tracing::debug!(%status, "git mv failed, falling back to rename"),
            Err(err) => tracing::debug!(error = %err, "git unavailable, falling back to rename"),
        }
    }

    fs::rename(from, to).map_err(|_| BuildError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_section_appended_to_empty_readme() {
        let out = upsert_build_section("");
        assert_eq!(out, format!("\n{}\n", build_section()));
    }

    #[test]
    fn test_section_appended_after_blank_line() {
        let out = upsert_build_section("# Rosé Pine for Foo");
        assert!(out.starts_with("# Rosé Pine for Foo\n\n<!-- BLOOM_BUILD_START -->"));
        assert!(out.ends_with("<!-- BLOOM_BUILD_END -->\n"));
    }

    #[test]
    fn test_section_replaced_in_place() {
        let readme = "# Title\n\n<!-- BLOOM_BUILD_START -->\nold\n<!-- BLOOM_BUILD_END -->\n\n## Usage\n";
        let out = upsert_build_section(readme);
        assert_eq!(out, format!("# Title\n\n{}\n\n## Usage\n", build_section()));
        // Idempotent.
        assert_eq!(upsert_build_section(&out), out);
    }

    #[test]
    fn test_license_text_has_year_and_holder() {
        let text = license_text(2031);
        assert!(text.starts_with("MIT License\n\nCopyright (c) 2031 Rosé Pine\n"));
    }

    #[test]
    fn test_ensure_readme_renames_lowercase_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.md"), "# Theme\n").unwrap();

        let result = ensure_readme(temp.path()).unwrap();
        assert_eq!(result.path, temp.path().join(README));
        assert_eq!(result.renamed_from, Some(temp.path().join("readme.md")));

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![README.to_string()]);

        let content = fs::read_to_string(temp.path().join(README)).unwrap();
        assert!(content.starts_with("# Theme\n\n<!-- BLOOM_BUILD_START -->"));
    }

    #[test]
    fn test_ensure_license_creates_when_missing_or_empty() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_license(temp.path()).unwrap().written);

        fs::write(temp.path().join(LICENSE), "").unwrap();
        assert!(ensure_license(temp.path()).unwrap().written);
        let content = fs::read_to_string(temp.path().join(LICENSE)).unwrap();
        assert!(content.starts_with("MIT License"));
    }

    #[test]
    fn test_ensure_license_keeps_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(LICENSE), "Apache-2.0").unwrap();

        let result = ensure_license(temp.path()).unwrap();
        assert!(!result.written);
        assert_eq!(
            fs::read_to_string(temp.path().join(LICENSE)).unwrap(),
            "Apache-2.0"
        );
    }
}
