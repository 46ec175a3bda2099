use std::path::{Path, PathBuf};

use bloom_render::{Accent, Renderer, Variant};

use super::paths::{theme_path, TemplateRoot};
use super::walk::collect_files;
use super::{create_dir, read_file, write_file};
use crate::config::BuildConfig;
use crate::error::{BuildError, Result};

/// Files written by [`build`], in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

/// Renders every template file for every variant.
///
/// A template is rendered once per accent when `config.accents` is set or
/// when its text mentions `{prefix}accent`, otherwise once per variant.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    create_dir(&config.output)?;

    let root = if config.template.is_dir() {
        TemplateRoot::Directory(&config.template)
    } else {
        TemplateRoot::File
    };

    let mut report = BuildReport::default();
    for file in collect_files(&config.template)? {
        let content = read_file(&file)?;
        let accents = accents_for(config, &content);
        tracing::debug!(
            template = %file.display(),
            accents = accents.len(),
            "rendering template"
        );

        for variant in Variant::ALL {
            for &accent in &accents {
                let path = render_one(config, root, &file, &content, variant, accent)?;
                report.written.push(path);
            }
        }
    }

    Ok(report)
}

/// `[None]` for a plain build, one entry per accent otherwise.
fn accents_for(config: &BuildConfig, content: &str) -> Vec<Option<Accent>> {
    let mentions_accent = content.contains(&format!("{}accent", config.prefix));
    if config.accents || mentions_accent {
        Accent::ALL.into_iter().map(Some).collect()
    } else {
        vec![None]
    }
}

fn render_one(
    config: &BuildConfig,
    root: TemplateRoot<'_>,
    file: &Path,
    content: &str,
    variant: Variant,
    accent: Option<Accent>,
) -> Result<PathBuf> {
    let renderer = Renderer::new(variant)
        .with_optional_accent(accent)
        .with_prefix(config.prefix.as_str())
        .with_format(config.format);

    let mut output = renderer.render(content);
    if is_json(file) {
        output = pretty_json(&output).map_err(|source| BuildError::Json {
            template: file.to_path_buf(),
            source,
        })?;
    }

    let path = theme_path(&config.output, root, file, variant.meta().id, accent);
    write_file(&path, &output)?;
    tracing::info!(path = %path.display(), variant = %variant, "wrote theme");
    Ok(path)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Re-indents JSON with two spaces, keeping key order.
///
/// Numbers keep their original text (`1.50`, `1e2`, big integers). Whitespace
/// trailing the document is carried over unchanged.
pub fn pretty_json(text: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let mut pretty = serde_json::to_string_pretty(&value)?;
    let trimmed = text.trim_end();
    pretty.push_str(&text[trimmed.len()..]);
    Ok(pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let out = pretty_json(r#"{"z":1,"a":{"b":[1,2]}}"#).unwrap();
        assert_eq!(out, "{\n  \"z\": 1,\n  \"a\": {\n    \"b\": [\n      1,\n      2\n    ]\n  }\n}");
    }

    #[test]
    fn test_pretty_json_keeps_trailing_newline() {
        let out = pretty_json("{\"a\": \"#191724\"}\n").unwrap();
        assert_eq!(out, "{\n  \"a\": \"#191724\"\n}\n");
    }

    #[test]
    fn test_pretty_json_keeps_number_text() {
        let out = pretty_json(
            r#"{"a": 1.50, "c": 1e2, "d": 123456789012345678901234567890}"#,
        )
        .unwrap();
        assert_eq!(
            out,
            "{\n  \"a\": 1.50,\n  \"c\": 1e2,\n  \"d\": 123456789012345678901234567890\n}"
        );
    }

    #[test]
    fn test_pretty_json_rejects_invalid() {
        assert!(pretty_json("{\"a\": $base}").is_err());
    }

    #[test]
    fn test_accent_detection_uses_prefix() {
        let config = BuildConfig::new("t.txt").with_prefix("@");
        assert_eq!(accents_for(&config, "$accent").len(), 1);
        assert_eq!(accents_for(&config, "@accentname").len(), 6);

        let forced = BuildConfig::new("t.txt").with_accents(true);
        assert_eq!(accents_for(&forced, "$base").len(), 6);
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("a/template.json")));
        assert!(!is_json(Path::new("template.jsonc")));
        assert!(!is_json(Path::new("json")));
    }
}
