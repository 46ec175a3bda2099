use std::path::PathBuf;

use bloom_render::extract;

use super::paths::template_path;
use super::walk::collect_files;
use super::{create_dir, read_file, write_file};
use crate::config::BuildTemplateConfig;
use crate::error::Result;

/// Outcome of extracting one theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Whether any color or metadata literal was recognised.
    pub matched: bool,
    pub replacements: usize,
}

/// Turns every theme file under `config.input` into a template.
///
/// Files without a single recognised literal are still written; the caller
/// decides how to report them.
pub fn build_template(config: &BuildTemplateConfig) -> Result<Vec<Extracted>> {
    create_dir(&config.output)?;

    let mut results = Vec::new();
    for file in collect_files(&config.input)? {
        let content = read_file(&file)?;
        let extraction = extract(
            &content,
            config.variant,
            &config.prefix,
            &config.format,
            config.extract,
        );

        if !extraction.matched {
            tracing::warn!(
                input = %file.display(),
                format = %config.format.notation,
                "no colors matched the requested format"
            );
        }

        let output = template_path(&config.output, &file);
        write_file(&output, &extraction.template)?;
        tracing::info!(
            path = %output.display(),
            replacements = extraction.replacements,
            "wrote template"
        );

        results.push(Extracted {
            input: file,
            output,
            matched: extraction.matched,
            replacements: extraction.replacements,
        });
    }

    Ok(results)
}
