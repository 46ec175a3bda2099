//! Resolved settings for one build, independent of how they were collected.

use std::path::PathBuf;

use bloom_render::{ExtractOptions, FormatConfig, Variant, DEFAULT_PREFIX};

/// Forward generation: template file or directory to themes.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Template file or directory of templates.
    pub template: PathBuf,
    pub output: PathBuf,
    pub prefix: String,
    pub format: FormatConfig,
    /// Render once per accent even when no template mentions `{prefix}accent`.
    pub accents: bool,
}

impl BuildConfig {
    /// Defaults matching the CLI: `dist`, `$`, hex.
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: PathBuf::from("dist"),
            prefix: DEFAULT_PREFIX.to_string(),
            format: FormatConfig::default(),
            accents: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_accents(mut self, accents: bool) -> Self {
        self.accents = accents;
        self
    }
}

/// Reverse generation: existing theme file(s) to template.
#[derive(Debug, Clone)]
pub struct BuildTemplateConfig {
    /// Theme file or directory of theme files.
    pub input: PathBuf,
    pub output: PathBuf,
    /// Variant whose colors the input was built with.
    pub variant: Variant,
    pub prefix: String,
    pub format: FormatConfig,
    pub extract: ExtractOptions,
}

impl BuildTemplateConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from("dist"),
            variant: Variant::Main,
            prefix: DEFAULT_PREFIX.to_string(),
            format: FormatConfig::default(),
            extract: ExtractOptions::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_extract(mut self, extract: ExtractOptions) -> Self {
        self.extract = extract;
        self
    }
}
