//! Reverse substitution: theme text back to template text.
//!
//! Every role color of the chosen variant is formatted exactly as the forward
//! renderer would format it and mapped back to its token, alongside the
//! variant's id, name and description. Only literals rendered in the given
//! [`FormatConfig`] are recognised; the format is never inferred.
//!
//! ```rust
//! use bloom_render::{extract, ExtractOptions, FormatConfig, Variant};
//!
//! let theme = r##"{"name": "Rosé Pine", "bg": "#191724", "fg": "#e0def4"}"##;
//! let out = extract(theme, Variant::Main, "$", &FormatConfig::default(), ExtractOptions::default());
//!
//! assert!(out.matched);
//! assert_eq!(out.template, r#"{"name": "$name", "bg": "$base", "fg": "$text"}"#);
//! ```

use super::tokens::TokenMap;
use crate::format::{format_color, FormatConfig};
use crate::palette::Variant;

/// Optional behavior of [`extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// Also map the appearance (`dark`/`light`) back to `{prefix}appearance`.
    ///
    /// Off by default: the words are common in theme files and would be
    /// replaced wherever they appear.
    pub include_appearance: bool,
}

/// Result of [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub template: String,
    /// Whether any registered literal occurred in the input.
    pub matched: bool,
    /// Number of literals replaced.
    pub replacements: usize,
}

/// Builds the literal → token map for `variant`.
pub fn extraction_map(
    variant: Variant,
    prefix: &str,
    format: &FormatConfig,
    options: ExtractOptions,
) -> TokenMap {
    let meta = variant.meta();
    let mut tokens = TokenMap::new();

    for (role, color) in meta.palette.iter() {
        tokens.insert(format_color(color, format), format!("{prefix}{}", role.name()));
    }

    tokens.insert(meta.id, format!("{prefix}id"));
    tokens.insert(meta.name, format!("{prefix}name"));
    tokens.insert(meta.description, format!("{prefix}description"));

    if options.include_appearance {
        tokens.insert(meta.appearance.as_str(), format!("{prefix}appearance"));
    }

    tokens
}

/// Replaces the variant's literals in `theme` with tokens, in one pass.
///
/// Literals are tried longest first, so a literal that is a substring of a
/// longer one (`Rosé Pine` inside `Rosé Pine Moon`) never splits it. Metadata
/// of other variants is left untouched.
pub fn extract(
    theme: &str,
    variant: Variant,
    prefix: &str,
    format: &FormatConfig,
    options: ExtractOptions,
) -> Extraction {
    let replaced = extraction_map(variant, prefix, format, options).apply(theme);
    Extraction {
        matched: replaced.count > 0,
        replacements: replaced.count,
        template: replaced.text,
    }
}
