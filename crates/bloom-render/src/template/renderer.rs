//! Forward substitution: template text to theme text.
//!
//! The renderer builds one [`TokenMap`] for a (variant, accent, prefix,
//! format) combination and applies it in a single pass, then resolves
//! `$(main|moon|dawn)` alternations.
//!
//! # Tokens
//!
//! With the default `$` prefix:
//!
//! | Token | Value |
//! |-------|-------|
//! | `$id`, `$name`, `$description` | variant metadata |
//! | `$type`, `$appearance` | `dark` or `light` |
//! | `$base` ... `$highlightHigh` | formatted role color |
//! | `$base/50` | role color with alpha `0.5` |
//! | `$accent`, `$accentname`, `$onaccent` | selected accent (only when an accent is given) |
//! | `$accent/50`, `$onaccent/50` | accent colors with alpha |
//!
//! Anything else that starts with the prefix is left untouched.
//!
//! # Example
//!
//! ```rust
//! use bloom_render::{Accent, FormatConfig, Renderer, Variant};
//!
//! let renderer = Renderer::new(Variant::Main).with_accent(Accent::Love);
//! let out = renderer.render("fg=$onaccent bg=$accent ($accentname) $base/50");
//! assert_eq!(out, "fg=#e0def4 bg=#eb6f92 (love) #19172480");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::alternation::resolve_alternations;
use super::tokens::TokenMap;
use crate::color::Color;
use crate::format::{format_color, FormatConfig};
use crate::palette::{Accent, Role, Variant};

/// Default token prefix.
pub const DEFAULT_PREFIX: &str = "$";

/// Matches `<name>/<digits>` after a prefix has been stripped.
static ALPHA_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)/(\d+)").expect("alpha suffix pattern is valid"));

/// Renders templates for one variant, accent and format.
///
/// Cheap to construct; holds no compiled state between calls.
#[derive(Debug, Clone)]
pub struct Renderer {
    variant: Variant,
    accent: Option<Accent>,
    prefix: String,
    format: FormatConfig,
}

impl Renderer {
    /// Creates a renderer with the `$` prefix, hex format and no accent.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            accent: None,
            prefix: DEFAULT_PREFIX.to_string(),
            format: FormatConfig::default(),
        }
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn with_optional_accent(mut self, accent: Option<Accent>) -> Self {
        self.accent = accent;
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

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn accent(&self) -> Option<Accent> {
        self.accent
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    /// Builds the token map for `template`.
    ///
    /// The template is only consulted for alpha-suffixed color tokens, whose
    /// set depends on which suffixes actually occur.
    pub fn token_map(&self, template: &str) -> TokenMap {
        let meta = self.variant.meta();
        let palette = meta.palette;
        let p = &self.prefix;
        let mut tokens = TokenMap::new();

        tokens.insert(format!("{p}id"), meta.id);
        tokens.insert(format!("{p}name"), meta.name);
        tokens.insert(format!("{p}type"), meta.appearance.as_str());
        tokens.insert(format!("{p}appearance"), meta.appearance.as_str());
        tokens.insert(format!("{p}description"), meta.description);

        if let Some(accent) = self.accent {
            let color = palette.get(accent.role());
            tokens.insert(format!("{p}accentname"), accent.name());
            tokens.insert(format!("{p}accent"), format_color(color, &self.format));
            if let Some(on) = color.on {
                tokens.insert(
                    format!("{p}onaccent"),
                    format_color(palette.get(on), &self.format),
                );
            }
        }

        for (key, color) in self.alpha_tokens(template) {
            tokens.insert(key, format_color(&color, &self.format));
        }

        for (role, color) in palette.iter() {
            tokens.insert(
                format!("{p}{}", role.name()),
                format_color(&color.opaque(), &self.format),
            );
        }

        tokens
    }

    /// Finds every `{prefix}{name}/{digits}` occurrence in `template`.
    ///
    /// `name` is a role, or `accent`/`onaccent` when an accent is selected.
    /// Returns the literal token text and its color with alpha `digits / 100`.
    /// Digits that do not fit a number fall back to an alpha of `0`.
    ///
    /// Every offset where the prefix starts is tried, so occurrences may
    /// overlap (`$$$base/50` with prefix `$$`).
    fn alpha_tokens(&self, template: &str) -> Vec<(String, Color)> {
        let prefix = self.prefix.as_str();
        template
            .char_indices()
            .filter(|&(start, _)| template[start..].starts_with(prefix))
            .filter_map(|(start, _)| parse_alpha_suffix(&template[start + prefix.len()..]))
            .filter_map(|(token, name, alpha)| {
                let color = self.alpha_base(name)?;
                Some((format!("{prefix}{token}"), color.with_alpha(alpha)))
            })
            .collect()
    }

    /// The color an alpha-suffixed name refers to.
    fn alpha_base(&self, name: &str) -> Option<&'static Color> {
        let palette = self.variant.meta().palette;
        match (name, self.accent) {
            ("accent", Some(accent)) => Some(palette.get(accent.role())),
            ("onaccent", Some(accent)) => palette.get(accent.role()).on.map(|on| palette.get(on)),
            _ => name.parse::<Role>().ok().map(|role| palette.get(role)),
        }
    }

    /// Renders `template`.
    ///
    /// Tokens are substituted in one pass, then `$(a|b|c)` alternations are
    /// resolved for this variant.
    pub fn render(&self, template: &str) -> String {
        let tokens = self.token_map(template);
        let substituted = tokens.apply(template);
        resolve_alternations(&substituted.text, self.variant.meta().id)
    }
}

/// Parses `name/digits` at the start of `s`.
fn parse_alpha_suffix(s: &str) -> Option<(&str, &str, f64)> {
    let caps = ALPHA_SUFFIX.captures(s)?;
    let whole = caps.get(0)?.as_str();
    let name = caps.get(1)?.as_str();
    let percent: f64 = caps
        .get(2)
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
        .map_or(0.0, |n| n as f64);
    Some((whole, name, percent / 100.0))
}

/// Renders `template` for `variant`, optionally with an accent.
///
/// Convenience wrapper around [`Renderer`].
pub fn render(
    template: &str,
    variant: Variant,
    accent: Option<Accent>,
    prefix: &str,
    format: &FormatConfig,
) -> String {
    Renderer::new(variant)
        .with_optional_accent(accent)
        .with_prefix(prefix)
        .with_format(*format)
        .render(template)
}
