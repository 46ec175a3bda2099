//! Variant alternations: `$(main value|moon value|dawn value)`.
//!
//! The marker is always `$`, whatever token prefix is configured. Each
//! alternative is matched lazily and cannot span lines.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::palette::Variant;

static ALTERNATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\((.*?)\|(.*?)\|(.*?)\)").expect("alternation pattern is valid")
});

/// Replaces every alternation with the alternative for `variant_id`.
///
/// `rose-pine` picks the first, `rose-pine-moon` the second and
/// `rose-pine-dawn` the third. Any other id leaves the text unchanged.
///
/// ```rust
/// use bloom_render::template::resolve_alternations;
///
/// let text = "bg: $(#191724|#232136|#faf4ed)";
/// assert_eq!(resolve_alternations(text, "rose-pine-moon"), "bg: #232136");
/// assert_eq!(resolve_alternations(text, "nord"), text);
/// ```
pub fn resolve_alternations(text: &str, variant_id: &str) -> String {
    let index = match Variant::from_id(variant_id) {
        Some(Variant::Main) => 1,
        Some(Variant::Moon) => 2,
        Some(Variant::Dawn) => 3,
        None => return text.to_string(),
    };

    ALTERNATION
        .replace_all(text, |caps: &Captures<'_>| caps[index].to_string())
        .into_owned()
}
