//! Template substitution in both directions.
//!
//! - [`Renderer`] turns template text into theme text for one variant.
//! - [`extract`] turns theme text back into template text.
//! - [`resolve_alternations`] picks per-variant values from `$(a|b|c)`.
//!
//! Both directions share [`TokenMap`], which replaces all keys in a single
//! left-to-right pass with longest-key-first priority.

mod alternation;
mod extract;
mod renderer;
mod tokens;

pub use alternation::resolve_alternations;
pub use extract::{extract, extraction_map, ExtractOptions, Extraction};
pub use renderer::{render, Renderer, DEFAULT_PREFIX};
pub use tokens::{Replaced, TokenMap};
