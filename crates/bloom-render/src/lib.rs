//! # Bloom Render - Rosé Pine Theme Engine
//!
//! `bloom-render` turns template text containing palette tokens into theme
//! text for each Rosé Pine variant, and turns theme text back into templates.
//!
//! The crate has no I/O. Everything operates on `&str` and the fixed palette
//! registry compiled into the binary.
//!
//! ## Core Concepts
//!
//! - [`Variant`]: one of `main`, `moon`, `dawn`, each with a [`Palette`]
//! - [`Role`]: a named color slot (`base`, `love`, `highlightHigh`, ...)
//! - [`Accent`]: the six hue roles that can be selected as an accent
//! - [`FormatConfig`]: notation plus `plain`/`commas`/`spaces` flags
//! - [`Renderer`]: forward substitution for one variant and accent
//! - [`extract`]: reverse substitution from theme to template
//!
//! ## Quick Start
//!
//! ```rust
//! use bloom_render::{FormatConfig, Notation, Renderer, Variant};
//!
//! let template = "background = \"$base\"\nforeground = \"$text\"\n";
//!
//! let out = Renderer::new(Variant::Dawn).render(template);
//! assert_eq!(out, "background = \"#faf4ed\"\nforeground = \"#575279\"\n");
//!
//! let rgb = Renderer::new(Variant::Main)
//!     .with_format(FormatConfig::new(Notation::RgbCss))
//!     .render("$base/50");
//! assert_eq!(rgb, "rgb(25 23 36 / 0.5)");
//! ```
//!
//! ## Reverse Generation
//!
//! ```rust
//! use bloom_render::{extract, ExtractOptions, FormatConfig, Variant};
//!
//! let out = extract("bg #232136", Variant::Moon, "$", &FormatConfig::default(), ExtractOptions::default());
//! assert_eq!(out.template, "bg $base");
//! ```

mod color;
mod error;
pub mod format;
pub mod palette;
pub mod template;

pub use color::{Color, Hsl, Rgb};
pub use error::{ParseError, Result};

pub use format::{format_color, format_examples, formats_table, FormatConfig, FormatExample, Notation};

pub use palette::{
    Accent, Appearance, Palette, Role, Variant, VariantMeta, DAWN, DESCRIPTION, MAIN, MOON,
};

pub use template::{
    extract, render, resolve_alternations, ExtractOptions, Extraction, Renderer, DEFAULT_PREFIX,
};
