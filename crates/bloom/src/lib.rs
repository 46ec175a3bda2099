//! # Bloom - Rosé Pine Theme Generator
//!
//! `bloom` renders one template into a theme file for every Rosé Pine
//! variant (and optionally every accent), and can turn an existing theme back
//! into a template. The substitution itself lives in [`bloom_render`]; this
//! crate adds the file system, the CLI and project scaffolding.
//!
//! ```no_run
//! use bloom::{build, BuildConfig};
//! use bloom_render::{FormatConfig, Notation};
//!
//! let config = BuildConfig::new("template.toml")
//!     .with_output("dist")
//!     .with_format(FormatConfig::new(Notation::Rgb).commas(false));
//!
//! let report = build(&config)?;
//! assert_eq!(report.written.len(), 3);
//! # Ok::<(), bloom::BuildError>(())
//! ```

pub mod builder;
pub mod cli;
mod config;
mod error;
pub mod logging;
pub mod scaffold;

pub use builder::{build, build_template, BuildReport, Extracted};
pub use config::{BuildConfig, BuildTemplateConfig};
pub use error::{BuildError, Result};
