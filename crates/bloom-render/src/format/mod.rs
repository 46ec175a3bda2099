//! Color notations and the formatter that renders a [`Color`] into text.
//!
//! A notation picks which coordinates are written and how they are wrapped.
//! Three independent flags on [`FormatConfig`] refine the output:
//!
//! - `plain` drops the decorative wrapper (`#`, `hsl(...)`, `[...]`)
//! - `commas` keeps the `,` in separators
//! - `spaces` keeps the space after each separator
//!
//! The CSS notations always separate components with single spaces and the
//! `ansi` notation ignores every flag.
//!
//! | Notation | Example | `--plain` |
//! |----------|---------|-----------|
//! | `hex` | `#ebbcba` | `ebbcba` |
//! | `hsl` | `hsl(2, 55%, 83%)` | `2, 55%, 83%` |
//! | `hsl-css` | `hsl(2deg 55% 83%)` | `2deg 55% 83%` |
//! | `hsl-array` | `[2, 0.55, 0.83]` | `2, 0.55, 0.83` |
//! | `rgb` | `rgb(235, 188, 186)` | `235, 188, 186` |
//! | `rgb-css` | `rgb(235 188 186)` | `235 188 186` |
//! | `rgb-array` | `[235, 188, 186]` | `235, 188, 186` |
//! | `ansi` | `235;188;186` | `235;188;186` |
//!
//! # Example
//!
//! ```rust
//! use bloom_render::{format_color, FormatConfig, Notation, Role, Variant};
//!
//! let rose = Variant::Main.meta().palette.get(Role::Rose);
//!
//! let config = FormatConfig::new(Notation::Rgb).commas(false);
//! assert_eq!(format_color(rose, &config), "rgb(235 188 186)");
//!
//! let config = FormatConfig::new(Notation::Hex);
//! assert_eq!(format_color(&rose.with_alpha(0.5), &config), "#ebbcba80");
//! ```

mod table;

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseError;

pub use table::{format_examples, formats_table, FormatExample};

// ─── Notation ───────────────────────────────────────────────────────────────

/// A textual color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    #[default]
    Hex,
    Hsl,
    HslCss,
    HslArray,
    Rgb,
    RgbCss,
    RgbArray,
    Ansi,
}

impl Notation {
    /// All notations, in the order they are listed to users.
    pub const ALL: [Notation; 8] = [
        Notation::Hex,
        Notation::Hsl,
        Notation::HslCss,
        Notation::HslArray,
        Notation::Rgb,
        Notation::RgbCss,
        Notation::RgbArray,
        Notation::Ansi,
    ];

    /// The name accepted by `--format`.
    pub const fn name(self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Hsl => "hsl",
            Notation::HslCss => "hsl-css",
            Notation::HslArray => "hsl-array",
            Notation::Rgb => "rgb",
            Notation::RgbCss => "rgb-css",
            Notation::RgbArray => "rgb-array",
            Notation::Ansi => "ansi",
        }
    }

    /// Parses a notation name, falling back to [`Notation::Hex`].
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Whether the notation honors `--plain`.
    pub const fn has_wrapper(self) -> bool {
        !matches!(self, Notation::Ansi)
    }

    /// Comma-separated list of every valid name, for diagnostics.
    pub fn valid_names() -> String {
        Notation::ALL
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::ALL
            .into_iter()
            .find(|n| n.name() == s)
            .ok_or_else(|| ParseError::UnknownNotation {
                name: s.to_string(),
                valid: Notation::valid_names(),
            })
    }
}

// ─── FormatConfig ───────────────────────────────────────────────────────────

/// How colors are written: a notation plus three style flags.
///
/// The default is `hex`, decorated, with commas and spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatConfig {
    pub notation: Notation,
    pub plain: bool,
    pub commas: bool,
    pub spaces: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            notation: Notation::Hex,
            plain: false,
            commas: true,
            spaces: true,
        }
    }
}

impl FormatConfig {
    /// Creates a configuration for `notation` with default flags.
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            ..Self::default()
        }
    }

    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    pub fn commas(mut self, commas: bool) -> Self {
        self.commas = commas;
        self
    }

    pub fn spaces(mut self, spaces: bool) -> Self {
        self.spaces = spaces;
        self
    }
}

// ─── Formatter ──────────────────────────────────────────────────────────────

/// Renders a color under the given configuration.
///
/// Total and deterministic. No alpha component (and no `hsla`/`rgba`) is
/// emitted unless `color.alpha` is set.
pub fn format_color(color: &Color, config: &FormatConfig) -> String {
    let mut out = ColorWriter::new(config);
    let [r, g, b] = color.rgb.channels();
    let hsl = color.hsl;

    match config.notation {
        Notation::Hex => {
            out.open("#");
            for channel in [r, g, b] {
                out.hex(channel);
            }
            if let Some(alpha) = color.alpha {
                out.hex(alpha_byte(alpha));
            }
        }
        Notation::Hsl => {
            out.open(if color.alpha.is_some() { "hsla(" } else { "hsl(" });
            out.number(hsl.h);
            out.sep();
            out.percent(hsl.s);
            out.sep();
            out.percent(hsl.l);
            if let Some(alpha) = color.alpha {
                out.sep();
                out.decimal(alpha);
            }
            out.close(")");
        }
        Notation::HslCss => {
            out.open("hsl(");
            out.number(hsl.h);
            out.text("deg ");
            out.percent(hsl.s);
            out.text(" ");
            out.percent(hsl.l);
            if let Some(alpha) = color.alpha {
                out.text(" / ");
                out.decimal(alpha);
            }
            out.close(")");
        }
        Notation::HslArray => {
            out.open("[");
            out.number(hsl.h);
            out.sep();
            out.decimal(f64::from(hsl.s) / 100.0);
            out.sep();
            out.decimal(f64::from(hsl.l) / 100.0);
            if let Some(alpha) = color.alpha {
                out.sep();
                out.decimal(alpha);
            }
            out.close("]");
        }
        Notation::Rgb => {
            out.open(if color.alpha.is_some() { "rgba(" } else { "rgb(" });
            out.number(r);
            out.sep();
            out.number(g);
            out.sep();
            out.number(b);
            if let Some(alpha) = color.alpha {
                out.sep();
                out.decimal(alpha);
            }
            out.close(")");
        }
        Notation::RgbCss => {
            out.open("rgb(");
            out.number(r);
            out.text(" ");
            out.number(g);
            out.text(" ");
            out.number(b);
            if let Some(alpha) = color.alpha {
                out.text(" / ");
                out.decimal(alpha);
            }
            out.close(")");
        }
        Notation::RgbArray => {
            out.open("[");
            out.number(r);
            out.sep();
            out.number(g);
            out.sep();
            out.number(b);
            if let Some(alpha) = color.alpha {
                out.sep();
                out.decimal(alpha);
            }
            out.close("]");
        }
        Notation::Ansi => {
            out.number(r);
            out.text(";");
            out.number(g);
            out.text(";");
            out.number(b);
            if let Some(alpha) = color.alpha {
                out.text(";");
                out.decimal(alpha);
            }
        }
    }

    out.finish()
}

/// Converts an alpha in `[0, 1]` to a byte, rounding half away from zero.
fn alpha_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Small string builder that knows the separator and wrapper rules.
struct ColorWriter<'a> {
    buf: String,
    config: &'a FormatConfig,
}

impl<'a> ColorWriter<'a> {
    fn new(config: &'a FormatConfig) -> Self {
        Self {
            buf: String::with_capacity(24),
            config,
        }
    }

    fn open(&mut self, wrapper: &str) {
        if !self.config.plain {
            self.buf.push_str(wrapper);
        }
    }

    fn close(&mut self, wrapper: &str) {
        if !self.config.plain {
            self.buf.push_str(wrapper);
        }
    }

    fn text(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Component separator: `,` only with `commas`, a space only with `spaces`.
    fn sep(&mut self) {
        if self.config.commas {
            self.buf.push(',');
        }
        if self.config.spaces {
            self.buf.push(' ');
        }
    }

    fn number(&mut self, n: impl Into<u32>) {
        // Writing to a String cannot fail.
        let _ = write!(self.buf, "{}", n.into());
    }

    fn percent(&mut self, n: u8) {
        self.number(n);
        self.buf.push('%');
    }

    /// Shortest decimal that round-trips: `0.5`, `0.55`, `1`.
    fn decimal(&mut self, value: f64) {
        let _ = write!(self.buf, "{}", value);
    }

    fn hex(&mut self, byte: u8) {
        let _ = write!(self.buf, "{:02x}", byte);
    }

    fn finish(self) -> String {
        self.buf
    }
}
