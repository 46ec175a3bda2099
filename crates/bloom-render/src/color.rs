//! The color value type shared by the palette registry and the formatter.
//!
//! A [`Color`] carries both its RGB and HSL coordinates. The two are
//! precomputed in the palette tables and always describe the same color, so
//! nothing in this crate converts between color spaces: the formatter simply
//! picks whichever coordinates the requested notation needs.
//!
//! # Example
//!
//! ```rust
//! use bloom_render::{Color, Hsl, Rgb};
//!
//! let base = Color::new(Rgb(25, 23, 36), Hsl::new(249, 22, 12));
//! assert!(base.alpha.is_none());
//!
//! let translucent = base.with_alpha(0.5);
//! assert_eq!(translucent.alpha, Some(0.5));
//! // The original is untouched.
//! assert!(base.alpha.is_none());
//! ```

use crate::palette::Role;

// ─── Coordinates ────────────────────────────────────────────────────────────

/// An sRGB triplet, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Returns the channels as an array, in `[r, g, b]` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// Hue, saturation and lightness in integer units.
///
/// Hue is in degrees (0–359), saturation and lightness are percentages
/// (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Creates HSL coordinates. Hue wraps at 360.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }
}

// ─── Color ──────────────────────────────────────────────────────────────────

/// A palette color.
///
/// `alpha` is `None` for every registry entry; alpha variants are produced by
/// [`with_alpha`](Color::with_alpha), which copies the color. `on` names the
/// role that reads legibly on top of this color and is only set for accents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub alpha: Option<f64>,
    pub on: Option<Role>,
}

impl Color {
    /// Creates an opaque color with no contrast role.
    pub const fn new(rgb: Rgb, hsl: Hsl) -> Self {
        Self {
            rgb,
            hsl,
            alpha: None,
            on: None,
        }
    }

    /// Sets the contrast role used for text drawn on this color.
    pub const fn on(mut self, role: Role) -> Self {
        self.on = Some(role);
        self
    }

    /// Returns a copy of this color with its alpha channel overwritten.
    ///
    /// The value is clamped to `[0, 1]`; NaN becomes fully transparent.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self {
            alpha: Some(alpha),
            ..*self
        }
    }

    /// Returns a copy of this color with no alpha channel.
    pub fn opaque(&self) -> Self {
        Self {
            alpha: None,
            ..*self
        }
    }
}
