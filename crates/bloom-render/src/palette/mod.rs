//! The fixed palette registry: roles, accents, variants and their colors.
//!
//! Everything here is compile-time constant data. The three [`VariantMeta`]
//! values and their [`Palette`]s live in `static` items and are never mutated,
//! so they can be shared freely between threads.
//!
//! # Vocabulary
//!
//! | Concept | Type | Members |
//! |---------|------|---------|
//! | Role | [`Role`] | `base`, `surface`, `overlay`, `muted`, `subtle`, `text`, `love`, `gold`, `rose`, `pine`, `foam`, `iris`, `highlightLow`, `highlightMed`, `highlightHigh` |
//! | Accent | [`Accent`] | `love`, `gold`, `rose`, `pine`, `foam`, `iris` |
//! | Variant | [`Variant`] | `main` (`rose-pine`), `moon` (`rose-pine-moon`), `dawn` (`rose-pine-dawn`) |
//!
//! # Example
//!
//! ```rust
//! use bloom_render::{Accent, Role, Variant};
//!
//! let meta = Variant::Moon.meta();
//! assert_eq!(meta.id, "rose-pine-moon");
//!
//! let love = meta.palette.get(Role::Love);
//! assert_eq!(love.on, Some(Role::Text));
//!
//! // Unknown names are a lookup miss, not an error.
//! assert!(meta.palette.lookup("lavender").is_none());
//! assert_eq!(Accent::Foam.role(), Role::Foam);
//! ```

mod data;

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseError;

pub use data::{DAWN, DESCRIPTION, MAIN, MOON};

// ─── Role ───────────────────────────────────────────────────────────────────

/// A named slot in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Base,
    Surface,
    Overlay,
    Muted,
    Subtle,
    Text,
    Love,
    Gold,
    Rose,
    Pine,
    Foam,
    Iris,
    HighlightLow,
    HighlightMed,
    HighlightHigh,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 15] = [
        Role::Base,
        Role::Surface,
        Role::Overlay,
        Role::Muted,
        Role::Subtle,
        Role::Text,
        Role::Love,
        Role::Gold,
        Role::Rose,
        Role::Pine,
        Role::Foam,
        Role::Iris,
        Role::HighlightLow,
        Role::HighlightMed,
        Role::HighlightHigh,
    ];

    /// The name used in tokens (`$highlightLow`, `$base`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Role::Base => "base",
            Role::Surface => "surface",
            Role::Overlay => "overlay",
            Role::Muted => "muted",
            Role::Subtle => "subtle",
            Role::Text => "text",
            Role::Love => "love",
            Role::Gold => "gold",
            Role::Rose => "rose",
            Role::Pine => "pine",
            Role::Foam => "foam",
            Role::Iris => "iris",
            Role::HighlightLow => "highlightLow",
            Role::HighlightMed => "highlightMed",
            Role::HighlightHigh => "highlightHigh",
        }
    }

    /// Returns the accent this role corresponds to, if it is one.
    pub const fn as_accent(self) -> Option<Accent> {
        match self {
            Role::Love => Some(Accent::Love),
            Role::Gold => Some(Accent::Gold),
            Role::Rose => Some(Accent::Rose),
            Role::Pine => Some(Accent::Pine),
            Role::Foam => Some(Accent::Foam),
            Role::Iris => Some(Accent::Iris),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| ParseError::UnknownRole(s.to_string()))
    }
}

// ─── Accent ─────────────────────────────────────────────────────────────────

/// One of the six roles that can be selected as the current accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accent {
    Love,
    Gold,
    Rose,
    Pine,
    Foam,
    Iris,
}

impl Accent {
    /// All accents in canonical order.
    pub const ALL: [Accent; 6] = [
        Accent::Love,
        Accent::Gold,
        Accent::Rose,
        Accent::Pine,
        Accent::Foam,
        Accent::Iris,
    ];

    /// The palette role backing this accent.
    pub const fn role(self) -> Role {
        match self {
            Accent::Love => Role::Love,
            Accent::Gold => Role::Gold,
            Accent::Rose => Role::Rose,
            Accent::Pine => Role::Pine,
            Accent::Foam => Role::Foam,
            Accent::Iris => Role::Iris,
        }
    }

    pub const fn name(self) -> &'static str {
        self.role().name()
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Accent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accent::ALL
            .into_iter()
            .find(|accent| accent.name() == s)
            .ok_or_else(|| ParseError::UnknownAccent(s.to_string()))
    }
}

// ─── Palette ────────────────────────────────────────────────────────────────

/// The 15 colors of one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub muted: Color,
    pub subtle: Color,
    pub text: Color,
    pub love: Color,
    pub gold: Color,
    pub rose: Color,
    pub pine: Color,
    pub foam: Color,
    pub iris: Color,
    pub highlight_low: Color,
    pub highlight_med: Color,
    pub highlight_high: Color,
}

impl Palette {
    /// Returns the color for a role.
    pub fn get(&self, role: Role) -> &Color {
        match role {
            Role::Base => &self.base,
            Role::Surface => &self.surface,
            Role::Overlay => &self.overlay,
            Role::Muted => &self.muted,
            Role::Subtle => &self.subtle,
            Role::Text => &self.text,
            Role::Love => &self.love,
            Role::Gold => &self.gold,
            Role::Rose => &self.rose,
            Role::Pine => &self.pine,
            Role::Foam => &self.foam,
            Role::Iris => &self.iris,
            Role::HighlightLow => &self.highlight_low,
            Role::HighlightMed => &self.highlight_med,
            Role::HighlightHigh => &self.highlight_high,
        }
    }

    /// Looks a color up by its token name. Unknown names return `None`.
    pub fn lookup(&self, name: &str) -> Option<&Color> {
        name.parse::<Role>().ok().map(|role| self.get(role))
    }

    /// Iterates over all roles and their colors in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Color)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

// ─── Variant ────────────────────────────────────────────────────────────────

/// Light or dark appearance of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and metadata of one variant, plus its palette.
#[derive(Debug, PartialEq)]
pub struct VariantMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub appearance: Appearance,
    pub description: &'static str,
    pub palette: &'static Palette,
}

/// Selector for the three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Main,
    Moon,
    Dawn,
}

impl Variant {
    /// All variants in generation order.
    pub const ALL: [Variant; 3] = [Variant::Main, Variant::Moon, Variant::Dawn];

    /// The registry entry for this variant.
    pub fn meta(self) -> &'static VariantMeta {
        match self {
            Variant::Main => &MAIN,
            Variant::Moon => &MOON,
            Variant::Dawn => &DAWN,
        }
    }

    /// The short selector name (`main`, `moon`, `dawn`).
    pub const fn selector(self) -> &'static str {
        match self {
            Variant::Main => "main",
            Variant::Moon => "moon",
            Variant::Dawn => "dawn",
        }
    }

    /// Resolves a full variant id such as `rose-pine-dawn`.
    pub fn from_id(id: &str) -> Option<Self> {
        Variant::ALL.into_iter().find(|v| v.meta().id == id)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    /// Accepts either a selector (`moon`) or a full id (`rose-pine-moon`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.selector() == s)
            .or_else(|| Variant::from_id(s))
            .ok_or_else(|| ParseError::UnknownVariant(s.to_string()))
    }
}
