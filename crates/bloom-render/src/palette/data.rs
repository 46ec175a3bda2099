//! Static color tables for the three variants.

use super::{Appearance, Palette, Role, VariantMeta};
use crate::color::{Color, Hsl, Rgb};

/// Description shared by every variant.
pub const DESCRIPTION: &str =
    "All natural pine, faux fur and a bit of soho vibes for the classy minimalist";

pub static MAIN: VariantMeta = VariantMeta {
    id: "rose-pine",
    name: "Rosé Pine",
    appearance: Appearance::Dark,
    description: DESCRIPTION,
    palette: &MAIN_PALETTE,
};

pub static MOON: VariantMeta = VariantMeta {
    id: "rose-pine-moon",
    name: "Rosé Pine Moon",
    appearance: Appearance::Dark,
    description: DESCRIPTION,
    palette: &MOON_PALETTE,
};

pub static DAWN: VariantMeta = VariantMeta {
    id: "rose-pine-dawn",
    name: "Rosé Pine Dawn",
    appearance: Appearance::Light,
    description: DESCRIPTION,
    palette: &DAWN_PALETTE,
};

// ─── Palettes ───────────────────────────────────────────────────────────────

static MAIN_PALETTE: Palette = Palette {
    base: Color::new(Rgb(25, 23, 36), Hsl::new(249, 22, 12)),
    surface: Color::new(Rgb(31, 29, 46), Hsl::new(247, 23, 15)),
    overlay: Color::new(Rgb(38, 35, 58), Hsl::new(245, 25, 18)),
    muted: Color::new(Rgb(110, 106, 134), Hsl::new(249, 12, 47)),
    subtle: Color::new(Rgb(144, 140, 170), Hsl::new(248, 15, 61)),
    text: Color::new(Rgb(224, 222, 244), Hsl::new(245, 50, 91)),
    love: Color::new(Rgb(235, 111, 146), Hsl::new(343, 76, 68)).on(Role::Text),
    gold: Color::new(Rgb(246, 193, 119), Hsl::new(35, 88, 72)).on(Role::Surface),
    rose: Color::new(Rgb(235, 188, 186), Hsl::new(2, 55, 83)).on(Role::Surface),
    pine: Color::new(Rgb(49, 116, 143), Hsl::new(197, 49, 38)).on(Role::Text),
    foam: Color::new(Rgb(156, 207, 216), Hsl::new(189, 43, 73)).on(Role::Surface),
    iris: Color::new(Rgb(196, 167, 231), Hsl::new(267, 57, 78)).on(Role::Surface),
    highlight_low: Color::new(Rgb(33, 32, 46), Hsl::new(244, 18, 15)),
    highlight_med: Color::new(Rgb(64, 61, 82), Hsl::new(247, 15, 28)),
    highlight_high: Color::new(Rgb(82, 79, 103), Hsl::new(245, 13, 36)),
};

static MOON_PALETTE: Palette = Palette {
    base: Color::new(Rgb(35, 33, 54), Hsl::new(246, 24, 17)),
    surface: Color::new(Rgb(42, 39, 63), Hsl::new(248, 24, 20)),
    overlay: Color::new(Rgb(57, 53, 82), Hsl::new(248, 21, 26)),
    muted: Color::new(Rgb(110, 106, 134), Hsl::new(249, 12, 47)),
    subtle: Color::new(Rgb(144, 140, 170), Hsl::new(248, 15, 61)),
    text: Color::new(Rgb(224, 222, 244), Hsl::new(245, 50, 91)),
    love: Color::new(Rgb(235, 111, 146), Hsl::new(343, 76, 68)).on(Role::Text),
    gold: Color::new(Rgb(246, 193, 119), Hsl::new(35, 88, 72)).on(Role::Surface),
    rose: Color::new(Rgb(234, 154, 151), Hsl::new(2, 66, 75)).on(Role::Surface),
    pine: Color::new(Rgb(62, 143, 176), Hsl::new(197, 48, 47)).on(Role::Text),
    foam: Color::new(Rgb(156, 207, 216), Hsl::new(189, 43, 73)).on(Role::Surface),
    iris: Color::new(Rgb(196, 167, 231), Hsl::new(267, 57, 78)).on(Role::Surface),
    highlight_low: Color::new(Rgb(42, 40, 62), Hsl::new(245, 22, 20)),
    highlight_med: Color::new(Rgb(68, 65, 90), Hsl::new(247, 16, 30)),
    highlight_high: Color::new(Rgb(86, 82, 110), Hsl::new(249, 15, 38)),
};

static DAWN_PALETTE: Palette = Palette {
    base: Color::new(Rgb(250, 244, 237), Hsl::new(32, 57, 95)),
    surface: Color::new(Rgb(255, 250, 243), Hsl::new(35, 100, 98)),
    overlay: Color::new(Rgb(242, 233, 225), Hsl::new(25, 36, 92)),
    muted: Color::new(Rgb(152, 147, 165), Hsl::new(254, 9, 61)),
    subtle: Color::new(Rgb(121, 117, 147), Hsl::new(249, 13, 52)),
    text: Color::new(Rgb(87, 82, 121), Hsl::new(248, 19, 40)),
    love: Color::new(Rgb(180, 99, 122), Hsl::new(343, 35, 55)).on(Role::Surface),
    gold: Color::new(Rgb(234, 157, 52), Hsl::new(35, 81, 56)).on(Role::Surface),
    rose: Color::new(Rgb(215, 130, 126), Hsl::new(2, 55, 67)).on(Role::Surface),
    pine: Color::new(Rgb(40, 105, 131), Hsl::new(197, 53, 34)).on(Role::Surface),
    foam: Color::new(Rgb(86, 148, 159), Hsl::new(189, 30, 48)).on(Role::Surface),
    iris: Color::new(Rgb(144, 122, 169), Hsl::new(267, 22, 57)).on(Role::Surface),
    highlight_low: Color::new(Rgb(244, 237, 232), Hsl::new(25, 35, 93)),
    highlight_med: Color::new(Rgb(223, 218, 217), Hsl::new(10, 9, 86)),
    highlight_high: Color::new(Rgb(206, 202, 205), Hsl::new(315, 4, 80)),
};
