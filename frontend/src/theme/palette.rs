//! Powerlifting brand palette.
//!
//! Thirteen fixed colors in four groups: brand accents (one per action/state),
//! neutrals, and light tints used behind lift-phase indicators.

use super::color::Color;

// --- Brand ---
pub const POWERLIFTING_RED: Color = Color::from_argb(0xFFE5_3E3E); // primary action / active
pub const POWERLIFTING_ORANGE: Color = Color::from_argb(0xFFFF_8C00); // warning / pause
pub const POWERLIFTING_GREEN: Color = Color::from_argb(0xFF38_A169); // success / concentric
pub const POWERLIFTING_BLUE: Color = Color::from_argb(0xFF31_82CE); // info / tempo
pub const POWERLIFTING_YELLOW: Color = Color::from_argb(0xFFD6_9E2E); // warning / bottom phase

// --- Neutral ---
pub const POWERLIFTING_BLACK: Color = Color::from_argb(0xFF1A_1A1A);
pub const POWERLIFTING_DARK_GRAY: Color = Color::from_argb(0xFF2D_3748);
pub const POWERLIFTING_LIGHT_GRAY: Color = Color::from_argb(0xFF4A_5568);
pub const POWERLIFTING_WHITE: Color = Color::from_argb(0xFFFA_FAFA);

// --- Phase tints ---
pub const ECCENTRIC_LIGHT: Color = Color::from_argb(0xFFFE_D7D7);
pub const CONCENTRIC_LIGHT: Color = Color::from_argb(0xFFC6_F6D5);
pub const PAUSE_LIGHT: Color = Color::from_argb(0xFFFE_EBC8);
pub const REST_LIGHT: Color = Color::from_argb(0xFFBE_E3F8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteGroup {
    Brand,
    Neutral,
    Phase,
}

impl PaletteGroup {
    pub const ALL: [PaletteGroup; 3] = [PaletteGroup::Brand, PaletteGroup::Neutral, PaletteGroup::Phase];

    pub fn label(self) -> &'static str {
        match self {
            PaletteGroup::Brand => "Brand",
            PaletteGroup::Neutral => "Neutral",
            PaletteGroup::Phase => "Phase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub group: PaletteGroup,
    pub color: Color,
}

const fn entry(name: &'static str, group: PaletteGroup, color: Color) -> PaletteEntry {
    PaletteEntry { name, group, color }
}

/// Every palette color by role name.
pub const ENTRIES: [PaletteEntry; 13] = [
    entry("PowerliftingRed", PaletteGroup::Brand, POWERLIFTING_RED),
    entry("PowerliftingOrange", PaletteGroup::Brand, POWERLIFTING_ORANGE),
    entry("PowerliftingGreen", PaletteGroup::Brand, POWERLIFTING_GREEN),
    entry("PowerliftingBlue", PaletteGroup::Brand, POWERLIFTING_BLUE),
    entry("PowerliftingYellow", PaletteGroup::Brand, POWERLIFTING_YELLOW),
    entry("PowerliftingBlack", PaletteGroup::Neutral, POWERLIFTING_BLACK),
    entry("PowerliftingDarkGray", PaletteGroup::Neutral, POWERLIFTING_DARK_GRAY),
    entry("PowerliftingLightGray", PaletteGroup::Neutral, POWERLIFTING_LIGHT_GRAY),
    entry("PowerliftingWhite", PaletteGroup::Neutral, POWERLIFTING_WHITE),
    entry("EccentricLight", PaletteGroup::Phase, ECCENTRIC_LIGHT),
    entry("ConcentricLight", PaletteGroup::Phase, CONCENTRIC_LIGHT),
    entry("PauseLight", PaletteGroup::Phase, PAUSE_LIGHT),
    entry("RestLight", PaletteGroup::Phase, REST_LIGHT),
];

pub fn by_name(name: &str) -> Option<Color> {
    ENTRIES.iter().find(|e| e.name == name).map(|e| e.color)
}

pub fn group(group: PaletteGroup) -> impl Iterator<Item = &'static PaletteEntry> {
    ENTRIES.iter().filter(move |e| e.group == group)
}
