//! Lift phases and the palette colors that mark them.

use super::color::Color;
use super::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiftPhase {
    Eccentric,
    Bottom,
    Concentric,
    Pause,
    Rest,
}

impl LiftPhase {
    pub const ALL: [LiftPhase; 5] = [
        LiftPhase::Eccentric,
        LiftPhase::Bottom,
        LiftPhase::Concentric,
        LiftPhase::Pause,
        LiftPhase::Rest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LiftPhase::Eccentric => "Eccentric",
            LiftPhase::Bottom => "Bottom",
            LiftPhase::Concentric => "Concentric",
            LiftPhase::Pause => "Pause",
            LiftPhase::Rest => "Rest",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            LiftPhase::Eccentric => palette::POWERLIFTING_RED,
            LiftPhase::Bottom => palette::POWERLIFTING_YELLOW,
            LiftPhase::Concentric => palette::POWERLIFTING_GREEN,
            LiftPhase::Pause => palette::POWERLIFTING_ORANGE,
            LiftPhase::Rest => palette::POWERLIFTING_BLUE,
        }
    }

    /// Light background tint. The bottom position has none and uses its accent.
    pub fn tint(self) -> Option<Color> {
        match self {
            LiftPhase::Eccentric => Some(palette::ECCENTRIC_LIGHT),
            LiftPhase::Bottom => None,
            LiftPhase::Concentric => Some(palette::CONCENTRIC_LIGHT),
            LiftPhase::Pause => Some(palette::PAUSE_LIGHT),
            LiftPhase::Rest => Some(palette::REST_LIGHT),
        }
    }
}
