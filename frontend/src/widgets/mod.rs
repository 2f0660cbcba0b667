mod phase_chip;
mod surface_card;
mod swatch;
mod themed_background;

pub use phase_chip::PhaseChip;
pub use surface_card::SurfaceCard;
pub use swatch::Swatch;
pub use themed_background::ThemedBackground;
