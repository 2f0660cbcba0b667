mod home;
mod palette;
mod phases;
mod scheme;

pub use home::HomeScreen;
pub use palette::PaletteScreen;
pub use phases::PhasesScreen;
pub use scheme::SchemeScreen;
