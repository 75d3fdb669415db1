pub mod command_palette;
pub mod error;
pub mod helpers;

pub use command_palette::{palette_areas, CommandPaletteModal, PaletteAreas};
pub use error::ErrorModal;
