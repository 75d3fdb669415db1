use crate::domain::catalog::Catalog;
use crate::domain::models::{Anchor, Section};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Page Navigation ---
    ScrollDown(u16),
    ScrollUp(u16),
    ScrollTop,
    ScrollBottom,
    JumpToSection(Section), // Navbar tab or 1-4
    ScrollToAnchor(Anchor), // Posted by the palette's navigator

    // --- Command Palette ---
    OpenPalette,                              // Ctrl+K or /
    ClosePalette,                             // Esc or click outside
    PaletteInput(crossterm::event::KeyEvent), // Edit the query text
    PaletteNext,                              // Down
    PalettePrev,                              // Up
    PaletteConfirm,                           // Enter
    PaletteHover(usize),                      // Mouse over a result row
    PaletteConfirmAt(usize),                  // Click on a result row
    PaletteQuickAction(usize),                // Alt+1..9 or click in the empty view

    // --- UI ---
    CycleTheme,
    SwitchTheme(crate::theme::PaletteType),
    DismissError,

    // --- Catalog Reload ---
    CatalogChanged,                              // Watcher saw the file change
    CatalogLoaded(Result<Arc<Catalog>, String>), // Reload finished
}
