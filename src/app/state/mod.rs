use super::command_palette::PaletteController;
use super::keymap::{KeyConfig, KeyMap};
use super::navigation::ActionNavigator;
use crate::domain::catalog::Catalog;
use crate::infrastructure::catalog_file::CatalogSource;
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::Instant;

pub mod command_palette;
pub mod error;
pub mod input;
pub mod page;
pub mod theme;

// Re-exports
pub use command_palette::{PaletteView, QueryState, SelectionDirection};
pub use error::{ErrorSeverity, ErrorState};
pub use input::QueryInput;
pub use page::{PageLine, PageState};
pub use theme::ThemeState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,  // Reading the page
    Palette, // Command palette open
}

#[derive(Debug)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Jumped to #about"
    pub status_clear_time: Option<Instant>,

    // --- Content ---
    pub catalog: Arc<Catalog>,
    pub catalog_source: CatalogSource,
    pub page: PageState,

    // --- Command Palette ---
    pub palette: PaletteController<ActionNavigator>,
    pub palette_input: QueryInput<'a>,
    pub palette_list: ListState, // Results scroll offset, updated on render

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: ThemeState,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        catalog_source: CatalogSource,
        navigator: ActionNavigator,
        keys: &KeyConfig,
        theme: ThemeState,
    ) -> Self {
        Self {
            should_quit: false,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            page: PageState::new(&catalog),
            palette: PaletteController::new(catalog.clone(), navigator),
            palette_input: QueryInput::default(),
            palette_list: ListState::default(),
            catalog,
            catalog_source,
            keymap: Arc::new(KeyMap::from_config(keys)),
            theme,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> AppMode {
        if self.palette.is_open() {
            AppMode::Palette
        } else {
            AppMode::Normal
        }
    }

    /// Installs a rebuilt catalog everywhere it is read.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.page.relayout(&catalog);
        self.palette.replace_catalog(catalog.clone());
        self.catalog = catalog;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now());
    }
}
