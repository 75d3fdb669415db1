use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, ErrorSeverity, ErrorState, SelectionDirection},
};
use crate::infrastructure::catalog_file::CatalogSource;
use std::time::Duration;

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if let Some(since) = state.status_clear_time {
                if since.elapsed() >= STATUS_TTL {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Page Navigation ---
        Action::ScrollDown(amount) => state.page.scroll_down(amount),
        Action::ScrollUp(amount) => state.page.scroll_up(amount),
        Action::ScrollTop => state.page.scroll_to_top(),
        Action::ScrollBottom => state.page.scroll_to_bottom(),
        Action::JumpToSection(section) => {
            state.page.scroll_to_anchor(&section.anchor());
        }
        Action::ScrollToAnchor(anchor) => {
            if state.page.scroll_to_anchor(&anchor) {
                state.set_status(format!("Jumped to {anchor}"));
            } else {
                tracing::debug!(%anchor, "no destination for anchor");
            }
        }

        // --- Command Palette ---
        Action::OpenPalette => {
            state.palette_input.clear();
            state.palette.open();
        }
        Action::ClosePalette => {
            state.palette.close();
            state.palette_input.clear();
        }
        Action::PaletteInput(key) => {
            if state.mode() == AppMode::Palette && state.palette_input.input(key) {
                let text = state.palette_input.text();
                state.palette.set_query_text(&text);
            }
        }
        Action::PaletteNext => state.palette.move_selection(SelectionDirection::Next),
        Action::PalettePrev => state.palette.move_selection(SelectionDirection::Previous),
        Action::PaletteHover(index) => state.palette.hover(index),
        Action::PaletteConfirm => {
            if state.palette.confirm_selection() {
                state.palette_input.clear();
            }
        }
        Action::PaletteConfirmAt(index) => {
            if state.palette.confirm_at(index) {
                state.palette_input.clear();
            }
        }
        Action::PaletteQuickAction(index) => {
            if state.palette.activate_quick_action(index) {
                state.palette_input.clear();
            }
        }

        // --- UI ---
        Action::CycleTheme => {
            state.theme.cycle();
            state.set_status(format!("Theme: {}", state.theme.palette_type.label()));
        }
        Action::SwitchTheme(palette) => state.theme.switch(palette),
        Action::DismissError => {
            state.last_error = None;
        }

        // --- Catalog Reload ---
        Action::CatalogChanged => {
            if let CatalogSource::File(path) = &state.catalog_source {
                return Some(Command::ReloadCatalog(path.clone()));
            }
        }
        Action::CatalogLoaded(Ok(catalog)) => {
            let count = catalog.items().len();
            state.replace_catalog(catalog);
            state.last_error = None;
            state.set_status(format!("Catalog reloaded ({count} items)"));
            tracing::info!(items = count, "catalog reloaded");
        }
        Action::CatalogLoaded(Err(message)) => {
            tracing::warn!(error = %message, "catalog reload failed, keeping previous catalog");
            state.last_error = Some(ErrorState::new(message, ErrorSeverity::Warning));
        }
    }
    None
}
