use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::modals::{helpers::dim_area, CommandPaletteModal, ErrorModal};
use crate::components::navbar::Navbar;
use crate::components::page_view::PageView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme.theme;
    let layout = get_layout(area);

    // --- Navbar ---
    f.render_widget(
        Navbar {
            theme,
            active: app_state.page.active_section(),
        },
        layout.header,
    );

    // --- Page ---
    f.render_widget(
        PageView {
            page: &app_state.page,
            catalog: &app_state.catalog,
            theme,
        },
        layout.body,
    );

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Modals ---
    if app_state.palette.is_open() {
        dim_area(f.buffer_mut(), area);
        f.render_stateful_widget(
            CommandPaletteModal {
                theme,
                palette: &app_state.palette,
                cursor_column: app_state.palette_input.cursor_column(),
            },
            area,
            &mut app_state.palette_list,
        );
    }

    if let Some(err) = &app_state.last_error {
        f.render_widget(ErrorModal { theme, error: err }, area);
    }
}
