use crate::app::{
    action::Action,
    state::{AppMode, AppState, PaletteView},
};
use crate::components::modals::command_palette::{palette_areas, QUICK_ACTIONS_HEADER_ROWS};
use crate::components::navbar::tab_areas;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

const MOUSE_SCROLL: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
    }

    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match app_state.mode() {
        AppMode::Palette => match event {
            Event::Key(key) => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                let alt = key.modifiers.contains(KeyModifiers::ALT);
                match key.code {
                    // An error modal drawn over the palette goes first.
                    KeyCode::Esc if app_state.last_error.is_some() => Some(Action::DismissError),
                    KeyCode::Esc => Some(Action::ClosePalette),
                    KeyCode::Enter => Some(Action::PaletteConfirm),
                    KeyCode::Down => Some(Action::PaletteNext),
                    KeyCode::Up => Some(Action::PalettePrev),
                    KeyCode::Char('n') if ctrl => Some(Action::PaletteNext),
                    KeyCode::Char('p') if ctrl => Some(Action::PalettePrev),
                    KeyCode::Char(c @ '1'..='9') if alt => {
                        Some(Action::PaletteQuickAction(c as usize - '1' as usize))
                    }
                    _ => Some(Action::PaletteInput(key)),
                }
            }
            Event::Mouse(mouse) => {
                let areas = palette_areas(area);
                let pos = Position::new(mouse.column, mouse.row);
                let row = palette_row(areas.results, pos);

                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if !areas.modal.contains(pos) {
                            return Some(Action::ClosePalette);
                        }
                        let row = row?;
                        match app_state.palette.view() {
                            PaletteView::HasResults => Some(Action::PaletteConfirmAt(
                                row + app_state.palette_list.offset(),
                            )),
                            PaletteView::EmptyQuery => row
                                .checked_sub(QUICK_ACTIONS_HEADER_ROWS)
                                .map(Action::PaletteQuickAction),
                            _ => None,
                        }
                    }
                    MouseEventKind::Moved => match app_state.palette.view() {
                        PaletteView::HasResults => row
                            .map(|row| Action::PaletteHover(row + app_state.palette_list.offset())),
                        _ => None,
                    },
                    MouseEventKind::ScrollDown => Some(Action::PaletteNext),
                    MouseEventKind::ScrollUp => Some(Action::PalettePrev),
                    _ => None,
                }
            }
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(MOUSE_SCROLL)),
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(MOUSE_SCROLL)),
                MouseEventKind::Down(MouseButton::Left) => {
                    let pos = Position::new(mouse.column, mouse.row);
                    let navbar = Rect::new(0, 0, area.width, area.height.min(1));
                    tab_areas(navbar)
                        .into_iter()
                        .find(|(_, rect)| rect.contains(pos))
                        .map(|(section, _)| Action::JumpToSection(section))
                }
                _ => None,
            },
            _ => None,
        },
    }
}

/// Row within the palette's results list, if `pos` lies inside it.
fn palette_row(results: Rect, pos: Position) -> Option<usize> {
    if results.contains(pos) {
        Some((pos.y - results.y) as usize)
    } else {
        None
    }
}
