use crate::app::command_palette::PaletteController;
use crate::app::state::PaletteView;
use crate::domain::navigation::Navigator;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget,
    },
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Rows above the first quick action in the empty-query view.
pub const QUICK_ACTIONS_HEADER_ROWS: usize = 1;

/// Screen regions of the palette, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteAreas {
    pub modal: Rect,
    pub query: Rect,
    pub separator: Rect,
    pub results: Rect,
    pub hints: Rect,
}

#[must_use]
pub fn palette_areas(area: Rect) -> PaletteAreas {
    let modal = centered_rect(60, 50, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    PaletteAreas {
        modal,
        query: layout[0],
        separator: layout[1],
        results: layout[2],
        hints: layout[3],
    }
}

pub struct CommandPaletteModal<'a, N> {
    pub theme: &'a Theme,
    pub palette: &'a PaletteController<N>,
    pub cursor_column: usize,
}

/// The list state carries the results' scroll offset between frames, so the
/// highlight stays visible and mouse rows map back to result indices.
impl<N: Navigator> StatefulWidget for CommandPaletteModal<'_, N> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        let areas = palette_areas(area);
        if areas.modal.width == 0 || areas.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, areas.modal, area);
        Clear.render(areas.modal, buf);

        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SEARCH PORTFOLIO ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .render(areas.modal, buf);

        self.render_query(areas.query, buf);

        if areas.separator.height > 0 {
            let separator = "─".repeat(areas.separator.width as usize);
            buf.set_string(
                areas.separator.x,
                areas.separator.y,
                separator,
                self.theme.border_focus,
            );
        }

        match self.palette.view() {
            PaletteView::EmptyQuery => self.render_quick_actions(areas.results, buf),
            PaletteView::HasResults => self.render_results(areas.results, buf, list_state),
            PaletteView::NoResults => self.render_no_results(areas.results, buf),
            PaletteView::Closed => {}
        }

        let hints = Line::from(vec![
            Span::styled(" ↑↓ ", self.theme.footer_segment_key),
            Span::styled(" navigate ", self.theme.dimmed),
            Span::styled(" ↵ ", self.theme.footer_segment_key),
            Span::styled(" select ", self.theme.dimmed),
            Span::styled(" Esc ", self.theme.footer_segment_key),
            Span::styled(" close ", self.theme.dimmed),
        ]);
        buf.set_line(areas.hints.x, areas.hints.y, &hints, areas.hints.width);
    }
}

impl<N: Navigator> CommandPaletteModal<'_, N> {
    fn render_query(&self, area: Rect, buf: &mut Buffer) {
        let text = self.palette.query_text();
        let line = if text.is_empty() {
            Line::from(vec![
                Span::styled(format!(" {} ", glyphs::SEARCH), self.theme.footer_segment_key),
                Span::raw(" "),
                Span::styled(glyphs::CURSOR, self.theme.list_item.add_modifier(Modifier::SLOW_BLINK)),
                Span::styled(
                    "Search anything... (e.g., Education, Skills, Projects)",
                    self.theme.dimmed,
                ),
            ])
        } else {
            let split = text
                .char_indices()
                .nth(self.cursor_column)
                .map_or(text.len(), |(i, _)| i);
            let (before, after) = text.split_at(split);
            Line::from(vec![
                Span::styled(format!(" {} ", glyphs::SEARCH), self.theme.footer_segment_key),
                Span::raw(" "),
                Span::styled(before, self.theme.list_item),
                Span::styled(glyphs::CURSOR, self.theme.list_item.add_modifier(Modifier::SLOW_BLINK)),
                Span::styled(after, self.theme.list_item),
            ])
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_quick_actions(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let header = Line::from(Span::styled(" Quick Actions", self.theme.dimmed));
        buf.set_line(area.x, area.y, &header, area.width);

        let list_area = Rect {
            y: area.y + QUICK_ACTIONS_HEADER_ROWS as u16,
            height: area.height.saturating_sub(QUICK_ACTIONS_HEADER_ROWS as u16),
            ..area
        };
        let items: Vec<ListItem> = self
            .palette
            .quick_actions()
            .iter()
            .enumerate()
            .map(|(i, action)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  Alt+{} ", i + 1), self.theme.dimmed),
                    Span::styled(
                        format!(" {} ", action.section.label()),
                        self.theme.section(action.section),
                    ),
                    Span::raw(" "),
                    Span::styled(action.label.as_str(), self.theme.list_item),
                ]))
            })
            .collect();
        Widget::render(List::new(items), list_area, buf);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        let selected = self.palette.selected_index();
        let title_width = (area.width as usize / 3).max(12);

        let items: Vec<ListItem> = self
            .palette
            .results()
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = i == selected;
                let style = if is_selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let arrow = if is_selected {
                    format!(" {} ", glyphs::ARROW)
                } else {
                    "   ".to_string()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(arrow, style),
                    Span::styled(
                        format!(" {:<7}", item.section.as_str()),
                        self.theme.section(item.section),
                    ),
                    Span::raw(" "),
                    Span::styled(format!("{:<title_width$}", item.title), style),
                    Span::styled(
                        format!(" {}", item.description),
                        self.theme.list_item.add_modifier(Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        list_state.select(Some(selected));
        StatefulWidget::render(List::new(items), area, buf, list_state);
    }

    fn render_no_results(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No results found for \u{201c}{}\u{201d}", self.palette.query_text()),
                self.theme.list_item.add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                "Try searching for Education, Skills, Projects, Contact...",
                self.theme.dimmed,
            )),
        ];
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::models::{QuickAction, SearchItem, Section};
    use crate::app::state::SelectionDirection;
    use crate::domain::navigation::MockNavigator;
    use std::sync::Arc;

    fn palette() -> PaletteController<MockNavigator> {
        let catalog = Catalog::new(
            vec![SearchItem {
                id: "about-education".to_string(),
                title: "Education".to_string(),
                description: "My educational background".to_string(),
                keywords: vec!["school".to_string()],
                section: Section::About,
                href: Section::About.anchor(),
            }],
            QuickAction::defaults(),
        )
        .unwrap();
        PaletteController::new(Arc::new(catalog), MockNavigator::new())
    }

    fn render(palette: &PaletteController<MockNavigator>) -> String {
        render_sized(palette, Rect::new(0, 0, 100, 30), &mut ListState::default())
    }

    fn render_sized(
        palette: &PaletteController<MockNavigator>,
        area: Rect,
        list_state: &mut ListState,
    ) -> String {
        let mut buf = Buffer::empty(area);
        CommandPaletteModal {
            theme: &Theme::default(),
            palette,
            cursor_column: palette.query_text().chars().count(),
        }
        .render(area, &mut buf, list_state);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_query_shows_quick_actions() {
        let mut p = palette();
        p.open();
        let screen = render(&p);
        assert!(screen.contains("Quick Actions"));
        assert!(screen.contains("View Projects"));
    }

    #[test]
    fn test_results_and_no_results_views() {
        let mut p = palette();
        p.open();
        p.set_query_text("edu");
        let screen = render(&p);
        assert!(screen.contains("Education"));
        assert!(!screen.contains("Quick Actions"));

        p.set_query_text("xyz");
        assert!(render(&p).contains("No results found"));
    }

    #[test]
    fn test_long_result_list_follows_selection() {
        let items = (0..20)
            .map(|i| SearchItem {
                id: format!("work-{i}"),
                title: format!("Project {i:02}"),
                description: "Side project".to_string(),
                keywords: vec![],
                section: Section::Work,
                href: Section::Work.anchor(),
            })
            .collect();
        let catalog = Catalog::new(items, QuickAction::defaults()).unwrap();
        let mut p = PaletteController::new(Arc::new(catalog), MockNavigator::new());
        p.open();
        p.set_query_text("project");

        let area = Rect::new(0, 0, 80, 24);
        let visible = palette_areas(area).results.height as usize;
        assert!(visible < 20);

        let mut list_state = ListState::default();
        for _ in 0..19 {
            p.move_selection(SelectionDirection::Next);
            render_sized(&p, area, &mut list_state);
        }
        let screen = render_sized(&p, area, &mut list_state);
        assert!(screen.contains("Project 19"));
        assert!(!screen.contains("Project 00"));
        assert_eq!(list_state.offset(), 20 - visible);

        // Moving back inside the window keeps the offset.
        p.move_selection(SelectionDirection::Previous);
        render_sized(&p, area, &mut list_state);
        assert_eq!(list_state.offset(), 20 - visible);

        // A new query starts from the top again.
        p.set_query_text("project 0");
        let screen = render_sized(&p, area, &mut list_state);
        assert_eq!(list_state.offset(), 0);
        assert!(screen.contains("Project 00"));
    }

    #[test]
    fn test_areas_nest_inside_modal() {
        let areas = palette_areas(Rect::new(0, 0, 120, 40));
        assert!(areas.results.height > 3);
        assert_eq!(areas.modal.intersection(areas.results), areas.results);
        assert_eq!(areas.hints.y, areas.results.y + areas.results.height);
    }
}
