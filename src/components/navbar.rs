use crate::domain::models::Section;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEARCH_HINT: &str = " Ctrl+K search ";

fn logo_text() -> String {
    format!(" {} FOLIO ", glyphs::LOGO)
}

fn tab_text(index: usize, section: Section) -> String {
    format!(" {} {} ", index + 1, section.label())
}

/// Hit boxes of the section tabs, in the order they are drawn.
#[must_use]
pub fn tab_areas(area: Rect) -> Vec<(Section, Rect)> {
    let mut x = area.x as usize
        + Span::raw(logo_text()).width()
        + Span::raw(glyphs::SEP_RIGHT).width()
        + 1;
    let right = area.right() as usize;

    let mut areas = Vec::new();
    for (i, &section) in Section::all().iter().enumerate() {
        if x >= right || area.height == 0 {
            break;
        }
        let width = Span::raw(tab_text(i, section)).width().min(right - x);
        areas.push((section, Rect::new(x as u16, area.y, width as u16, 1)));
        x += width + 1;
    }
    areas
}

pub struct Navbar<'a> {
    pub theme: &'a Theme,
    pub active: Section,
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(logo_text(), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(base_bg)),
            Span::raw(" "),
        ];
        for (i, &section) in Section::all().iter().enumerate() {
            let style = if section == self.active {
                self.theme.header_active
            } else {
                self.theme.header_item
            };
            spans.push(Span::styled(tab_text(i, section), style));
            spans.push(Span::raw(" "));
        }

        let used: usize = spans.iter().map(Span::width).sum();
        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);

        let hint_width = SEARCH_HINT.len();
        if area.height > 0 && used + hint_width < area.width as usize {
            let x = area.right() - hint_width as u16;
            buf.set_string(x, area.y, SEARCH_HINT, self.theme.footer_segment_key);
        }
    }
}
