use crate::app::state::{PageLine, PageState};
use crate::domain::catalog::Catalog;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The scrolling portfolio page, drawn from the top of the scroll offset.
pub struct PageView<'a> {
    pub page: &'a PageState,
    pub catalog: &'a Catalog,
    pub theme: &'a Theme,
}

impl PageView<'_> {
    fn line(&self, kind: PageLine, width: u16) -> Line<'_> {
        let item = |pos: usize| self.catalog.items().get(pos);
        match kind {
            PageLine::Heading(section) => Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", section.label().to_uppercase()),
                    self.theme.section(section),
                ),
                Span::styled(format!("  {}", section.anchor()), self.theme.dimmed),
            ]),
            PageLine::Rule(section) => Line::from(Span::styled(
                format!("  {}", "─".repeat(width.saturating_sub(4) as usize)),
                self.theme
                    .section(section)
                    .bg(self.theme.page.bg.unwrap_or_default()),
            )),
            PageLine::ItemTitle(pos) => match item(pos) {
                Some(item) => Line::from(vec![
                    Span::raw("    "),
                    Span::styled(item.title.as_str(), self.theme.page_title),
                ]),
                None => Line::default(),
            },
            PageLine::ItemDescription(pos) => match item(pos) {
                Some(item) => Line::from(vec![
                    Span::raw("    "),
                    Span::styled(item.description.as_str(), self.theme.page_text),
                ]),
                None => Line::default(),
            },
            PageLine::ItemKeywords(pos) => match item(pos) {
                Some(item) => Line::from(vec![
                    Span::raw("    "),
                    Span::styled(item.keywords.join(" · "), self.theme.keyword),
                ]),
                None => Line::default(),
            },
            PageLine::Placeholder => Line::from(Span::styled(
                "    Nothing here yet.",
                self.theme.placeholder,
            )),
            PageLine::Blank => Line::default(),
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(self.theme.border)
            .style(self.theme.page);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .page
            .lines
            .iter()
            .skip(self.page.scroll)
            .take(inner.height as usize)
            .map(|kind| self.line(*kind, inner.width))
            .collect();

        Paragraph::new(lines)
            .style(self.theme.page)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Anchor, QuickAction, SearchItem, Section};

    #[test]
    fn test_renders_from_scroll_offset() {
        let catalog = Catalog::new(
            vec![SearchItem {
                id: "work-projects".to_string(),
                title: "Featured Projects".to_string(),
                description: "Things I built".to_string(),
                keywords: vec!["portfolio".to_string()],
                section: Section::Work,
                href: Section::Work.anchor(),
            }],
            QuickAction::defaults(),
        )
        .unwrap();
        let mut page = PageState::new(&catalog);
        page.scroll_to_anchor(&Anchor::new("work"));

        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        PageView {
            page: &page,
            catalog: &catalog,
            theme: &Theme::default(),
        }
        .render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).contains("WORK"));
        assert!(row(2).contains("Featured Projects"));
        assert!(row(4).contains("portfolio"));
    }
}
