use crate::domain::catalog::Catalog;
use crate::domain::models::{Anchor, Section};

/// One rendered row of the page. Items are referenced by catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLine {
    Heading(Section),
    Rule(Section),
    ItemTitle(usize),
    ItemDescription(usize),
    ItemKeywords(usize),
    Placeholder,
    Blank,
}

/// Lays out every section in page order: heading, rule, then each item's
/// title, description and keywords.
#[must_use]
pub fn build_page_lines(catalog: &Catalog) -> Vec<PageLine> {
    let mut lines = Vec::new();
    for &section in Section::all() {
        lines.push(PageLine::Heading(section));
        lines.push(PageLine::Rule(section));

        let mut any = false;
        for (pos, item) in catalog.items().iter().enumerate() {
            if item.section != section {
                continue;
            }
            any = true;
            lines.push(PageLine::ItemTitle(pos));
            lines.push(PageLine::ItemDescription(pos));
            if !item.keywords.is_empty() {
                lines.push(PageLine::ItemKeywords(pos));
            }
            lines.push(PageLine::Blank);
        }

        if !any {
            lines.push(PageLine::Placeholder);
            lines.push(PageLine::Blank);
        }
        lines.push(PageLine::Blank);
    }
    lines
}

/// Scroll position plus the line each anchor resolves to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub lines: Vec<PageLine>,
    pub anchors: Vec<(Anchor, usize)>,
    pub scroll: usize,
}

impl PageState {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut page = Self::default();
        page.relayout(catalog);
        page
    }

    /// Rebuilds lines and anchors for a new catalog, keeping the scroll in range.
    pub fn relayout(&mut self, catalog: &Catalog) {
        self.lines = build_page_lines(catalog);
        self.anchors = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(line, kind)| match kind {
                PageLine::Heading(section) => Some((section.anchor(), line)),
                PageLine::ItemTitle(pos) => catalog
                    .items()
                    .get(*pos)
                    .map(|item| (Anchor::new(&item.id), line)),
                _ => None,
            })
            .collect();
        self.scroll = self.scroll.min(self.max_scroll());
    }

    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    #[must_use]
    pub fn anchor_line(&self, anchor: &Anchor) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(a, _)| a == anchor)
            .map(|(_, line)| *line)
    }

    /// Scrolls so `anchor` is the top line. Returns false for an unknown anchor.
    pub fn scroll_to_anchor(&mut self, anchor: &Anchor) -> bool {
        match self.anchor_line(anchor) {
            Some(line) => {
                self.scroll = line.min(self.max_scroll());
                true
            }
            None => false,
        }
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self
            .scroll
            .saturating_add(amount as usize)
            .min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount as usize);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// The last section whose heading is at or above the top of the viewport.
    #[must_use]
    pub fn active_section(&self) -> Section {
        self.lines
            .iter()
            .take(self.scroll + 1)
            .filter_map(|line| match line {
                PageLine::Heading(section) => Some(*section),
                _ => None,
            })
            .last()
            .unwrap_or(Section::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{QuickAction, SearchItem};

    fn catalog() -> Catalog {
        let item = |id: &str, section: Section, keywords: Vec<String>| SearchItem {
            id: id.to_string(),
            title: id.to_string(),
            description: "desc".to_string(),
            keywords,
            section,
            href: section.anchor(),
        };
        Catalog::new(
            vec![
                item("home-intro", Section::Home, vec!["hello".to_string()]),
                item("about-skills", Section::About, vec![]),
                item("contact-email", Section::Contact, vec!["mail".to_string()]),
            ],
            QuickAction::defaults(),
        )
        .unwrap()
    }

    #[test]
    fn test_layout_has_every_section_in_order() {
        let page = PageState::new(&catalog());
        let headings: Vec<_> = page
            .lines
            .iter()
            .filter_map(|l| match l {
                PageLine::Heading(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(headings, Section::all().to_vec());
        // Work has no items
        assert!(page.lines.contains(&PageLine::Placeholder));
    }

    #[test]
    fn test_scroll_to_section_and_item_anchors() {
        let mut page = PageState::new(&catalog());
        assert!(page.scroll_to_anchor(&Anchor::new("about")));
        assert_eq!(page.lines[page.scroll], PageLine::Heading(Section::About));
        assert_eq!(page.active_section(), Section::About);

        assert!(page.scroll_to_anchor(&Anchor::new("contact-email")));
        assert_eq!(page.lines[page.scroll], PageLine::ItemTitle(2));
        assert_eq!(page.active_section(), Section::Contact);
    }

    #[test]
    fn test_unknown_anchor_is_ignored() {
        let mut page = PageState::new(&catalog());
        page.scroll_down(3);
        assert!(!page.scroll_to_anchor(&Anchor::new("missing")));
        assert_eq!(page.scroll, 3);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut page = PageState::new(&catalog());
        page.scroll_up(5);
        assert_eq!(page.scroll, 0);
        page.scroll_down(u16::MAX);
        assert_eq!(page.scroll, page.max_scroll());
        page.relayout(&Catalog::default());
        assert!(page.scroll <= page.max_scroll());
    }
}
