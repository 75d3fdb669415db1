use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, PaletteView};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    match state.mode() {
        AppMode::Normal => vec![
            FooterGroup {
                name: "SEARCH",
                items: vec![FooterItem {
                    key: "Ctrl+K",
                    desc: "search",
                    highlighted: true,
                }],
            },
            FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem::new("j/k", "scroll"),
                    FooterItem::new("1-4", "section"),
                    FooterItem::new("g/G", "top/end"),
                ],
            },
            FooterGroup {
                name: "UI",
                items: vec![FooterItem::new("t", "theme"), FooterItem::new("q", "quit")],
            },
        ],
        AppMode::Palette => {
            let mut items = vec![
                FooterItem::new("↑/↓", "select"),
                FooterItem::new("Enter", "go"),
                FooterItem::new("Esc", "close"),
            ];
            if state.palette.view() == PaletteView::EmptyQuery {
                items.push(FooterItem::new("Alt+1-9", "quick action"));
            }
            vec![FooterGroup {
                name: "PALETTE",
                items,
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::KeyConfig;
    use crate::app::navigation::ActionNavigator;
    use crate::app::state::{ErrorSeverity, ErrorState, ThemeState};
    use crate::domain::catalog::Catalog;
    use crate::infrastructure::catalog_file::CatalogSource;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn state() -> AppState<'static> {
        let (tx, _rx) = mpsc::channel(1);
        AppState::new(
            Arc::new(Catalog::default()),
            CatalogSource::BuiltIn,
            ActionNavigator::new(tx),
            &KeyConfig::default(),
            ThemeState::default(),
        )
    }

    fn keys(groups: &[FooterGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.key))
            .collect()
    }

    #[test]
    fn test_hints_follow_mode() {
        let mut s = state();
        assert!(keys(&get_groups(&s)).contains(&"Ctrl+K"));

        s.palette.open();
        let palette_keys = keys(&get_groups(&s));
        assert!(palette_keys.contains(&"Esc"));
        assert!(palette_keys.contains(&"Alt+1-9"));

        s.palette.set_query_text("zzz");
        assert!(!keys(&get_groups(&s)).contains(&"Alt+1-9"));
    }

    #[test]
    fn test_error_replaces_hints() {
        let mut s = state();
        s.last_error = Some(ErrorState::new("bad catalog", ErrorSeverity::Warning));
        assert_eq!(keys(&get_groups(&s)), vec!["Esc"]);
    }
}
