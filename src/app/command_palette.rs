use super::state::command_palette::{PaletteView, QueryState, SelectionDirection};
use crate::domain::catalog::Catalog;
use crate::domain::models::{QuickAction, SearchItem};
use crate::domain::navigation::Navigator;
use std::sync::Arc;

/// Open/closed state machine over a [`Catalog`].
///
/// Every call other than [`open`](Self::open) is ignored while closed, so key
/// events that race a close are harmless. Confirming a result hands it to the
/// [`Navigator`] exactly once and then closes.
#[derive(Debug)]
pub struct PaletteController<N> {
    catalog: Arc<Catalog>,
    navigator: N,
    is_open: bool,
    state: QueryState,
}

impl<N: Navigator> PaletteController<N> {
    pub fn new(catalog: Arc<Catalog>, navigator: N) -> Self {
        Self {
            catalog,
            navigator,
            is_open: false,
            state: QueryState::default(),
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.state = QueryState::default();
        tracing::debug!("palette opened");
    }

    pub fn close(&mut self) {
        if self.is_open {
            tracing::debug!("palette closed");
        }
        self.is_open = false;
        self.state = QueryState::default();
    }

    pub fn set_query_text(&mut self, text: &str) {
        if !self.is_open {
            return;
        }
        self.state.query_text = text.to_string();
        self.state.results = self.catalog.index().matching_positions(text);
        self.state.selected_index = 0;
        tracing::trace!(query = text, matches = self.state.results.len(), "palette query");
    }

    pub fn move_selection(&mut self, direction: SelectionDirection) {
        if !self.is_open || self.state.results.is_empty() {
            return;
        }
        let current = self.state.selected_index;
        let target = match direction {
            SelectionDirection::Next => current.saturating_add(1),
            SelectionDirection::Previous => current.saturating_sub(1),
        };
        self.state.clamp_selection(target);
    }

    /// Pointer hover over the result at `index`.
    pub fn hover(&mut self, index: usize) {
        if !self.is_open || self.state.results.is_empty() {
            return;
        }
        self.state.clamp_selection(index);
    }

    /// Navigates to the highlighted result and closes. Returns whether navigation happened.
    pub fn confirm_selection(&mut self) -> bool {
        self.confirm_at(self.state.selected_index)
    }

    /// Navigates to the result at `index` (a click) and closes.
    pub fn confirm_at(&mut self, index: usize) -> bool {
        if !self.is_open {
            return false;
        }
        let Some(&position) = self.state.results.get(index) else {
            return false;
        };
        let Some(item) = self.catalog.index().get(position) else {
            return false;
        };

        tracing::info!(id = %item.id, href = %item.href, "palette navigation");
        self.navigator.navigate(item);
        self.close();
        true
    }

    /// Follows the quick action at `index`; only offered while the query is empty.
    pub fn activate_quick_action(&mut self, index: usize) -> bool {
        if self.view() != PaletteView::EmptyQuery {
            return false;
        }
        let Some(action) = self.catalog.quick_actions().get(index) else {
            return false;
        };

        tracing::info!(label = %action.label, href = %action.href, "palette quick action");
        self.navigator.follow_quick_action(action);
        self.close();
        true
    }

    /// Swaps in a rebuilt catalog and re-runs the current query against it.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
        if self.is_open {
            let text = std::mem::take(&mut self.state.query_text);
            self.set_query_text(&text);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.state.query_text
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    #[must_use]
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    #[must_use]
    pub fn results(&self) -> Vec<&SearchItem> {
        self.state
            .results
            .iter()
            .filter_map(|&i| self.catalog.index().get(i))
            .collect()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&SearchItem> {
        self.state
            .results
            .get(self.state.selected_index)
            .and_then(|&i| self.catalog.index().get(i))
    }

    #[must_use]
    pub fn quick_actions(&self) -> &[QuickAction] {
        self.catalog.quick_actions()
    }

    #[must_use]
    pub fn view(&self) -> PaletteView {
        if !self.is_open {
            PaletteView::Closed
        } else if self.state.query_text.trim().is_empty() {
            PaletteView::EmptyQuery
        } else if self.state.results.is_empty() {
            PaletteView::NoResults
        } else {
            PaletteView::HasResults
        }
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
