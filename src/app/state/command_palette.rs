/// The palette's query, matches and highlight. Reset to `Default` on open and close.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub query_text: String,
    pub results: Vec<usize>, // Catalog positions, in catalog order
    pub selected_index: usize,
}

impl QueryState {
    /// Highlight clamped into `[0, results.len())`, or 0 with no results.
    pub fn clamp_selection(&mut self, index: usize) {
        self.selected_index = index.min(self.results.len().saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Next,
    Previous,
}

/// What the palette body should show. Derived from `QueryState`, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteView {
    Closed,
    EmptyQuery,
    HasResults,
    NoResults,
}
