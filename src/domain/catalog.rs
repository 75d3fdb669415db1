use super::models::{QuickAction, SearchItem};
use super::search::SearchIndex;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate catalog id `{0}`")]
    DuplicateId(String),
    #[error("catalog item has an empty id (title: {title:?})")]
    EmptyId { title: String },
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Searchable items plus the shortcuts shown for an empty query.
///
/// Immutable once built; content changes mean building a new `Catalog`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    index: SearchIndex,
    quick_actions: Vec<QuickAction>,
}

impl Catalog {
    pub fn new(
        items: Vec<SearchItem>,
        quick_actions: Vec<QuickAction>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            index: SearchIndex::new(items)?,
            quick_actions,
        })
    }

    #[must_use]
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    #[must_use]
    pub fn items(&self) -> &[SearchItem] {
        self.index.items()
    }

    #[must_use]
    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            index: SearchIndex::from_items(Vec::new()),
            quick_actions: QuickAction::defaults(),
        }
    }
}
