use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::models::{QuickAction, SearchItem};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The catalog compiled into the binary.
pub const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(default = "QuickAction::defaults")]
    quick_actions: Vec<QuickAction>,
}

/// Where the running catalog came from. Only files are reloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
}

impl CatalogSource {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            CatalogSource::BuiltIn => "built-in".to_string(),
            CatalogSource::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
        }
    }
}

pub fn parse_catalog(content: &str, path: &Path) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::new(file.items, file.quick_actions)
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&content, path)?;
    tracing::debug!(path = %path.display(), items = catalog.items().len(), "catalog loaded");
    Ok(catalog)
}

pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUILTIN_CATALOG, Path::new("<built-in>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Section;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.items().len(), 13);
        assert_eq!(catalog.quick_actions(), QuickAction::defaults().as_slice());

        let contact = catalog
            .items()
            .iter()
            .filter(|i| i.section == Section::Contact)
            .count();
        assert_eq!(contact, 4);
        assert!(catalog.items().iter().all(|i| i.href == i.section.anchor()));
    }

    #[test]
    fn test_builtin_catalog_answers_queries() {
        let catalog = builtin_catalog().unwrap();
        let ids = |q: &str| -> Vec<String> {
            catalog.index().query(q).iter().map(|i| i.id.clone()).collect()
        };
        assert_eq!(ids("university email"), Vec::<String>::new());
        assert_eq!(ids("edu"), vec!["about-education"]);
        assert_eq!(ids("  "), Vec::<String>::new());
    }

    #[test]
    fn test_load_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
[[items]]
id = "work-cli"
title = "CLI Tools"
description = "Small command line utilities"
section = "work"
href = "#work"
"##
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.items().len(), 1);
        assert!(catalog.items()[0].keywords.is_empty());
        assert_eq!(catalog.quick_actions().len(), 3);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_catalog(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, CatalogError::Read { .. }));

        let dup = r##"
[[items]]
id = "a"
title = "A"
description = ""
section = "home"
href = "#home"

[[items]]
id = "a"
title = "B"
description = ""
section = "home"
href = "#home"
"##;
        let err = parse_catalog(dup, Path::new("dup.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));

        let bad = parse_catalog("items = 3", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(bad, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_source_label() {
        assert_eq!(CatalogSource::BuiltIn.label(), "built-in");
        assert_eq!(
            CatalogSource::File(PathBuf::from("/srv/site/catalog.toml")).label(),
            "catalog.toml"
        );
    }
}
