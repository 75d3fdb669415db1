use serde::{Deserialize, Serialize};
use std::fmt;

/// A page destination such as `#about`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anchor(pub String);

impl Anchor {
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        if name.starts_with('#') {
            Self(name.to_string())
        } else {
            Self(format!("#{name}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Work,
    Contact,
}

impl Section {
    /// Page order, which is also navbar order.
    #[must_use]
    pub fn all() -> &'static [Section] {
        &[Section::Home, Section::About, Section::Work, Section::Contact]
    }

    /// Lower-case name, as it appears in catalog files and searchable text.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Work => "work",
            Section::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub section: Section,
    pub href: Anchor,
}

/// Shortcut offered by the palette while the query is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub section: Section,
    pub href: Anchor,
}

impl QuickAction {
    #[must_use]
    pub fn defaults() -> Vec<QuickAction> {
        vec![
            QuickAction {
                label: "Go to About".to_string(),
                section: Section::About,
                href: Section::About.anchor(),
            },
            QuickAction {
                label: "View Projects".to_string(),
                section: Section::Work,
                href: Section::Work.anchor(),
            },
            QuickAction {
                label: "Contact Me".to_string(),
                section: Section::Contact,
                href: Section::Contact.anchor(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_normalizes_hash() {
        assert_eq!(Anchor::new("about").as_str(), "#about");
        assert_eq!(Anchor::new("#about").as_str(), "#about");
        assert_eq!(Section::Work.anchor(), Anchor("#work".to_string()));
    }

    #[test]
    fn test_default_quick_actions_point_at_sections() {
        let actions = QuickAction::defaults();
        let hrefs: Vec<_> = actions.iter().map(|a| a.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#about", "#work", "#contact"]);
    }
}
