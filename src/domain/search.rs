use super::catalog::CatalogError;
use super::models::SearchItem;
use std::collections::HashSet;

/// Lower-cased, whitespace-split query tokens. Empty for a blank query.
#[must_use]
pub fn tokenize(raw_query: &str) -> Vec<String> {
    raw_query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Title, description, keywords and section joined by single spaces, lower-cased.
#[must_use]
pub fn searchable_text(item: &SearchItem) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(item.keywords.len() + 3);
    parts.push(&item.title);
    parts.push(&item.description);
    parts.extend(item.keywords.iter().map(String::as_str));
    parts.push(item.section.as_str());
    parts.join(" ").to_lowercase()
}

fn matches_all(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

/// Filters `catalog` down to the items containing every query token, in catalog order.
#[must_use]
pub fn query<'a>(catalog: &'a [SearchItem], raw_query: &str) -> Vec<&'a SearchItem> {
    let tokens = tokenize(raw_query);
    if tokens.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|item| matches_all(&searchable_text(item), &tokens))
        .collect()
}

/// Immutable catalog with the searchable text of every item computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    haystacks: Vec<String>, // Parallel to `items`
}

impl SearchIndex {
    /// Builds the index, rejecting empty or repeated ids.
    pub fn new(items: Vec<SearchItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyId {
                    title: item.title.clone(),
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self::from_items(items))
    }

    pub(crate) fn from_items(items: Vec<SearchItem>) -> Self {
        let haystacks = items.iter().map(searchable_text).collect();
        Self { items, haystacks }
    }

    #[must_use]
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&SearchItem> {
        self.items.get(position)
    }

    /// Catalog positions of the matching items, ascending.
    #[must_use]
    pub fn matching_positions(&self, raw_query: &str) -> Vec<usize> {
        let tokens = tokenize(raw_query);
        if tokens.is_empty() {
            return Vec::new();
        }

        self.haystacks
            .iter()
            .enumerate()
            .filter(|(_, haystack)| matches_all(haystack, &tokens))
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn query(&self, raw_query: &str) -> Vec<&SearchItem> {
        self.matching_positions(raw_query)
            .into_iter()
            .map(|i| &self.items[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Anchor, Section};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn item(id: &str, title: &str, description: &str, keywords: &[&str], section: Section) -> SearchItem {
        SearchItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            section,
            href: section.anchor(),
        }
    }

    fn catalog() -> Vec<SearchItem> {
        vec![
            item(
                "about-education",
                "Education",
                "My educational background and qualifications",
                &["education", "school", "university"],
                Section::About,
            ),
            item(
                "contact-form",
                "Contact Form",
                "Get in touch with me through the contact form",
                &["contact", "form", "message"],
                Section::Contact,
            ),
            item(
                "contact-email",
                "Email",
                "Send me an email directly",
                &["email", "mail"],
                Section::Contact,
            ),
        ]
    }

    fn ids(items: &[&SearchItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let c = catalog();
        assert!(query(&c, "").is_empty());
        assert!(query(&c, "   ").is_empty());
        assert!(query(&c, "\t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  Hello   World\t"), vec!["hello", "world"]);
        assert!(tokenize(" ").is_empty());
    }

    #[test]
    fn test_searchable_text_order() {
        let c = catalog();
        assert_eq!(
            searchable_text(&c[2]),
            "email send me an email directly email mail contact"
        );
    }

    #[test]
    fn test_prefix_matches_single_item() {
        let c = catalog();
        assert_eq!(ids(&query(&c, "edu")), vec!["about-education"]);
    }

    #[test]
    fn test_tokens_are_anded() {
        let c = catalog();
        assert!(query(&c, "university email").is_empty());
        assert_eq!(ids(&query(&c, "contact email")), vec!["contact-email"]);
    }

    #[test]
    fn test_substring_crosses_word_boundaries() {
        let c = catalog();
        // "ckgr" sits inside "background".
        assert_eq!(ids(&query(&c, "ckgr")), vec!["about-education"]);
    }

    #[test]
    fn test_case_insensitive_and_section_searchable() {
        let c = catalog();
        assert_eq!(ids(&query(&c, "CONTACT")), vec!["contact-form", "contact-email"]);
        assert_eq!(ids(&query(&c, "about")), vec!["about-education"]);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let c = catalog();
        assert_eq!(
            ids(&query(&c, "e")),
            vec!["about-education", "contact-form", "contact-email"]
        );
    }

    #[test]
    fn test_index_agrees_with_free_function() {
        let c = catalog();
        let index = SearchIndex::from_items(c.clone());
        for q in ["", "edu", "mail", "contact form", "zzz", "e m"] {
            assert_eq!(ids(&index.query(q)), ids(&query(&c, q)), "query {q:?}");
        }
        assert_eq!(index.matching_positions("mail"), vec![2]);
    }

    #[test]
    fn test_href_is_not_searched() {
        let mut c = catalog();
        c[0].href = Anchor::new("zebra");
        assert!(query(&c, "zebra").is_empty());
    }

    fn random_text<R: Rng>(rng: &mut R, alphabet: &[u8], max_len: usize) -> String {
        let len = rng.gen_range(0..=max_len);
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    fn random_query<R: Rng>(rng: &mut R) -> String {
        const GAPS: [&str; 4] = ["", " ", "  ", "\t "];
        let mut q = GAPS[rng.gen_range(0..GAPS.len())].to_string();
        for _ in 0..rng.gen_range(0..4) {
            q.push_str(&random_text(rng, b"abcABC", 3));
            q.push_str(GAPS[rng.gen_range(1..GAPS.len())]);
        }
        q
    }

    #[test]
    fn test_random_queries_match_every_token_in_catalog_order() {
        const FIELD: &[u8] = b"aAbBcC  ";
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let catalog: Vec<SearchItem> = (0..rng.gen_range(0..8))
                .map(|i| SearchItem {
                    id: format!("item-{i}"),
                    title: random_text(&mut rng, FIELD, 8),
                    description: random_text(&mut rng, FIELD, 12),
                    keywords: (0..rng.gen_range(0..3))
                        .map(|_| random_text(&mut rng, FIELD, 5))
                        .collect(),
                    section: Section::all()[rng.gen_range(0..Section::all().len())],
                    href: Anchor::new("home"),
                })
                .collect();
            let index = SearchIndex::new(catalog.clone()).unwrap();

            for _ in 0..20 {
                let raw = random_query(&mut rng);
                let tokens: Vec<String> =
                    raw.split_whitespace().map(str::to_lowercase).collect();

                // Tokens hold no whitespace, so matching any single field is
                // the same as matching the joined text.
                let expected: Vec<String> = if tokens.is_empty() {
                    Vec::new()
                } else {
                    catalog
                        .iter()
                        .filter(|item| {
                            let mut fields = vec![
                                item.title.to_lowercase(),
                                item.description.to_lowercase(),
                                item.section.as_str().to_string(),
                            ];
                            fields.extend(item.keywords.iter().map(|k| k.to_lowercase()));
                            tokens.iter().all(|t| fields.iter().any(|f| f.contains(t.as_str())))
                        })
                        .map(|item| item.id.clone())
                        .collect()
                };

                assert_eq!(ids(&query(&catalog, &raw)), expected, "query {raw:?}");
                assert_eq!(ids(&index.query(&raw)), expected, "query {raw:?}");

                let positions = index.matching_positions(&raw);
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
