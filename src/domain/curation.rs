//! Curation lookup table and the load-time context derived from it.
//!
//! Curation lets a shared link reorder the default (unfiltered) view in favor
//! of articles hand-picked for a named entity: the `curate` query parameter
//! carries an entity name, and a static keyword table maps it to an id list.
//! The context is computed once at initialization and never changes.

use serde::{Deserialize, Serialize};

/// One keyword group in the curation table.
///
/// A group matches when any of its keywords occurs in the entity name
/// (case-insensitive substring). Groups are consulted in table order and the
/// first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationGroup {
    /// Keywords matched against the entity name.
    pub keywords: Vec<String>,
    /// Article ids curated for entities in this group.
    pub article_ids: Vec<String>,
}

/// Static keyword-to-id-list lookup table.
///
/// Supplied alongside the article collection. An empty table (the default)
/// means no entity ever produces a curation context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurationTable {
    pub groups: Vec<CurationGroup>,
}

impl CurationTable {
    /// Resolves an entity name to a curation context.
    ///
    /// Returns `None` when no group matches or the matching group's id list
    /// is empty, so callers can treat "no context" and "empty context"
    /// uniformly.
    #[must_use]
    pub fn resolve(&self, entity: &str) -> Option<CurationContext> {
        let needle = entity.to_lowercase();
        self.groups
            .iter()
            .find(|group| {
                group
                    .keywords
                    .iter()
                    .any(|keyword| needle.contains(&keyword.to_lowercase()))
            })
            .filter(|group| !group.article_ids.is_empty())
            .map(|group| CurationContext {
                entity: entity.to_string(),
                curated_ids: group.article_ids.clone(),
            })
    }
}

/// Immutable curation context seeded from the `curate` query parameter.
///
/// Affects only the default sort order when no filters are active: curated
/// ids partition before everything else, each partition newest-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurationContext {
    /// Entity name as it appeared in the query parameter.
    pub entity: String,
    /// Ids considered curated, in table order.
    pub curated_ids: Vec<String>,
}

impl CurationContext {
    /// Returns whether the given article id is in the curated set.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.curated_ids.iter().any(|curated| curated == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CurationTable {
        CurationTable {
            groups: vec![
                CurationGroup {
                    keywords: vec!["acme".to_string(), "coyote".to_string()],
                    article_ids: vec!["a1".to_string(), "a2".to_string()],
                },
                CurationGroup {
                    keywords: vec!["acme bank".to_string()],
                    article_ids: vec!["a9".to_string()],
                },
            ],
        }
    }

    #[test]
    fn first_matching_group_wins() {
        // "Acme Bank" matches both groups; table order decides.
        let ctx = table().resolve("Acme Bank").unwrap();
        assert_eq!(ctx.curated_ids, vec!["a1", "a2"]);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let ctx = table().resolve("The COYOTE Group").unwrap();
        assert!(ctx.contains("a1"));
        assert!(!ctx.contains("a9"));
    }

    #[test]
    fn unknown_entity_resolves_to_none() {
        assert!(table().resolve("Globex").is_none());
    }

    #[test]
    fn empty_id_list_resolves_to_none() {
        let table = CurationTable {
            groups: vec![CurationGroup {
                keywords: vec!["acme".to_string()],
                article_ids: vec![],
            }],
        };
        assert!(table.resolve("acme").is_none());
    }
}
