//! Pure filter and ordering engine.
//!
//! This module implements the core selection logic mapping (article list,
//! active filters, curation context) to a filtered, ordered result list plus
//! the heading shown above it. It holds no state of its own and performs no
//! side effects; [`crate::app::AppState::apply_filters`] wraps it and applies
//! the pagination reset.
//!
//! # Semantics
//!
//! - Topic filters use AND semantics: every selected topic must match.
//! - The composite topic [`COMPOSITE_SECURITY_TOPIC`] matches when either of
//!   its underlying tags is present.
//! - A genre filter keeps exact matches only; `None` keeps all.
//! - Ordering depends on the branch taken:
//!   - default selection, curation present: curated partition first
//!   - default selection, no curation: featured partition first
//!   - any filter active: flat, newest first
//!
//! Within every partition the order is strictly newest-date-first.

use crate::domain::{Article, CurationContext};

/// Composite topic label matching either underlying security tag.
pub const COMPOSITE_SECURITY_TOPIC: &str = "Fraud & Security";

/// Tags the composite security topic expands to (OR semantics).
pub const COMPOSITE_SECURITY_TAGS: [&str; 2] = ["Fraud", "Security"];

/// A committed or draft filter selection.
///
/// `topics` are AND-combined; `genre` is single-select with `None` meaning
/// no genre restriction. Topic order is preserved as selected so that the
/// URL representation round-trips exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Selected topic labels, in selection order.
    pub topics: Vec<String>,

    /// Selected genre, or `None` for no restriction.
    pub genre: Option<String>,
}

impl FilterSelection {
    /// Returns whether the selection is at its unrestricted default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.topics.is_empty() && self.genre.is_none()
    }

    /// Toggles a topic in or out of the selection.
    pub fn toggle_topic(&mut self, topic: &str) {
        if let Some(pos) = self.topics.iter().position(|t| t == topic) {
            self.topics.remove(pos);
        } else {
            self.topics.push(topic.to_string());
        }
    }

    /// Selects a genre, or clears it when the same genre is selected again.
    pub fn toggle_genre(&mut self, genre: &str) {
        if self.genre.as_deref() == Some(genre) {
            self.genre = None;
        } else {
            self.genre = Some(genre.to_string());
        }
    }

    /// Clears the topic selection.
    pub fn clear_topics(&mut self) {
        self.topics.clear();
    }

    /// Clears the genre selection.
    pub fn clear_genre(&mut self) {
        self.genre = None;
    }

    /// Clears the whole selection back to the default.
    pub fn clear(&mut self) {
        self.clear_topics();
        self.clear_genre();
    }
}

/// Heading shown above the result grid, one fixed label per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Default view with a curation context.
    Curated,
    /// Default view, featured-first ordering.
    AllWork,
    /// At least one filter active.
    Filtered,
}

impl Heading {
    /// The display label for this heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Curated => "Curated Work",
            Self::AllWork => "All Work",
            Self::Filtered => "Filtered Results",
        }
    }
}

/// Returns whether an article satisfies one selected topic.
///
/// The composite security topic expands to an OR over its underlying tags;
/// every other topic is a literal tag-membership test.
fn topic_matches(article: &Article, topic: &str) -> bool {
    if topic == COMPOSITE_SECURITY_TOPIC {
        COMPOSITE_SECURITY_TAGS.iter().any(|tag| article.has_tag(tag))
    } else {
        article.has_tag(topic)
    }
}

/// Filters and orders the article list for the given selection.
///
/// Pure with respect to its inputs: the same `(articles, selection,
/// curation)` triple always produces the same output, making the engine
/// testable without any host environment.
///
/// # Returns
///
/// The ordered result list and the heading for the branch taken.
#[must_use]
pub fn filter_and_sort(
    articles: &[Article],
    selection: &FilterSelection,
    curation: Option<&CurationContext>,
) -> (Vec<Article>, Heading) {
    let _span = tracing::debug_span!(
        "filter_and_sort",
        total = articles.len(),
        topics = selection.topics.len(),
        genre = ?selection.genre,
        curated = curation.is_some()
    )
    .entered();

    let mut filtered: Vec<Article> = articles
        .iter()
        .filter(|article| {
            selection
                .topics
                .iter()
                .all(|topic| topic_matches(article, topic))
        })
        .filter(|article| {
            selection
                .genre
                .as_deref()
                .map_or(true, |genre| article.genre == genre)
        })
        .cloned()
        .collect();

    let heading = if selection.is_default() {
        if let Some(context) = curation {
            // Curated partition first, then date; the curated list's own
            // order is intentionally not preserved.
            filtered.sort_by(|a, b| {
                context
                    .contains(&b.id)
                    .cmp(&context.contains(&a.id))
                    .then_with(|| b.date.cmp(&a.date))
            });
            Heading::Curated
        } else {
            filtered.sort_by(|a, b| {
                b.featured
                    .cmp(&a.featured)
                    .then_with(|| b.date.cmp(&a.date))
            });
            Heading::AllWork
        }
    } else {
        filtered.sort_by(|a, b| b.date.cmp(&a.date));
        Heading::Filtered
    };

    tracing::debug!(filtered = filtered.len(), heading = heading.label(), "filter applied");

    (filtered, heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurationContext;
    use chrono::NaiveDate;

    fn article(id: &str, date: (i32, u32, u32), tags: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            title: id.to_string(),
            summary: String::new(),
            publication: "P".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            genre: "Feature".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            featured: false,
            image_url: None,
            article_url: None,
        }
    }

    fn selection(topics: &[&str], genre: Option<&str>) -> FilterSelection {
        FilterSelection {
            topics: topics.iter().map(ToString::to_string).collect(),
            genre: genre.map(ToString::to_string),
        }
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn topics_combine_with_and_semantics() {
        let articles = vec![
            article("both", (2024, 1, 1), &["Payments", "Growth"]),
            article("one", (2024, 1, 2), &["Payments"]),
            article("neither", (2024, 1, 3), &["Fraud"]),
        ];
        let (result, heading) =
            filter_and_sort(&articles, &selection(&["Payments", "Growth"], None), None);
        assert_eq!(ids(&result), vec!["both"]);
        assert_eq!(heading, Heading::Filtered);
    }

    #[test]
    fn composite_topic_expands_to_either_tag() {
        let articles = vec![
            article("fraud-only", (2024, 1, 1), &["Fraud"]),
            article("security-only", (2024, 1, 2), &["Security"]),
            article("growth-only", (2024, 1, 3), &["Growth"]),
        ];
        let (result, _) =
            filter_and_sort(&articles, &selection(&[COMPOSITE_SECURITY_TOPIC], None), None);
        assert_eq!(ids(&result), vec!["security-only", "fraud-only"]);
    }

    #[test]
    fn genre_filter_keeps_exact_matches_only() {
        let mut a = article("feature", (2024, 1, 1), &[]);
        a.genre = "Feature".to_string();
        let mut b = article("analysis", (2024, 1, 2), &[]);
        b.genre = "Analysis".to_string();
        let (result, heading) =
            filter_and_sort(&[a, b], &selection(&[], Some("Analysis")), None);
        assert_eq!(ids(&result), vec!["analysis"]);
        assert_eq!(heading, Heading::Filtered);
    }

    #[test]
    fn unknown_genre_matches_nothing() {
        let articles = vec![article("a", (2024, 1, 1), &[])];
        let (result, _) = filter_and_sort(&articles, &selection(&[], Some("Poetry")), None);
        assert!(result.is_empty());
    }

    #[test]
    fn default_view_orders_featured_first_then_newest() {
        let mut old_featured = article("old-featured", (2023, 1, 1), &[]);
        old_featured.featured = true;
        let mut new_featured = article("new-featured", (2024, 6, 1), &[]);
        new_featured.featured = true;
        let newest_plain = article("newest-plain", (2024, 12, 1), &[]);
        let older_plain = article("older-plain", (2024, 2, 1), &[]);

        let articles = vec![older_plain, old_featured, newest_plain, new_featured];
        let (result, heading) = filter_and_sort(&articles, &FilterSelection::default(), None);
        assert_eq!(
            ids(&result),
            vec!["new-featured", "old-featured", "newest-plain", "older-plain"]
        );
        assert_eq!(heading, Heading::AllWork);
    }

    #[test]
    fn curation_partitions_before_featured_and_date() {
        let mut featured = article("featured", (2024, 12, 1), &[]);
        featured.featured = true;
        let curated_old = article("curated-old", (2022, 1, 1), &[]);
        let curated_new = article("curated-new", (2023, 1, 1), &[]);
        let context = CurationContext {
            entity: "Acme".to_string(),
            // List order deliberately disagrees with date order; dates win.
            curated_ids: vec!["curated-old".to_string(), "curated-new".to_string()],
        };

        let articles = vec![featured, curated_old, curated_new];
        let (result, heading) =
            filter_and_sort(&articles, &FilterSelection::default(), Some(&context));
        assert_eq!(ids(&result), vec!["curated-new", "curated-old", "featured"]);
        assert_eq!(heading, Heading::Curated);
    }

    #[test]
    fn active_filters_flatten_ordering_to_newest_first() {
        let mut featured = article("featured", (2023, 1, 1), &["Payments"]);
        featured.featured = true;
        let plain = article("plain", (2024, 1, 1), &["Payments"]);
        let (result, _) = filter_and_sort(
            &[featured, plain],
            &selection(&["Payments"], None),
            None,
        );
        // Featured gets no boost once a filter is active.
        assert_eq!(ids(&result), vec!["plain", "featured"]);
    }

    #[test]
    fn dates_descend_within_every_partition() {
        let mut articles: Vec<Article> = (0..6)
            .map(|i| article(&format!("a{i}"), (2024, 1, 1 + i), &[]))
            .collect();
        articles[1].featured = true;
        articles[4].featured = true;
        let (result, _) = filter_and_sort(&articles, &FilterSelection::default(), None);
        for pair in result.windows(2) {
            if pair[0].featured == pair[1].featured {
                assert!(pair[0].date >= pair[1].date);
            }
        }
    }

    #[test]
    fn toggle_genre_clears_on_reselect() {
        let mut selection = FilterSelection::default();
        selection.toggle_genre("Feature");
        assert_eq!(selection.genre.as_deref(), Some("Feature"));
        selection.toggle_genre("Feature");
        assert!(selection.genre.is_none());
    }

    #[test]
    fn toggle_topic_preserves_selection_order() {
        let mut selection = FilterSelection::default();
        selection.toggle_topic("Growth");
        selection.toggle_topic("Fraud");
        selection.toggle_topic("Growth");
        assert_eq!(selection.topics, vec!["Fraud"]);
    }
}
