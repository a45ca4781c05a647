//! Article domain model and the read-only store wrapping it.
//!
//! This module defines the core `Article` record representing one published
//! piece in the portfolio, along with [`ArticleStore`], the validated,
//! immutable collection the rest of the crate reads from. Articles carry a
//! stable id that doubles as the key for deriving default asset locations
//! (card image and document link).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::curation::CurationTable;
use super::error::{PressdeckError, Result};

/// A single published article in the portfolio.
///
/// Articles are supplied externally and treated as read-only. The `id` must be
/// unique across the collection; besides identifying the record it derives the
/// default image and document paths when no explicit override is present.
///
/// # Fields
///
/// - `id`: unique stable identifier, also the default asset file stem
/// - `title`, `summary`, `publication`: card copy
/// - `date`: publication date, rendered as "Month Year" on cards
/// - `genre`: single-select category
/// - `tags`: multi-select topic labels
/// - `featured`: boosts default-view ordering when no curation is active
/// - `image_url` / `article_url`: optional overrides for the derived assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub publication: String,
    pub date: NaiveDate,
    pub genre: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub article_url: Option<String>,
}

impl Article {
    /// Returns whether the article carries the given topic tag (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Resolves the card image location.
    ///
    /// Uses the explicit `image_url` override when present, otherwise derives
    /// `<asset_root>/images/<id>.png`.
    #[must_use]
    pub fn image_asset(&self, asset_root: &str) -> String {
        self.image_url
            .clone()
            .unwrap_or_else(|| format!("{asset_root}/images/{}.png", self.id))
    }

    /// Resolves the document (read-more target) location.
    ///
    /// Uses the explicit `article_url` override when present, otherwise
    /// derives `<asset_root>/pdfs/<id>.pdf`.
    #[must_use]
    pub fn document_asset(&self, asset_root: &str) -> String {
        self.article_url
            .clone()
            .unwrap_or_else(|| format!("{asset_root}/pdfs/{}.pdf", self.id))
    }

    /// Formats the publication date for display, e.g. `"March 2024"`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%B %Y").to_string()
    }
}

/// On-disk document shape accepted by [`ArticleStore::from_json_str`].
///
/// The curation table is optional; a missing table means the `curate` query
/// parameter never matches anything.
#[derive(Debug, Deserialize)]
struct StoreDocument {
    articles: Vec<Article>,
    #[serde(default)]
    curation: CurationTable,
}

/// Validated, immutable article collection.
///
/// Owns the full article list and the static curation table, and derives the
/// distinct topic and genre vocabularies used to build the filter panel.
/// Construction fails if two articles share an id.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    curation: CurationTable,
}

impl ArticleStore {
    /// Creates a store from an article list and curation table.
    ///
    /// # Errors
    ///
    /// Returns [`PressdeckError::Store`] if any article id appears more than
    /// once.
    pub fn new(articles: Vec<Article>, curation: CurationTable) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for article in &articles {
            if !seen.insert(article.id.as_str()) {
                return Err(PressdeckError::Store(format!(
                    "duplicate article id: {}",
                    article.id
                )));
            }
        }
        Ok(Self { articles, curation })
    }

    /// Parses a store document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PressdeckError::Json`] on malformed JSON and
    /// [`PressdeckError::Store`] on duplicate ids.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: StoreDocument = serde_json::from_str(json)?;
        Self::new(doc.articles, doc.curation)
    }

    /// Loads a store document from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`PressdeckError::Io`] if the file cannot be read, plus any
    /// error from [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All articles, in supplied order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The static keyword lookup table backing curation.
    #[must_use]
    pub fn curation(&self) -> &CurationTable {
        &self.curation
    }

    /// Distinct topic tags across all articles, sorted.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self
            .articles
            .iter()
            .flat_map(|a| a.tags.iter().cloned())
            .collect();
        topics.sort();
        topics.dedup();
        topics
    }

    /// Distinct genres across all articles, sorted.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self.articles.iter().map(|a| a.genre.clone()).collect();
        genres.sort();
        genres.dedup();
        genres
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Title {id}"),
            summary: "A summary.".to_string(),
            publication: "The Ledger".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            genre: "Feature".to_string(),
            tags: vec!["Payments".to_string(), "Fraud".to_string()],
            featured: false,
            image_url: None,
            article_url: None,
        }
    }

    #[test]
    fn store_rejects_duplicate_ids() {
        let result = ArticleStore::new(
            vec![article("a1"), article("a1")],
            CurationTable::default(),
        );
        assert!(matches!(result, Err(PressdeckError::Store(_))));
    }

    #[test]
    fn asset_resolution_derives_from_id() {
        let a = article("q2-fraud");
        assert_eq!(a.image_asset("assets"), "assets/images/q2-fraud.png");
        assert_eq!(a.document_asset("assets"), "assets/pdfs/q2-fraud.pdf");
    }

    #[test]
    fn asset_resolution_prefers_overrides() {
        let mut a = article("a1");
        a.image_url = Some("https://cdn.example/custom.png".to_string());
        a.article_url = Some("https://example.com/story".to_string());
        assert_eq!(a.image_asset("assets"), "https://cdn.example/custom.png");
        assert_eq!(a.document_asset("assets"), "https://example.com/story");
    }

    #[test]
    fn display_date_is_month_year() {
        assert_eq!(article("a1").display_date(), "March 2024");
    }

    #[test]
    fn vocabularies_are_sorted_and_distinct() {
        let mut b = article("b1");
        b.genre = "Analysis".to_string();
        b.tags = vec!["Growth".to_string(), "Payments".to_string()];
        let store =
            ArticleStore::new(vec![article("a1"), b], CurationTable::default()).unwrap();
        assert_eq!(store.topics(), vec!["Fraud", "Growth", "Payments"]);
        assert_eq!(store.genres(), vec!["Analysis", "Feature"]);
    }

    #[test]
    fn store_loads_from_json_file() {
        let json = r#"{
            "articles": [{
                "id": "a1",
                "title": "T",
                "summary": "S",
                "publication": "P",
                "date": "2024-03-15",
                "genre": "Feature",
                "tags": ["Fraud"]
            }]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let store = ArticleStore::from_path(file.path()).unwrap();
        assert_eq!(store.articles().len(), 1);
        assert_eq!(store.articles()[0].date.to_string(), "2024-03-15");
    }
}
