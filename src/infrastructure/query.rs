//! URL query-string codec for the active filter state.
//!
//! Bidirectional mapping between a [`FilterSelection`] and the address-bar
//! query string: `topics` holds the comma-joined topic list, `genre` the
//! selected genre, and both are omitted at their defaults so the default
//! view keeps a bare path. A third parameter, `curate`, is read once at load
//! time to seed the curation context and is never written back.
//!
//! Percent-encoding and decoding go through `url::form_urlencoded`, so topic
//! labels containing spaces or `&` (the composite security topic) survive
//! the round trip.

use url::form_urlencoded;

use crate::app::filter::FilterSelection;

/// Query parameter carrying the comma-joined topic list.
const TOPICS_PARAM: &str = "topics";

/// Query parameter carrying the selected genre.
const GENRE_PARAM: &str = "genre";

/// Load-time-only query parameter naming the curation entity.
const CURATE_PARAM: &str = "curate";

/// Result of parsing an initial query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Filter selection encoded in the query, defaults for absent keys.
    pub selection: FilterSelection,
    /// Entity name from the one-shot `curate` parameter, if present.
    pub curate: Option<String>,
}

/// Serializes the active selection to a query string.
///
/// Returns an empty string when the selection is at its default, which the
/// host renders as a bare path (no `?`). Topic order is preserved so the
/// encoding round-trips exactly.
#[must_use]
pub fn serialize(selection: &FilterSelection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !selection.topics.is_empty() {
        serializer.append_pair(TOPICS_PARAM, &selection.topics.join(","));
    }
    if let Some(genre) = &selection.genre {
        serializer.append_pair(GENRE_PARAM, genre);
    }
    serializer.finish()
}

/// Parses an initial query string permissively.
///
/// Accepts the string with or without its leading `?`. Unknown keys are
/// ignored and unrecognized topic or genre values pass through verbatim;
/// they simply match no articles downstream, which renders the empty state
/// rather than an error.
#[must_use]
pub fn parse(query: &str) -> ParsedQuery {
    let raw = query.strip_prefix('?').unwrap_or(query);

    let mut parsed = ParsedQuery::default();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match &*key {
            TOPICS_PARAM => {
                parsed.selection.topics = value.split(',').map(str::to_string).collect();
            }
            GENRE_PARAM => parsed.selection.genre = Some(value.into_owned()),
            CURATE_PARAM => parsed.curate = Some(value.into_owned()),
            _ => tracing::debug!(key = %key, "ignoring unknown query parameter"),
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::COMPOSITE_SECURITY_TOPIC;

    fn selection(topics: &[&str], genre: Option<&str>) -> FilterSelection {
        FilterSelection {
            topics: topics.iter().map(ToString::to_string).collect(),
            genre: genre.map(ToString::to_string),
        }
    }

    #[test]
    fn default_selection_serializes_to_bare_path() {
        assert_eq!(serialize(&FilterSelection::default()), "");
    }

    #[test]
    fn round_trip_reproduces_the_selection_exactly() {
        let cases = [
            selection(&[], None),
            selection(&["Payments"], None),
            selection(&["Payments", "Growth"], Some("Feature")),
            selection(&[COMPOSITE_SECURITY_TOPIC], None),
            selection(&[], Some("Analysis")),
        ];
        for original in cases {
            let parsed = parse(&serialize(&original));
            assert_eq!(parsed.selection, original);
            assert!(parsed.curate.is_none());
        }
    }

    #[test]
    fn composite_topic_survives_percent_encoding() {
        let encoded = serialize(&selection(&[COMPOSITE_SECURITY_TOPIC], None));
        assert!(!encoded.contains('&'), "raw ampersand would split the pair");
        let parsed = parse(&encoded);
        assert_eq!(parsed.selection.topics, vec![COMPOSITE_SECURITY_TOPIC]);
    }

    #[test]
    fn parse_accepts_leading_question_mark() {
        let parsed = parse("?topics=Fraud,Growth&genre=Feature");
        assert_eq!(parsed.selection.topics, vec!["Fraud", "Growth"]);
        assert_eq!(parsed.selection.genre.as_deref(), Some("Feature"));
    }

    #[test]
    fn curate_is_parsed_but_never_serialized() {
        let parsed = parse("curate=Acme%20Bank&topics=Fraud");
        assert_eq!(parsed.curate.as_deref(), Some("Acme Bank"));
        assert_eq!(serialize(&parsed.selection), "topics=Fraud");
    }

    #[test]
    fn unknown_keys_and_empty_values_are_ignored() {
        let parsed = parse("utm_source=newsletter&topics=&genre=");
        assert_eq!(parsed, ParsedQuery::default());
    }
}
