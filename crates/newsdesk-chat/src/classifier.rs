//! Query classification.
//!
//! Decides whether a raw term is a numeric back-reference to a previously
//! shown topic, a ticker-style symbol, an explicit topic key, or opaque
//! free text. The checks overlap, so order matters and first match wins.

use std::sync::LazyLock;

use regex::Regex;

use newsdesk_core::types::Topic;

use crate::reply::ScopeKey;
use crate::scope::ReferenceStore;

/// Exchange-qualified ticker, e.g. `NY:IBM` or `LSE:BARC`.
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w{2,5}:\w{3,4}$").expect("invalid symbol regex"));

/// Canonical topic key, e.g. `topics:bear-market`.
static TOPIC_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(organisations|topics|people|regions):.+$").expect("invalid topic key regex")
});

/// The classified form of a raw search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Blank input; no search is performed.
    Invalid,
    /// A numeral resolving to a previously shown topic's canonical key.
    BackReference { key: String },
    /// A numeral that does not resolve to a usable topic: out of range for
    /// the current scope, or pointing at a stored topic with no key.
    /// Surfaced differently from "no results found".
    UnknownTopic,
    /// A ticker-style symbol; a company-name resolution step runs first.
    Symbol,
    /// An explicit canonical topic key.
    ExplicitTopic,
    /// Anything else; goes to text search.
    FreeText,
}

/// Classify a raw term against the conversation's current Topic scope.
pub fn classify(
    term: &str,
    topics: &dyn ReferenceStore<Topic>,
    scope: &ScopeKey,
) -> Classification {
    let term = term.trim();
    if term.is_empty() {
        return Classification::Invalid;
    }
    // Any positive integer, with or without the `T` display prefix, is a
    // back-reference attempt; one that does not land on a usable stored
    // topic is an unknown topic, never a text search for the numeral.
    let numeral = term.strip_prefix(['T', 't']).unwrap_or(term);
    if numeral.parse::<usize>().map(|n| n > 0).unwrap_or(false) {
        return match topics.get(scope, numeral) {
            Some(topic) if !topic.key.is_empty() => Classification::BackReference { key: topic.key },
            _ => Classification::UnknownTopic,
        };
    }
    if SYMBOL_RE.is_match(term) {
        return Classification::Symbol;
    }
    if TOPIC_KEY_RE.is_match(term) {
        return Classification::ExplicitTopic;
    }
    Classification::FreeText
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeStore;

    fn scope() -> ScopeKey {
        ScopeKey {
            room: "markets".to_string(),
            user: Some("alex".to_string()),
        }
    }

    fn topics_with(keys: &[&str]) -> ScopeStore<Topic> {
        let store = ScopeStore::new();
        store.add(
            &scope(),
            keys.iter().map(|k| Topic::new(*k, format!("name of {}", k))).collect(),
        );
        store
    }

    // ---- blank ----

    #[test]
    fn test_blank_is_invalid() {
        let store = topics_with(&[]);
        assert_eq!(classify("", &store, &scope()), Classification::Invalid);
        assert_eq!(classify("   ", &store, &scope()), Classification::Invalid);
    }

    // ---- back-references ----

    #[test]
    fn test_valid_index_is_back_reference() {
        let store = topics_with(&["topics:gold", "topics:oil", "topics:bear-market"]);
        assert_eq!(
            classify("3", &store, &scope()),
            Classification::BackReference {
                key: "topics:bear-market".to_string()
            }
        );
    }

    #[test]
    fn test_display_prefix_is_accepted() {
        let store = topics_with(&["topics:gold", "topics:oil"]);
        for form in ["T2", "t2"] {
            assert_eq!(
                classify(form, &store, &scope()),
                Classification::BackReference {
                    key: "topics:oil".to_string()
                }
            );
        }
        assert_eq!(classify("T9", &store, &scope()), Classification::UnknownTopic);
    }

    #[test]
    fn test_index_out_of_range_is_unknown_topic() {
        let store = topics_with(&["topics:gold"]);
        assert_eq!(classify("2", &store, &scope()), Classification::UnknownTopic);
    }

    #[test]
    fn test_numeral_with_empty_topic_scope_is_unknown_topic() {
        let store = topics_with(&[]);
        assert_eq!(classify("3", &store, &scope()), Classification::UnknownTopic);
    }

    #[test]
    fn test_zero_is_not_a_back_reference() {
        let store = topics_with(&["topics:gold"]);
        assert_eq!(classify("0", &store, &scope()), Classification::FreeText);
    }

    #[test]
    fn test_stored_topic_with_empty_key_is_unknown() {
        let store = ScopeStore::new();
        store.add(&scope(), vec![Topic::new("", "mystery")]);
        assert_eq!(classify("1", &store, &scope()), Classification::UnknownTopic);
    }

    #[test]
    fn test_back_reference_is_scope_local() {
        let store = topics_with(&["topics:gold"]);
        let other = ScopeKey {
            room: "tech".to_string(),
            user: Some("alex".to_string()),
        };
        assert_eq!(classify("1", &store, &other), Classification::UnknownTopic);
    }

    // ---- symbols ----

    #[test]
    fn test_ticker_is_symbol() {
        let store = topics_with(&[]);
        assert_eq!(classify("LSE:BARC", &store, &scope()), Classification::Symbol);
        assert_eq!(classify("NY:IBM", &store, &scope()), Classification::Symbol);
    }

    #[test]
    fn test_ticker_bounds() {
        let store = topics_with(&[]);
        // Prefix must be 2-5 word chars, suffix 3-4.
        assert_eq!(classify("A:BAR", &store, &scope()), Classification::FreeText);
        assert_eq!(classify("TOOLONG:BAR", &store, &scope()), Classification::FreeText);
        assert_eq!(classify("LSE:BA", &store, &scope()), Classification::FreeText);
        assert_eq!(classify("LSE:BARCL", &store, &scope()), Classification::FreeText);
    }

    // ---- explicit topic keys ----

    #[test]
    fn test_topic_key_prefixes() {
        let store = topics_with(&[]);
        for term in [
            "topics:bear-market",
            "organisations:acme-corp",
            "people:jane-doe",
            "regions:uk",
        ] {
            assert_eq!(classify(term, &store, &scope()), Classification::ExplicitTopic);
        }
    }

    #[test]
    fn test_topic_key_needs_remainder() {
        let store = topics_with(&[]);
        assert_eq!(classify("topics:", &store, &scope()), Classification::FreeText);
    }

    #[test]
    fn test_unlisted_prefix_is_free_text() {
        let store = topics_with(&[]);
        assert_eq!(classify("sections:markets", &store, &scope()), Classification::FreeText);
    }

    // ---- free text ----

    #[test]
    fn test_plain_words_are_free_text() {
        let store = topics_with(&[]);
        assert_eq!(classify("bear market", &store, &scope()), Classification::FreeText);
    }

    // ---- precedence ----

    #[test]
    fn test_back_reference_wins_over_free_text() {
        // "2" is both a numeral and potential free text; the populated
        // scope decides.
        let store = topics_with(&["topics:gold", "topics:oil"]);
        assert!(matches!(
            classify("2", &store, &scope()),
            Classification::BackReference { .. }
        ));
    }

    #[test]
    fn test_term_is_trimmed_before_classification() {
        let store = topics_with(&["topics:gold"]);
        assert!(matches!(
            classify(" 1 ", &store, &scope()),
            Classification::BackReference { .. }
        ));
        assert_eq!(classify("  LSE:BARC ", &store, &scope()), Classification::Symbol);
    }
}
