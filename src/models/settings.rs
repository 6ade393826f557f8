//! Index settings.
//!
//! Every field is optional: `get_settings` fills what the service reports,
//! and `set_settings` sends only what the caller sets. Field names follow
//! the REST API's camelCase spelling, including the historical
//! `minWordSizefor1Typo` casing.

use serde::{Deserialize, Serialize};

/// Index settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    // Attributes
    /// Attributes searched, in priority order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable_attributes: Option<Vec<String>>,
    /// Attributes usable as facets (optionally `filterOnly(...)`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_for_faceting: Option<Vec<String>>,
    /// Attributes that can never be retrieved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unretrievable_attributes: Option<Vec<String>>,
    /// Attributes returned by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_retrieve: Option<Vec<String>>,

    // Ranking
    /// Ranking criteria, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Vec<String>>,
    /// Tie-break criteria applied after `ranking`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ranking: Option<Vec<String>>,
    /// Replica indexes kept in sync with this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<Vec<String>>,
    /// Primary index, set on replicas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    // Faceting
    /// Maximum facet values returned per facet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values_per_facet: Option<u32>,

    // Highlighting / snippeting
    /// Attributes highlighted in results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_highlight: Option<Vec<String>>,
    /// Attributes snippeted in results (`attr:count`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_snippet: Option<Vec<String>>,
    /// Tag inserted before highlighted parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_pre_tag: Option<String>,
    /// Tag inserted after highlighted parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_post_tag: Option<String>,
    /// String inserted where snippets are truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet_ellipsis_text: Option<String>,
    /// Whether synonym matches are highlighted like query matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_synonyms_in_highlight: Option<bool>,

    // Pagination
    /// Default page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u32>,
    /// Maximum reachable record via pagination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_limited_to: Option<u32>,

    // Typo tolerance
    /// Minimum word length for one typo.
    #[serde(
        default,
        rename = "minWordSizefor1Typo",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_word_sizefor_1_typo: Option<u32>,
    /// Minimum word length for two typos.
    #[serde(
        default,
        rename = "minWordSizefor2Typos",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_word_sizefor_2_typos: Option<u32>,
    /// Typo tolerance mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typo_tolerance: Option<TypoTolerance>,
    /// Whether typos are allowed on numeric tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_typos_on_numeric_tokens: Option<bool>,
    /// Attributes on which typo tolerance is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_typo_tolerance_on_attributes: Option<Vec<String>>,
    /// Words on which typo tolerance is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_typo_tolerance_on_words: Option<Vec<String>>,
    /// Separator characters indexed as tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separators_to_index: Option<String>,

    // Query strategy
    /// How query words are interpreted (`prefixLast`, `prefixAll`,
    /// `prefixNone`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    /// Plural handling: a flag or a language list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_plurals: Option<IgnorePlurals>,
    /// Stop-word removal: a flag or a language list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_stop_words: Option<RemoveStopWords>,
    /// Whether advanced query syntax is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_syntax: Option<bool>,
    /// Words that may be dropped from the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_words: Option<Vec<String>>,
    /// Strategy when a query returns no result (`none`, `lastWords`,
    /// `firstWords`, `allOptional`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_words_if_no_results: Option<String>,
    /// Minimum proximity used by the `proximity` criterion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_proximity: Option<u32>,

    // Deduplication
    /// Deduplication: a flag or a count of kept duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<Distinct>,
    /// Attribute used for deduplication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_for_distinct: Option<String>,

    // Performance
    /// Whether integer arrays are compressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_compression_of_integer_array: Option<bool>,
    /// Numeric attributes indexed for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_attributes_for_filtering: Option<Vec<String>>,
}

/// Typo tolerance mode: a flag or a keyword (`min`, `strict`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypoTolerance {
    /// Enabled or disabled.
    Enabled(bool),
    /// `min` or `strict`.
    Keyword(String),
}

/// Plural handling: a flag or a list of ISO language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnorePlurals {
    /// Enabled or disabled for all supported languages.
    Enabled(bool),
    /// Enabled for the given languages only.
    Languages(Vec<String>),
}

/// Stop-word removal: a flag or a list of ISO language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoveStopWords {
    /// Enabled or disabled for all supported languages.
    Enabled(bool),
    /// Enabled for the given languages only.
    Languages(Vec<String>),
}

/// Deduplication setting: a flag or the number of duplicates kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distinct {
    /// Enabled or disabled.
    Enabled(bool),
    /// Keep the first `n` duplicates.
    Count(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_serializes_only_set_fields() {
        let settings = Settings {
            searchable_attributes: Some(vec!["company".to_string(), "name".to_string()]),
            hits_per_page: Some(50),
            ..Settings::default()
        };

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "searchableAttributes": ["company", "name"],
                "hitsPerPage": 50
            })
        );
    }

    #[test]
    fn test_typo_settings_historical_casing() {
        let settings = Settings {
            min_word_sizefor_1_typo: Some(4),
            min_word_sizefor_2_typos: Some(8),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("minWordSizefor1Typo"));
        assert!(json.contains("minWordSizefor2Typos"));
    }

    #[test]
    fn test_remove_stop_words_both_shapes() {
        let s: Settings = serde_json::from_str(r#"{"removeStopWords": true}"#).unwrap();
        assert_eq!(s.remove_stop_words, Some(RemoveStopWords::Enabled(true)));

        let s: Settings = serde_json::from_str(r#"{"removeStopWords": ["en", "fr"]}"#).unwrap();
        assert_eq!(
            s.remove_stop_words,
            Some(RemoveStopWords::Languages(vec![
                "en".to_string(),
                "fr".to_string()
            ]))
        );
    }

    #[test]
    fn test_distinct_both_shapes() {
        let s: Settings = serde_json::from_str(r#"{"distinct": 2}"#).unwrap();
        assert_eq!(s.distinct, Some(Distinct::Count(2)));

        let s: Settings = serde_json::from_str(r#"{"distinct": false}"#).unwrap();
        assert_eq!(s.distinct, Some(Distinct::Enabled(false)));
    }

    #[test]
    fn test_typo_tolerance_keyword() {
        let s: Settings = serde_json::from_str(r#"{"typoTolerance": "strict"}"#).unwrap();
        assert_eq!(
            s.typo_tolerance,
            Some(TypoTolerance::Keyword("strict".to_string()))
        );
    }
}
