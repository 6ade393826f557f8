//! Query rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A query rule: when `condition` matches, `consequence` is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier of the rule.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// When the rule fires.
    pub condition: RuleCondition,
    /// What the rule does.
    pub consequence: RuleConsequence,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the rule is active. Defaults to enabled on the service side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Time windows during which the rule applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<Vec<TimeRange>>,
}

/// Matching condition of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCondition {
    /// The query pattern, possibly containing `{facet:name}` tokens.
    pub pattern: String,
    /// How the pattern is anchored in the query.
    pub anchoring: Anchoring,
    /// Rule context restricting when the rule is considered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Pattern anchoring of a rule condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchoring {
    /// The pattern must equal the query.
    #[serde(rename = "is")]
    Is,
    /// The pattern must start the query.
    #[serde(rename = "startsWith")]
    StartsWith,
    /// The pattern must end the query.
    #[serde(rename = "endsWith")]
    EndsWith,
    /// The pattern may appear anywhere in the query.
    #[serde(rename = "contains")]
    Contains,
}

/// Effect of a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConsequence {
    /// Query parameters forced or merged when the rule fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Map<String, serde_json::Value>>,
    /// Records pinned at fixed positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promote: Option<Vec<PromotedObject>>,
    /// Records hidden from the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<Vec<HiddenObject>>,
    /// Opaque data returned alongside the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<serde_json::Value>,
}

/// A record pinned at a fixed position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotedObject {
    /// The pinned record.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Zero-based position to pin at.
    pub position: u32,
}

/// A record hidden from the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenObject {
    /// The hidden record.
    #[serde(rename = "objectID")]
    pub object_id: String,
}

/// A validity window, as Unix timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Window start.
    pub from: i64,
    /// Window end.
    pub until: i64,
}

/// Response of a rule save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRuleRes {
    /// Task performing the save.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Response of a rule deletion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRuleRes {
    /// Task performing the deletion.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Response of a rules clear.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRulesRes {
    /// Task performing the clear.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Response of a rules batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRulesRes {
    /// Task performing the batch.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Parameters of a rules search. Every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRulesParams {
    /// Full-text search within the rule fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Restrict to rules with this anchoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchoring: Option<Anchoring>,
    /// Restrict to rules with this context (exact match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Requested page (zero-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Maximum hits per page (service default 20).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u64>,
}

impl SearchRulesParams {
    /// Creates empty parameters (match every rule).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: None,
            anchoring: None,
            context: None,
            page: None,
            hits_per_page: None,
        }
    }

    /// Sets the full-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Restricts the search to one anchoring.
    #[must_use]
    pub const fn with_anchoring(mut self, anchoring: Anchoring) -> Self {
        self.anchoring = Some(anchoring);
        self
    }

    /// Restricts the search to one context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sets the requested page.
    #[must_use]
    pub const fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_hits_per_page(mut self, hits_per_page: u64) -> Self {
        self.hits_per_page = Some(hits_per_page);
        self
    }
}

/// Response of a rules search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRulesRes {
    /// Matching rules.
    #[serde(default)]
    pub hits: Vec<Rule>,
    /// Total number of matches.
    #[serde(default)]
    pub nb_hits: u64,
    /// Zero-based page of this response.
    #[serde(default)]
    pub page: u64,
    /// Total number of pages.
    #[serde(default)]
    pub nb_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_rule() -> Rule {
        Rule {
            object_id: "remove_js".to_string(),
            condition: RuleCondition {
                pattern: "{facet:lang} javascript".to_string(),
                anchoring: Anchoring::EndsWith,
                context: None,
            },
            consequence: RuleConsequence {
                params: Some(
                    json!({"query": {"remove": ["javascript"]}})
                        .as_object()
                        .cloned()
                        .unwrap(),
                ),
                promote: Some(vec![PromotedObject {
                    object_id: "js-guide".to_string(),
                    position: 0,
                }]),
                hide: None,
                user_data: None,
            },
            description: Some("drop the language token".to_string()),
            enabled: Some(true),
            validity: None,
        }
    }

    #[test]
    fn test_rule_roundtrip() {
        let rule = sample_rule();
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["objectID"], "remove_js");
        assert_eq!(json["condition"]["anchoring"], "endsWith");
        assert_eq!(json["consequence"]["promote"][0]["position"], 0);

        let back: Rule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_anchoring_wire_values() {
        for (anchoring, value) in [
            (Anchoring::Is, "\"is\""),
            (Anchoring::StartsWith, "\"startsWith\""),
            (Anchoring::EndsWith, "\"endsWith\""),
            (Anchoring::Contains, "\"contains\""),
        ] {
            assert_eq!(serde_json::to_string(&anchoring).unwrap(), value);
        }
    }
}
