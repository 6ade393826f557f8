//! Query rule management.

use super::Index;
use crate::models::{
    BatchRulesRes, ClearRulesRes, DeleteRuleRes, Rule, SaveRuleRes, SearchRulesParams,
    SearchRulesRes,
};
use crate::transport::{CallKind, RequestOptions};
use crate::{Error, Result};

impl Index {
    /// Retrieves the rule identified by `object_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `object_id` is empty, the rule does not exist
    /// (`Error::Api` with status 404) or the request fails.
    pub fn get_rule(&self, object_id: &str, opts: Option<&RequestOptions>) -> Result<Rule> {
        let path = self.rule_path(object_id)?;
        self.transport().get(&path, CallKind::Read, opts)
    }

    /// Adds or replaces a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule's object ID is empty or the request
    /// fails.
    pub fn save_rule(
        &self,
        rule: &Rule,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<SaveRuleRes> {
        let path = format!(
            "{}?forwardToReplicas={forward_to_replicas}",
            self.rule_path(&rule.object_id)?
        );
        self.transport().put(&path, rule, opts)
    }

    /// Deletes the rule identified by `object_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `object_id` is empty or the request fails.
    pub fn delete_rule(
        &self,
        object_id: &str,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<DeleteRuleRes> {
        let path = format!(
            "{}?forwardToReplicas={forward_to_replicas}",
            self.rule_path(object_id)?
        );
        self.transport().delete(&path, opts)
    }

    /// Removes every rule from the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn clear_rules(
        &self,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<ClearRulesRes> {
        let path = format!(
            "{}/rules/clear?forwardToReplicas={forward_to_replicas}",
            self.route()
        );
        self.transport()
            .post(&path, &serde_json::json!({}), CallKind::Write, opts)
    }

    /// Saves every given rule in one write, optionally clearing existing
    /// ones first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn batch_rules(
        &self,
        rules: &[Rule],
        forward_to_replicas: bool,
        clear_existing_rules: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRulesRes> {
        let path = format!(
            "{}/rules/batch?forwardToReplicas={forward_to_replicas}&clearExistingRules={clear_existing_rules}",
            self.route()
        );
        self.transport().post(&path, &rules, CallKind::Write, opts)
    }

    /// Searches the index's rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn search_rules(
        &self,
        params: &SearchRulesParams,
        opts: Option<&RequestOptions>,
    ) -> Result<SearchRulesRes> {
        let path = format!("{}/rules/search", self.route());
        self.transport().post(&path, params, CallKind::Read, opts)
    }

    fn rule_path(&self, object_id: &str) -> Result<String> {
        if object_id.is_empty() {
            return Err(Error::InvalidInput("rule object ID is empty".to_string()));
        }
        Ok(format!(
            "{}/rules/{}",
            self.route(),
            urlencoding::encode(object_id)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::transport::Transport;
    use std::sync::Arc;

    fn test_index() -> Index {
        let transport = Transport::new(&ClientConfig::new("app", "key")).unwrap();
        Index::new(Arc::new(transport), "contacts")
    }

    #[test]
    fn test_rule_path() {
        let index = test_index();
        assert_eq!(
            index.rule_path("remove_js").unwrap(),
            "/1/indexes/contacts/rules/remove_js"
        );
        assert!(index.rule_path("").is_err());
    }

    #[test]
    fn test_search_rules_params_body() {
        let params = SearchRulesParams::new()
            .with_query("coffee")
            .with_hits_per_page(5);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "coffee", "hitsPerPage": 5})
        );
    }
}
