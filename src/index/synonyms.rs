//! Synonym management.

use super::Index;
use crate::models::{DeleteTaskRes, SearchSynonymsRes, Synonym, UpdateTaskRes};
use crate::transport::{CallKind, RequestOptions};
use crate::{Error, Result};
use serde::Serialize;

#[derive(Serialize)]
struct SearchSynonymsBody<'a> {
    query: &'a str,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    types: String,
    page: u64,
    #[serde(rename = "hitsPerPage")]
    hits_per_page: u64,
}

impl Index {
    /// Retrieves the synonym identified by `object_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `object_id` is empty or the request fails.
    pub fn get_synonym(&self, object_id: &str, opts: Option<&RequestOptions>) -> Result<Synonym> {
        let path = self.synonym_path(object_id)?;
        self.transport().get(&path, CallKind::Read, opts)
    }

    /// Adds or replaces a synonym, optionally forwarding to replicas.
    ///
    /// # Errors
    ///
    /// Returns an error if the synonym's object ID is empty or the request
    /// fails.
    pub fn save_synonym(
        &self,
        synonym: &Synonym,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        let path = format!(
            "{}?forwardToReplicas={forward_to_replicas}",
            self.synonym_path(synonym.object_id())?
        );
        self.transport().put(&path, synonym, opts)
    }

    /// Deletes the synonym identified by `object_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `object_id` is empty or the request fails.
    pub fn delete_synonym(
        &self,
        object_id: &str,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<DeleteTaskRes> {
        let path = format!(
            "{}?forwardToReplicas={forward_to_replicas}",
            self.synonym_path(object_id)?
        );
        self.transport().delete(&path, opts)
    }

    /// Removes every synonym from the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn clear_synonyms(
        &self,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        let path = format!(
            "{}/synonyms/clear?forwardToReplicas={forward_to_replicas}",
            self.route()
        );
        self.transport()
            .post(&path, &serde_json::json!({}), CallKind::Write, opts)
    }

    /// Adds every given synonym in one write, optionally clearing existing
    /// ones first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn batch_synonyms(
        &self,
        synonyms: &[Synonym],
        replace_existing_synonyms: bool,
        forward_to_replicas: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        let path = format!(
            "{}/synonyms/batch?forwardToReplicas={forward_to_replicas}&replaceExistingSynonyms={replace_existing_synonyms}",
            self.route()
        );
        self.transport()
            .post(&path, &synonyms, CallKind::Write, opts)
    }

    /// Searches the index's synonyms.
    ///
    /// `types` restricts the matches to the given synonym types (empty for
    /// all); `page` is zero-based.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn search_synonyms(
        &self,
        query: &str,
        types: &[&str],
        page: u64,
        hits_per_page: u64,
        opts: Option<&RequestOptions>,
    ) -> Result<Vec<Synonym>> {
        let path = format!("{}/synonyms/search", self.route());
        let body = SearchSynonymsBody {
            query,
            types: types.join(","),
            page,
            hits_per_page,
        };
        let res: SearchSynonymsRes = self.transport().post(&path, &body, CallKind::Read, opts)?;
        Ok(res.hits)
    }

    fn synonym_path(&self, object_id: &str) -> Result<String> {
        if object_id.is_empty() {
            return Err(Error::InvalidInput("synonym object ID is empty".to_string()));
        }
        Ok(format!(
            "{}/synonyms/{}",
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
    fn test_synonym_path() {
        let index = test_index();
        assert_eq!(
            index.synonym_path("tv-set").unwrap(),
            "/1/indexes/contacts/synonyms/tv-set"
        );
        assert!(index.synonym_path("").is_err());
    }

    #[test]
    fn test_search_body_omits_empty_types() {
        let body = SearchSynonymsBody {
            query: "tv",
            types: String::new(),
            page: 0,
            hits_per_page: 10,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "tv", "page": 0, "hitsPerPage": 10})
        );

        let body = SearchSynonymsBody {
            query: "tv",
            types: "synonym,placeholder".to_string(),
            page: 0,
            hits_per_page: 10,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "synonym,placeholder");
    }
}
