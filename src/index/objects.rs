//! Record indexing and retrieval.

use super::Index;
use crate::models::{
    BatchAction, BatchOperation, BatchRes, CreateObjectRes, DeleteTaskRes, Object, UpdateObjectRes,
    object_id_of,
};
use crate::transport::{CallKind, RequestOptions};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct BatchBody<'a> {
    requests: &'a [BatchOperation],
}

#[derive(Serialize)]
struct GetObjectsRequest<'a> {
    #[serde(rename = "indexName")]
    index_name: &'a str,
    #[serde(rename = "objectID")]
    object_id: &'a str,
    #[serde(
        rename = "attributesToRetrieve",
        skip_serializing_if = "Option::is_none"
    )]
    attributes_to_retrieve: Option<String>,
}

#[derive(Serialize)]
struct GetObjectsBody<'a> {
    requests: Vec<GetObjectsRequest<'a>>,
}

#[derive(Deserialize)]
struct GetObjectsRes {
    #[serde(default)]
    results: Vec<Option<Object>>,
}

impl Index {
    /// Adds a record, letting the service assign its `objectID`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn add_object(
        &self,
        object: &Object,
        opts: Option<&RequestOptions>,
    ) -> Result<CreateObjectRes> {
        self.transport()
            .post(self.route(), object, CallKind::Write, opts)
    }

    /// Adds or replaces the record matching the given `objectID`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no string `objectID` or the
    /// request fails.
    pub fn save_object(
        &self,
        object: &Object,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateObjectRes> {
        let path = self.object_path(required_object_id(object)?)?;
        self.transport().put(&path, object, opts)
    }

    /// Partially updates the record matching the given `objectID`, creating
    /// it when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no string `objectID` or the
    /// request fails.
    pub fn partial_update_object(
        &self,
        object: &Object,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateObjectRes> {
        self.partial_update(object, true, opts)
    }

    /// Partially updates the record matching the given `objectID`, skipping
    /// the write when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no string `objectID` or the
    /// request fails.
    pub fn partial_update_object_no_create(
        &self,
        object: &Object,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateObjectRes> {
        self.partial_update(object, false, opts)
    }

    fn partial_update(
        &self,
        object: &Object,
        create_if_missing: bool,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateObjectRes> {
        let path = format!(
            "{}/partial?createIfNotExists={create_if_missing}",
            self.object_path(required_object_id(object)?)?
        );
        self.transport().post(&path, object, CallKind::Write, opts)
    }

    /// Deletes the record matching `object_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `object_id` is empty or the request fails.
    pub fn delete_object(
        &self,
        object_id: &str,
        opts: Option<&RequestOptions>,
    ) -> Result<DeleteTaskRes> {
        let path = self.object_path(object_id)?;
        self.transport().delete(&path, opts)
    }

    /// Retrieves one record, optionally projecting to the given attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if `object_id` is empty, the record does not exist
    /// (`Error::Api` with status 404) or the request fails.
    pub fn get_object(
        &self,
        object_id: &str,
        attributes: Option<&[&str]>,
        opts: Option<&RequestOptions>,
    ) -> Result<Object> {
        let mut path = self.object_path(object_id)?;
        if let Some(attributes) = attributes {
            path = format!(
                "{path}?attributes={}",
                urlencoding::encode(&attributes.join(","))
            );
        }
        self.transport().get(&path, CallKind::Read, opts)
    }

    /// Retrieves several records in one call, optionally projecting to the
    /// given attributes. Missing records come back as `None`, in the order
    /// of `object_ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if any ID is empty or the request fails.
    pub fn get_objects(
        &self,
        object_ids: &[&str],
        attributes: Option<&[&str]>,
        opts: Option<&RequestOptions>,
    ) -> Result<Vec<Option<Object>>> {
        if object_ids.iter().any(|id| id.is_empty()) {
            return Err(Error::InvalidInput("object ID is empty".to_string()));
        }
        let attributes = attributes.map(|attributes| attributes.join(","));
        let body = GetObjectsBody {
            requests: object_ids
                .iter()
                .map(|object_id| GetObjectsRequest {
                    index_name: self.name(),
                    object_id,
                    attributes_to_retrieve: attributes.clone(),
                })
                .collect(),
        };
        let res: GetObjectsRes =
            self.transport()
                .post("/1/indexes/*/objects", &body, CallKind::Read, opts)?;
        Ok(res.results)
    }

    /// Adds several records, letting the service assign their `objectID`s.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn add_objects(
        &self,
        objects: &[Object],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        self.batch_objects(BatchAction::AddObject, objects, opts)
    }

    /// Adds or replaces several records by their `objectID`s.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn save_objects(
        &self,
        objects: &[Object],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        self.batch_objects(BatchAction::UpdateObject, objects, opts)
    }

    /// Partially updates several records, creating missing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn partial_update_objects(
        &self,
        objects: &[Object],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        self.batch_objects(BatchAction::PartialUpdateObject, objects, opts)
    }

    /// Partially updates several records, skipping missing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn partial_update_objects_no_create(
        &self,
        objects: &[Object],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        self.batch_objects(BatchAction::PartialUpdateObjectNoCreate, objects, opts)
    }

    /// Deletes several records by their `objectID`s.
    ///
    /// # Errors
    ///
    /// Returns an error if any ID is empty or the request fails.
    pub fn delete_objects(
        &self,
        object_ids: &[&str],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        if object_ids.iter().any(|id| id.is_empty()) {
            return Err(Error::InvalidInput("object ID is empty".to_string()));
        }
        let operations: Vec<BatchOperation> = object_ids
            .iter()
            .map(|object_id| {
                let mut body = Object::new();
                body.insert(
                    "objectID".to_string(),
                    serde_json::Value::String((*object_id).to_string()),
                );
                BatchOperation::new(BatchAction::DeleteObject, body)
            })
            .collect();
        self.batch(&operations, opts)
    }

    /// Processes the given operations in one write.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn batch(
        &self,
        operations: &[BatchOperation],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        let path = format!("{}/batch", self.route());
        self.transport().post(
            &path,
            &BatchBody {
                requests: operations,
            },
            CallKind::Write,
            opts,
        )
    }

    fn batch_objects(
        &self,
        action: BatchAction,
        objects: &[Object],
        opts: Option<&RequestOptions>,
    ) -> Result<BatchRes> {
        let operations: Vec<BatchOperation> = objects
            .iter()
            .map(|object| BatchOperation::new(action, object.clone()))
            .collect();
        self.batch(&operations, opts)
    }

    fn object_path(&self, object_id: &str) -> Result<String> {
        if object_id.is_empty() {
            return Err(Error::InvalidInput("object ID is empty".to_string()));
        }
        Ok(format!(
            "{}/{}",
            self.route(),
            urlencoding::encode(object_id)
        ))
    }
}

fn required_object_id(object: &Object) -> Result<&str> {
    object_id_of(object)
        .ok_or_else(|| Error::InvalidInput("record has no string objectID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::transport::Transport;
    use serde_json::json;
    use std::sync::Arc;

    fn test_index() -> Index {
        let transport = Transport::new(&ClientConfig::new("app", "key")).unwrap();
        Index::new(Arc::new(transport), "contacts")
    }

    #[test]
    fn test_object_path_encoding() {
        let index = test_index();
        assert_eq!(
            index.object_path("rec 1/2").unwrap(),
            "/1/indexes/contacts/rec%201%2F2"
        );
        assert!(index.object_path("").is_err());
    }

    #[test]
    fn test_save_object_requires_object_id() {
        let index = test_index();
        let mut object = Object::new();
        object.insert("name".to_string(), json!("Jimmie"));
        assert!(matches!(
            index.save_object(&object, None),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_delete_objects_rejects_empty_id() {
        let index = test_index();
        assert!(matches!(
            index.delete_objects(&["ok", ""], None),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_get_objects_request_shape() {
        let body = GetObjectsBody {
            requests: vec![GetObjectsRequest {
                index_name: "contacts",
                object_id: "rec-1",
                attributes_to_retrieve: Some("name,age".to_string()),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "requests": [{
                    "indexName": "contacts",
                    "objectID": "rec-1",
                    "attributesToRetrieve": "name,age"
                }]
            })
        );
    }
}
