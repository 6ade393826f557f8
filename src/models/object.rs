//! Record representation.

/// One indexed record: a caller-defined JSON object.
///
/// Index schemas are defined by the caller, so records are plain ordered
/// field maps rather than a fixed structure. A record is identified by its
/// `objectID` field.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// Returns the `objectID` of a record, if it carries one as a string.
#[must_use]
pub fn object_id_of(object: &Object) -> Option<&str> {
    object.get("objectID").and_then(serde_json::Value::as_str)
}
