//! Helpers for the control plane's JSON documents.
//!
//! Documents are kept as raw [`serde_json::Value`] so a fetched document can
//! be written back with every field the CLI does not know about intact.

use admiral_common::types::CustomProperties;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CUSTOM_PROPERTIES_FIELD: &str = "customProperties";
const SELF_LINK_FIELD: &str = "documentSelfLink";

/// Result of a collection query with `expand=true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryResult {
    /// Links of the matching documents, in service order.
    pub document_links: Vec<String>,
    /// Expanded documents keyed by link.
    pub documents: Map<String, Value>,
}

impl QueryResult {
    /// Returns the matching documents in `document_links` order.
    ///
    /// Links with no expanded body are skipped.
    pub fn ordered_documents(&self) -> impl Iterator<Item = &Value> {
        self.document_links
            .iter()
            .filter_map(|link| self.documents.get(link))
    }
}

/// Builds the link of a document in `collection`.
///
/// An `id` that is already a full link under the collection is kept as is.
#[must_use]
pub fn document_link(collection: &str, id: &str) -> String {
    if id.starts_with(collection) {
        id.to_string()
    } else {
        format!("{collection}/{}", id.trim_start_matches('/'))
    }
}

/// Returns the document's own link.
#[must_use]
pub fn self_link(doc: &Value) -> Option<&str> {
    doc.get(SELF_LINK_FIELD).and_then(Value::as_str)
}

/// Reads all custom properties of a document, hidden ones included.
///
/// Null values are skipped; non-string scalars are rendered as text.
#[must_use]
pub fn custom_properties(doc: &Value) -> CustomProperties {
    let Some(props) = doc.get(CUSTOM_PROPERTIES_FIELD).and_then(Value::as_object) else {
        return CustomProperties::new();
    };
    props
        .iter()
        .filter_map(|(k, v)| match v {
            Value::Null => None,
            Value::String(s) => Some((k.clone(), s.clone())),
            other => Some((k.clone(), other.to_string())),
        })
        .collect()
}

/// Sets `keys[i] = values[i]` in the document's custom properties.
///
/// Keys without a matching value get the empty string.
pub fn merge_custom_properties(doc: &mut Value, keys: &[String], values: &[String]) {
    let Some(props) = properties_mut(doc) else {
        return;
    };
    for (i, key) in keys.iter().enumerate() {
        let value = values.get(i).cloned().unwrap_or_default();
        let _ = props.insert(key.clone(), Value::String(value));
    }
}

/// Removes the given keys from the document's custom properties.
///
/// Returns how many keys were actually present.
pub fn remove_custom_properties(doc: &mut Value, keys: &[String]) -> usize {
    let Some(props) = properties_mut(doc) else {
        return 0;
    };
    keys.iter().filter(|k| props.remove(k.as_str()).is_some()).count()
}

fn properties_mut(doc: &mut Value) -> Option<&mut Map<String, Value>> {
    let obj = doc.as_object_mut()?;
    let entry = obj
        .entry(CUSTOM_PROPERTIES_FIELD)
        .or_insert_with(|| Value::Object(Map::new()));
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }
    entry.as_object_mut()
}
