//! Product entity stored in the catalog collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Keys owned by the record itself; attributes may not shadow them
pub const RESERVED_FIELDS: [&str; 4] = ["_id", "id", "name", "creation_date"];

/// Whether `key` names one of the record's own fields
pub fn is_reserved_field(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

/// A catalog product.
///
/// Only `name` and `creation_date` carry meaning for the catalog; every other
/// field of the stored record is kept in `attributes` and flattened back into
/// the serialized document. Attributes never use a [`RESERVED_FIELDS`] key, so
/// the document has exactly one of each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Display name, searched case-insensitively
    pub name: String,

    /// When the product entered the catalog
    pub creation_date: DateTime<Utc>,

    /// Remaining free-form fields of the record
    #[serde(flatten, default)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Creates a product with a fresh identifier and no extra attributes
    pub fn new(name: impl Into<String>, creation_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            creation_date,
            attributes: Map::new(),
        }
    }

    /// Adds a free-form attribute; reserved keys are dropped
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if is_reserved_field(&key) {
            tracing::warn!(product_id = %self.id, key = %key, "Dropping attribute that shadows a product field");
        } else {
            self.attributes.insert(key, value.into());
        }
        self
    }

    /// Adds every entry of `attributes`, dropping reserved keys
    pub fn with_attributes(self, attributes: Map<String, Value>) -> Self {
        attributes
            .into_iter()
            .fold(self, |product, (key, value)| product.with_attribute(key, value))
    }
}
