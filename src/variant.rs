//! The flattened variant record written to the output file.
//!
//! A variant serializes as a single JSON object: the base fields first
//! (`id`, `productId`, `productName`, `description`, and `price` when one was
//! contributed), followed by one field per option and any override attributes
//! in the order they were applied.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::AttributeValue;

/// Base fields whose serialized names are already lower-case.
///
/// Option and attribute keys are lower-cased before they are written, so these
/// are the only base fields they can land on; the catalog validator refuses
/// such keys. `productId` and `productName` can never be produced by
/// lower-casing.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "description", "price"];

/// One fully-resolved combination of option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: Uuid,
    pub product_id: i64,
    pub product_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<serde_json::Number>,
    /// Option labels keyed by lower-cased option name, plus override attributes.
    #[serde(flatten)]
    pub fields: IndexMap<String, AttributeValue>,
}

impl Variant {
    /// Look up an option or attribute field.
    pub fn field(&self, key: &str) -> Option<&AttributeValue> {
        self.fields.get(key)
    }

    /// Look up a field holding text, such as an option label.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(AttributeValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The price as a float, for comparisons.
    pub fn price_f64(&self) -> Option<f64> {
        self.price.as_ref().and_then(serde_json::Number::as_f64)
    }
}
