//! # Catalog Model and Parsing
//!
//! This module defines the data structures that represent the product catalog
//! input file, as well as the logic for parsing and validating it.
//!
//! ## Key Components
//!
//! - **`Catalog`**: The root `{ "products": [...] }` document.
//! - **`Product`**: A sellable item with an id, name, base description, and an
//!   ordered list of options.
//! - **`ProductOption`**: A named axis of configurability (e.g. `Color`) with an
//!   ordered list of values.
//! - **`OptionValue`**: Either a bare label (`"Red"`) or an `Override` object.
//! - **`Override`**: A value carrying a label plus optional `price`,
//!   `description`, and any number of extra attributes that are copied onto
//!   every variant using it.
//!
//! ## Validation
//!
//! Parsing is strict. Beyond the shape checks serde performs, `Catalog::validate`
//! rejects catalogs whose option names or override attributes would overwrite
//! one of the base variant fields once lower-cased, and duplicate option names
//! within a product. Empty labels and options with no values are accepted;
//! the latter expand to zero variants.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::variant::RESERVED_FIELDS;

/// A free-form attribute value carried by an override.
///
/// This is the closed set of JSON shapes an extra attribute may take. Numbers
/// keep their original representation so `50` is written back as `50`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<AttributeValue>),
    Map(IndexMap<String, AttributeValue>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value.into())
    }
}

/// An option value that carries per-choice data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Override {
    /// The label written into the option's field on the variant.
    pub name: String,

    /// Candidate price; the variant keeps the highest price on its path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<serde_json::Number>,

    /// Replaces the product description unless an earlier option already did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Every other key, copied onto the variant with a lower-cased name.
    #[serde(flatten)]
    pub attributes: IndexMap<String, AttributeValue>,
}

impl Override {
    /// Create an override with only a label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            description: None,
            attributes: IndexMap::new(),
        }
    }

    /// Set the price.
    pub fn with_price(mut self, price: impl Into<serde_json::Number>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an extra attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// One choice along an option's axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[serde(expecting = "an option value: a label string or an object with a \"name\" field")]
pub enum OptionValue {
    /// A plain label such as `"Red"`.
    Label(String),
    /// A label with price, description, or extra attributes.
    Override(Override),
}

impl OptionValue {
    /// The label written into the variant for this value.
    pub fn label(&self) -> &str {
        match self {
            OptionValue::Label(label) => label,
            OptionValue::Override(o) => &o.name,
        }
    }

    /// Returns the override data, if this value carries any.
    pub fn as_override(&self) -> Option<&Override> {
        match self {
            OptionValue::Label(_) => None,
            OptionValue::Override(o) => Some(o),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(label: &str) -> Self {
        OptionValue::Label(label.to_string())
    }
}

impl From<Override> for OptionValue {
    fn from(value: Override) -> Self {
        OptionValue::Override(value)
    }
}

/// A named axis of configurability for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<OptionValue>,
}

impl ProductOption {
    pub fn new<V: Into<OptionValue>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The variant field this option writes its label into.
    pub fn field_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A product whose options are expanded into variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Fallback description for variants no override describes.
    pub description: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Append an option.
    pub fn with_option(mut self, option: ProductOption) -> Self {
        self.options.push(option);
        self
    }

    /// Number of variants this product expands to.
    ///
    /// This is the product of the value counts of every option: 1 when there
    /// are no options, 0 when any option has no values. Saturates at
    /// `usize::MAX`.
    pub fn combination_count(&self) -> usize {
        self.options
            .iter()
            .fold(1usize, |acc, option| acc.saturating_mul(option.values.len()))
    }

    /// Check the structural rules the expander relies on.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<String> = Vec::with_capacity(self.options.len());

        for option in &self.options {
            let field = option.field_name();
            if RESERVED_FIELDS.contains(&field.as_str()) {
                return Err(self.schema_error(format!(
                    "option '{}' collides with the base field '{}'",
                    option.name, field
                )));
            }
            if seen.contains(&field) {
                return Err(self.schema_error(format!(
                    "option '{}' is declared more than once",
                    option.name
                )));
            }
            seen.push(field);

            for value in &option.values {
                if let Some(data) = value.as_override() {
                    for key in data.attributes.keys() {
                        let lowered = key.to_lowercase();
                        if lowered == "name" || RESERVED_FIELDS.contains(&lowered.as_str()) {
                            return Err(self.schema_error(format!(
                                "attribute '{}' on value '{}' of option '{}' collides with the reserved field '{}'",
                                key, data.name, option.name, lowered
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn schema_error(&self, message: String) -> Error {
        Error::Schema {
            product_id: self.id,
            message,
        }
    }
}

/// The catalog input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Validate every product, stopping at the first violation.
    pub fn validate(&self) -> Result<()> {
        self.products.iter().try_for_each(Product::validate)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Parses and validates a catalog from a JSON string.
pub fn parse(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|e| Error::InputRead {
        path: None,
        message: e.to_string(),
    })?;
    catalog.validate()?;
    Ok(catalog)
}

/// Reads, parses, and validates a catalog file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::InputRead {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;

    parse(&content).map_err(|e| match e {
        Error::InputRead { path: None, message } => Error::InputRead {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}
