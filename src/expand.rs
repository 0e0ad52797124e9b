//! # Variant Expansion
//!
//! Expands a product's options into the Cartesian product of their values.
//!
//! The expansion folds over the options left to right, starting from a single
//! empty partial variant. Each option replaces the partial list with every
//! (partial, value) pairing, so the first option is the outermost loop and the
//! last option the innermost. A product with no options yields one variant; an
//! option with no values yields none.
//!
//! ## Merge Rules
//!
//! While walking a combination path, each value writes its label into the
//! field named after its option (lower-cased). Override values additionally:
//!
//! - **price**: raise the running price when theirs is strictly higher, so a
//!   variant ends up with the highest price on its path, or none at all.
//! - **description**: set it only if no earlier value on the path did. Variants
//!   whose path supplies none fall back to the product description.
//! - **attributes**: copy every extra key, lower-cased, overwriting the same key
//!   from an earlier option.
//!
//! Identifiers are assigned once per finished variant.

use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;
use serde_json::Number;
use uuid::Uuid;

use crate::catalog::{AttributeValue, Catalog, OptionValue, Override, Product};
use crate::variant::Variant;

/// A variant under construction, before it has an identifier.
#[derive(Debug, Clone, Default)]
struct Partial {
    description: Option<String>,
    price: Option<Number>,
    fields: IndexMap<String, AttributeValue>,
}

impl Partial {
    /// Derive the partial for this path extended by one more value.
    fn extend(&self, field: &str, value: &OptionValue) -> Partial {
        let mut next = self.clone();
        next.fields
            .insert(field.to_string(), AttributeValue::Text(value.label().to_string()));
        if let Some(data) = value.as_override() {
            next.apply(data);
        }
        next
    }

    fn apply(&mut self, data: &Override) {
        if let Some(price) = &data.price {
            if exceeds(price, self.price.as_ref()) {
                self.price = Some(price.clone());
            }
        }

        if self.description.is_none() {
            self.description.clone_from(&data.description);
        }

        for (key, value) in &data.attributes {
            self.fields.insert(key.to_lowercase(), value.clone());
        }
    }

    fn finish(self, product: &Product, id: Uuid) -> Variant {
        Variant {
            id,
            product_id: product.id,
            product_name: product.name.clone(),
            description: self
                .description
                .unwrap_or_else(|| product.description.clone()),
            price: self.price,
            fields: self.fields,
        }
    }
}

/// Strict comparison: an equal price keeps the one seen first.
fn exceeds(candidate: &Number, current: Option<&Number>) -> bool {
    match current {
        None => true,
        Some(current) => match (candidate.as_f64(), current.as_f64()) {
            (Some(candidate), Some(current)) => candidate > current,
            _ => false,
        },
    }
}

/// Expand a product into its variants, with random v4 identifiers.
pub fn expand(product: &Product) -> Vec<Variant> {
    expand_with_ids(product, Uuid::new_v4)
}

/// Expand a product into its variants, drawing identifiers from `next_id`.
///
/// `next_id` is called exactly once per produced variant, in output order.
pub fn expand_with_ids<F>(product: &Product, mut next_id: F) -> Vec<Variant>
where
    F: FnMut() -> Uuid,
{
    let partials = product
        .options
        .iter()
        .fold(vec![Partial::default()], |partials, option| {
            let field = option.field_name();
            let field = field.as_str();
            partials
                .iter()
                .flat_map(|partial| {
                    option
                        .values
                        .iter()
                        .map(move |value| partial.extend(field, value))
                })
                .collect()
        });

    partials
        .into_iter()
        .map(|partial| partial.finish(product, next_id()))
        .collect()
}

/// Expand every product in the catalog and concatenate the results.
///
/// Products are expanded in parallel; the output keeps catalog order.
pub fn expand_catalog(catalog: &Catalog) -> Vec<Variant> {
    let per_product: Vec<Vec<Variant>> = catalog.products.par_iter().map(expand).collect();

    for (product, variants) in catalog.iter().zip(&per_product) {
        if variants.is_empty() {
            let empty = product
                .options
                .iter()
                .find(|option| option.values.is_empty())
                .map(|option| option.name.as_str())
                .unwrap_or_default();
            warn!(
                "Product {} ({}) expands to no variants: option '{}' has no values",
                product.id, product.name, empty
            );
        } else {
            debug!(
                "Product {} ({}) expanded to {} variants",
                product.id,
                product.name,
                variants.len()
            );
        }
    }

    per_product.into_iter().flatten().collect()
}
