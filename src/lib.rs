//! # Variant Expander Library
//!
//! This library turns a product catalog into the flat list of concrete
//! variants those products can be sold as. Each product declares a set of
//! options (e.g. `Color`, `Finish`), and every combination of one value per
//! option becomes a variant that inherits the product's base data and merges
//! in whatever the chosen values override.
//!
//! ## Quick Example
//!
//! ```
//! use variant_expander::catalog;
//! use variant_expander::expand::expand;
//!
//! let catalog = catalog::parse(r#"{
//!   "products": [{
//!     "id": 1,
//!     "name": "Mug",
//!     "description": "A ceramic mug",
//!     "options": [
//!       { "name": "Color", "values": ["Red", "Blue"] },
//!       { "name": "Finish", "values": [
//!         { "name": "360 wrap print", "price": 50, "description": "Full wrap" },
//!         { "name": "One-sided printing", "price": 45 }
//!       ]}
//!     ]
//!   }]
//! }"#).unwrap();
//!
//! let variants = expand(&catalog.products[0]);
//! assert_eq!(variants.len(), 4);
//! assert_eq!(variants[0].text("color"), Some("Red"));
//! assert_eq!(variants[0].description, "Full wrap");
//! assert_eq!(variants[1].description, "A ceramic mug");
//! ```
//!
//! ## Core Concepts
//!
//! - **Catalog (`catalog`)**: The typed input model and its strict parser.
//! - **Expansion (`expand`)**: The Cartesian-product fold with its price,
//!   description, and attribute merge rules.
//! - **Variants (`variant`)**: The flattened output record.
//! - **Pipeline (`pipeline`)**: Load, expand, render, and write, driven by a
//!   [`RunConfig`](config::RunConfig).

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod expand;
pub mod output;
pub mod pipeline;
pub mod variant;

#[cfg(test)]
mod expand_proptest;
