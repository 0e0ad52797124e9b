//! Property-based tests for variant expansion.
//!
//! Products are generated with unique labels per option (`v0`, `v1`, ...) so
//! each variant's combination path can be recovered from its option fields and
//! checked against the merge rules.

#[cfg(test)]
mod proptest_tests {
    use crate::catalog::{AttributeValue, OptionValue, Override, Product, ProductOption};
    use crate::expand::expand;
    use proptest::prelude::*;

    const BASE_DESCRIPTION: &str = "base description";

    fn option_value(index: usize) -> impl Strategy<Value = OptionValue> {
        prop_oneof![
            Just(OptionValue::Label(format!("v{}", index))),
            (
                proptest::option::of(0u32..1000),
                proptest::option::of("[a-z]{1,8}"),
                proptest::option::of(any::<bool>()),
            )
                .prop_map(move |(price, description, flag)| {
                    let mut data = Override::new(format!("v{}", index));
                    data.price = price.map(Into::into);
                    data.description = description;
                    if let Some(flag) = flag {
                        data.attributes.insert("Flag".to_string(), AttributeValue::Bool(flag));
                    }
                    OptionValue::Override(data)
                }),
        ]
    }

    fn product_option(index: usize) -> impl Strategy<Value = ProductOption> {
        (0usize..4).prop_flat_map(move |count| {
            (0..count)
                .map(option_value)
                .collect::<Vec<_>>()
                .prop_map(move |values| ProductOption {
                    name: format!("Opt{}", index),
                    values,
                })
        })
    }

    fn product() -> impl Strategy<Value = Product> {
        (0usize..4)
            .prop_flat_map(|count| (0..count).map(product_option).collect::<Vec<_>>())
            .prop_map(|options| Product {
                id: 42,
                name: "Generated".to_string(),
                description: BASE_DESCRIPTION.to_string(),
                options,
            })
    }

    /// The values a variant chose, in option order.
    fn path<'a>(product: &'a Product, variant: &crate::variant::Variant) -> Vec<&'a OptionValue> {
        product
            .options
            .iter()
            .map(|option| {
                let label = variant
                    .text(&option.field_name())
                    .expect("variant is missing an option field");
                option
                    .values
                    .iter()
                    .find(|value| value.label() == label)
                    .expect("label not drawn from the option's values")
            })
            .collect()
    }

    proptest! {
        /// Property: variant count is the product of the option value counts
        #[test]
        fn variant_count_is_product_of_value_counts(product in product()) {
            let expected: usize = product.options.iter().map(|o| o.values.len()).product();
            prop_assert_eq!(expand(&product).len(), expected);
            prop_assert_eq!(product.combination_count(), expected);
        }

        /// Property: every variant has one label per option, drawn from that option
        #[test]
        fn every_option_is_represented(product in product()) {
            for variant in expand(&product) {
                prop_assert_eq!(variant.product_id, 42);
                let chosen = path(&product, &variant);
                prop_assert_eq!(chosen.len(), product.options.len());
            }
        }

        /// Property: price is the maximum of the prices on the path, or absent
        #[test]
        fn price_is_path_maximum(product in product()) {
            for variant in expand(&product) {
                let expected = path(&product, &variant)
                    .iter()
                    .filter_map(|value| value.as_override())
                    .filter_map(|data| data.price.as_ref())
                    .filter_map(|price| price.as_u64())
                    .max();
                prop_assert_eq!(variant.price.as_ref().and_then(|p| p.as_u64()), expected);
            }
        }

        /// Property: description is the first one on the path, else the base
        #[test]
        fn description_is_first_on_path(product in product()) {
            for variant in expand(&product) {
                let expected = path(&product, &variant)
                    .iter()
                    .filter_map(|value| value.as_override())
                    .find_map(|data| data.description.clone())
                    .unwrap_or_else(|| BASE_DESCRIPTION.to_string());
                prop_assert_eq!(&variant.description, &expected);
            }
        }

        /// Property: an attribute is present exactly when a value on the path set it,
        /// and holds the last value set
        #[test]
        fn attributes_follow_last_write(product in product()) {
            for variant in expand(&product) {
                let expected = path(&product, &variant)
                    .iter()
                    .filter_map(|value| value.as_override())
                    .filter_map(|data| data.attributes.get("Flag"))
                    .last()
                    .cloned();
                prop_assert_eq!(variant.field("flag").cloned(), expected);
            }
        }

        /// Property: JSON serialization round-trips every variant
        #[test]
        fn variants_round_trip_through_json(product in product()) {
            let variants = expand(&product);
            let text = serde_json::to_string(&variants).unwrap();
            let back: Vec<crate::variant::Variant> = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(back, variants);
        }
    }
}
