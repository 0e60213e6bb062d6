//! Client-side product matching used when server search is unavailable

use std::collections::HashSet;
use storefront_model::{Product, SearchField};

/// Case-insensitive substring match of `needle` against any of `fields`.
///
/// `needle` must already be lowercased.
pub fn matches_product(
    product: &Product,
    needle: &str,
    fields: &[SearchField],
) -> bool {
    fields.iter().any(|field| {
        product
            .field_text(*field)
            .into_iter()
            .any(|text| text.to_lowercase().contains(needle))
    })
}

/// Filter `products` in source order, keeping at most `limit` matches.
pub fn filter_products(
    products: &[Product],
    query: &str,
    fields: &[SearchField],
    limit: usize,
) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    dedupe_and_truncate(
        products
            .iter()
            .filter(|product| matches_product(product, &needle, fields))
            .cloned(),
        limit,
    )
}

/// Drop repeated product ids (first occurrence wins) and cap the count.
pub fn dedupe_and_truncate(
    products: impl IntoIterator<Item = Product>,
    limit: usize,
) -> Vec<Product> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|product| seen.insert(product.id))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1u64, "LED Desk Lamp").with_category("Lighting"),
            Product::new(2u64, "Wooden Chair")
                .with_description("Pairs well with a led strip"),
            Product::new(3u64, "Speaker").with_company("Ledger Audio"),
            Product::new(4u64, "Cable").with_tags(["usb", "LEDs"]),
            Product::new(5u64, "Mug").with_category("Kitchen"),
        ]
    }

    #[test]
    fn matches_every_fallback_field_case_insensitively() {
        let results =
            filter_products(&catalog(), "LeD", &SearchField::FALLBACK, 8);
        let ids: Vec<u64> = results.iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn restricts_matching_to_requested_fields() {
        let results =
            filter_products(&catalog(), "led", &[SearchField::Title], 8);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "LED Desk Lamp");
    }

    #[test]
    fn no_match_yields_empty_results() {
        assert!(
            filter_products(&catalog(), "sofa", &SearchField::FALLBACK, 8)
                .is_empty()
        );
        assert!(
            filter_products(&catalog(), "   ", &SearchField::FALLBACK, 8)
                .is_empty()
        );
    }

    #[test]
    fn caps_results_and_drops_duplicate_ids() {
        let products: Vec<Product> = (0..12u64)
            .map(|i| Product::new(i % 10, format!("Lamp {i}")))
            .collect();

        let results =
            filter_products(&products, "lamp", &SearchField::FALLBACK, 8);

        assert_eq!(results.len(), 8);
        let unique: HashSet<_> = results.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), 8);
        assert_eq!(results[0].title, "Lamp 0");
    }
}
