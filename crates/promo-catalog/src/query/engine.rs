//! The query engine: a pure derivation from products and parameters to a
//! view model.
//!
//! Deterministic and side-effect free. Same inputs always produce the
//! same output, order included. There is no caching and no partial
//! invalidation; callers recompute on every change.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::query::params::{QueryParams, SortDirection, SortKey, ALL_CATEGORIES};
use crate::query::view::CatalogView;

/// Derive the view model for `products` under `params`.
pub fn evaluate(products: &[Product], params: &QueryParams) -> CatalogView {
    let categories = facets(products);

    let mut items: Vec<Product> = products
        .iter()
        .filter(|product| passes(product, params))
        .cloned()
        .collect();
    sort(&mut items, params.sort_by, params.sort_order);

    let result_count = items.len();
    let max_discount = items
        .iter()
        .map(Product::discount_or_zero)
        .max()
        .unwrap_or(0);

    CatalogView {
        items,
        categories,
        result_count,
        max_discount,
    }
}

/// Distinct `type` values in first-seen order, with the sentinel first.
pub fn facets(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories[1..].contains(&product.kind) {
            categories.push(product.kind.clone());
        }
    }
    categories
}

/// A product passes iff all three predicates hold: search text, category
/// facet, and price window.
fn passes(product: &Product, params: &QueryParams) -> bool {
    matches_search(product, &params.search_text)
        && params.category.matches(&product.kind)
        && params.price_range.contains(product.price)
}

/// Case-insensitive substring match over name, description, and type.
/// An empty needle matches everything.
fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
        || product.kind.to_lowercase().contains(&needle)
}

/// Stable sort. `Descending` reverses the comparator itself, so records
/// with equal keys keep their input order in both directions.
fn sort(items: &mut [Product], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// The per-key comparator. `Name` lower-cases both sides, so direction
/// never changes which key is compared.
fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Discount => a.discount_or_zero().cmp(&b.discount_or_zero()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::query::params::{CategoryFilter, PriceRange};

    fn product(name: &str, price: f64, kind: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            price,
            original_price: None,
            kind: kind.to_string(),
            category: kind.to_string(),
            link: format!("https://example.com/{}", name.to_lowercase()),
            image: None,
            description: None,
            discount: None,
        }
    }

    fn with_discount(mut p: Product, original: f64, discount: u8) -> Product {
        p.original_price = Some(original);
        p.discount = Some(discount);
        p
    }

    fn catalog() -> Vec<Product> {
        vec![
            with_discount(product("Keyboard", 129.99, "Keyboard"), 179.99, 28),
            product("Monitor", 299.99, "Monitor"),
            with_discount(product("headset", 49.99, "Audio"), 99.99, 50),
        ]
    }

    #[test]
    fn test_keyboard_search_scenario() {
        let products = vec![
            with_discount(product("Keyboard", 129.99, "Keyboard"), 179.99, 28),
            product("Monitor", 299.99, "Monitor"),
        ];
        let params = QueryParams {
            search_text: "key".to_string(),
            price_range: PriceRange::new(0.0, 1000.0),
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        assert_eq!(view.result_count, 1);
        assert_eq!(view.items[0].name, "Keyboard");
        assert_eq!(view.items[0].discount, Some(28));
        assert_eq!(view.max_discount, 28);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let products = catalog();
        let params = QueryParams::default();
        let first = evaluate(&products, &params);
        let second = evaluate(&products, &params);
        assert_eq!(first.items, second.items);
        assert_eq!(first.categories, second.categories);
        assert_eq!(first.max_discount, second.max_discount);
    }

    #[test]
    fn test_search_matches_name_description_and_type() {
        let mut described = product("Mystery Box", 10.0, "Misc");
        described.description = Some("Contains a KEYBOARD surprise".to_string());
        let products = vec![
            described,
            product("Keyboard", 129.99, "Keyboard"),
            product("Numpad", 20.0, "Keyboard"),
            product("Monitor", 299.99, "Monitor"),
        ];
        let params = QueryParams {
            search_text: "keyboard".to_string(),
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        // Description and type match too; only the monitor is excluded.
        assert_eq!(view.result_count, 3);
    }

    #[test]
    fn test_category_filter_exact_type_match() {
        let products = catalog();
        let params = QueryParams {
            category: CategoryFilter::Only("Audio".to_string()),
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        assert_eq!(view.result_count, 1);
        assert_eq!(view.items[0].name, "headset");
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let products = catalog();
        let params = QueryParams {
            price_range: PriceRange::new(49.99, 129.99),
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        let names: Vec<&str> = view.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["headset", "Keyboard"]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let products = catalog();
        let view = evaluate(&products, &QueryParams::default());
        let names: Vec<&str> = view.items.iter().map(|p| p.name.as_str()).collect();
        // "headset" sorts between "Keyboard" and "Monitor" despite its case.
        assert_eq!(names, vec!["headset", "Keyboard", "Monitor"]);
    }

    #[test]
    fn test_descending_reverses_comparator() {
        let products = catalog();
        let params = QueryParams {
            sort_by: SortKey::Price,
            sort_order: SortDirection::Descending,
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        let prices: Vec<f64> = view.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![299.99, 129.99, 49.99]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let products = vec![
            product("Zed", 10.0, "A"),
            product("Alpha", 10.0, "A"),
            product("Mid", 10.0, "A"),
        ];
        let params = QueryParams {
            sort_by: SortKey::Price,
            ..QueryParams::default()
        };

        // Equal prices keep input order, ascending and descending alike.
        let ascending = evaluate(&products, &params);
        let names: Vec<&str> = ascending.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Alpha", "Mid"]);

        let params = QueryParams {
            sort_order: SortDirection::Descending,
            ..params
        };
        let descending = evaluate(&products, &params);
        let names: Vec<&str> = descending.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Alpha", "Mid"]);
    }

    #[test]
    fn test_sort_by_discount_treats_absent_as_zero() {
        let products = catalog();
        let params = QueryParams {
            sort_by: SortKey::Discount,
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        let discounts: Vec<u8> = view.items.iter().map(Product::discount_or_zero).collect();
        assert_eq!(discounts, vec![0, 28, 50]);
    }

    #[test]
    fn test_facet_set_has_no_duplicates() {
        let products = vec![
            product("A1", 1.0, "A"),
            product("B1", 2.0, "B"),
            product("A2", 3.0, "A"),
        ];
        assert_eq!(facets(&products), vec!["all", "A", "B"]);
    }

    #[test]
    fn test_empty_result_summaries_are_zero() {
        let products = catalog();
        let params = QueryParams {
            search_text: "no such product".to_string(),
            ..QueryParams::default()
        };

        let view = evaluate(&products, &params);
        assert!(view.is_empty());
        assert_eq!(view.result_count, 0);
        assert_eq!(view.max_discount, 0);
        // Facets still reflect the full catalog.
        assert_eq!(view.categories.len(), 4);
    }

    #[test]
    fn test_empty_catalog_evaluates_cleanly() {
        let view = evaluate(&[], &QueryParams::default());
        assert_eq!(view.result_count, 0);
        assert_eq!(view.max_discount, 0);
        assert_eq!(view.categories, vec!["all"]);
    }
}
