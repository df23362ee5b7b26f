//! The catalog store: owned product list plus active query parameters.

use tracing::{debug, info};

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ingest;
use crate::query::{
    evaluate, CatalogView, CategoryFilter, PriceRange, QueryParams, SortDirection, SortKey,
    ViewMode,
};

/// Owns the current product list and the user's query parameters.
///
/// All mutation funnels through this API; the query engine only ever
/// reads. The product list is replaced wholesale, never edited in place,
/// and a failed ingestion leaves the previous list intact.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    params: QueryParams,
}

impl CatalogStore {
    /// Create an empty store with default query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input` and replace the product list with the result.
    ///
    /// Returns the number of ingested records. On any parse or validation
    /// failure the store is left unchanged.
    pub fn ingest(&mut self, input: &str) -> Result<usize, CatalogError> {
        let products = ingest::parse_catalog(input)?;
        let count = products.len();
        self.products = products;
        info!(count, "catalog replaced");
        Ok(count)
    }

    /// Replace the product list with an already-normalized set.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// The current product list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The active query parameters.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Set the free-text search filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.params.search_text = text.into();
    }

    /// Select a category facet. Any name is accepted; one that no longer
    /// exists in the catalog simply matches nothing until the filters
    /// are reset.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.params.category = category;
    }

    /// Set the price window. Inverted bounds are swapped, then both ends
    /// are clamped into the catalog's global price span, so the engine
    /// never sees an inconsistent range.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        let range = PriceRange::new(min, max).normalized();
        self.params.price_range = if self.products.is_empty() {
            range
        } else {
            range.clamped_to(&self.price_span())
        };
    }

    /// Set the sort key and direction.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.params.sort_by = key;
        self.params.sort_order = direction;
    }

    /// Set the presentation mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.params.view_mode = mode;
    }

    /// Restore the derived defaults: the full price span of the current
    /// catalog, all categories, name ascending. The view mode is a
    /// presentation preference and survives the reset.
    pub fn reset_filters(&mut self) {
        let view_mode = self.params.view_mode;
        self.params = QueryParams {
            price_range: self.price_span(),
            view_mode,
            ..QueryParams::default()
        };
        debug!("query parameters reset");
    }

    /// The global price span over the current catalog, or the default
    /// span when the catalog is empty.
    pub fn price_span(&self) -> PriceRange {
        PriceRange::span_of(&self.products)
    }

    /// Derive the current view model.
    pub fn view(&self) -> CatalogView {
        evaluate(&self.products, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
        {"name": "Keyboard", "price": 129.99, "originalPrice": 179.99,
         "type": "Keyboard", "link": "https://example.com/kb"},
        {"name": "Monitor", "price": 299.99, "type": "Monitor",
         "link": "https://example.com/mon"}
    ]"#;

    #[test]
    fn test_ingest_replaces_wholesale() {
        let mut store = CatalogStore::new();
        assert_eq!(store.ingest(VALID).unwrap(), 2);

        let replacement = r#"[{"name": "Lamp", "price": 15, "type": "Home",
                              "link": "https://example.com/lamp"}]"#;
        assert_eq!(store.ingest(replacement).unwrap(), 1);
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].name, "Lamp");
    }

    #[test]
    fn test_failed_ingest_leaves_store_unchanged() {
        let mut store = CatalogStore::new();
        store.ingest(VALID).unwrap();
        let before: Vec<String> = store.products().iter().map(|p| p.name.clone()).collect();

        let broken = r#"[
            {"name": "Ok", "price": 10, "type": "T", "link": "https://ok"},
            {"name": "Missing link", "price": 10, "type": "T"}
        ]"#;
        let err = store.ingest(broken).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation {
                index: 1,
                field: "link"
            }
        ));

        let after: Vec<String> = store.products().iter().map(|p| p.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_price_range_setter_swaps_and_clamps() {
        let mut store = CatalogStore::new();
        store.ingest(VALID).unwrap();

        store.set_price_range(400.0, 50.0);
        let range = store.params().price_range;
        // Swapped to (50, 400), then clamped into the catalog span.
        assert_eq!(range.min, 129.99);
        assert_eq!(range.max, 299.99);
    }

    #[test]
    fn test_price_range_setter_without_catalog_only_swaps() {
        let mut store = CatalogStore::new();
        store.set_price_range(500.0, 100.0);
        let range = store.params().price_range;
        assert_eq!((range.min, range.max), (100.0, 500.0));
    }

    #[test]
    fn test_reset_restores_span_and_defaults_but_keeps_view_mode() {
        let mut store = CatalogStore::new();
        store.ingest(VALID).unwrap();
        store.set_search_text("key");
        store.set_category(CategoryFilter::from_name("Keyboard"));
        store.set_sort(SortKey::Discount, SortDirection::Descending);
        store.set_view_mode(ViewMode::List);
        store.set_price_range(0.0, 150.0);

        store.reset_filters();
        let params = store.params();
        assert_eq!(params.search_text, "");
        assert_eq!(params.category, CategoryFilter::All);
        assert_eq!(params.sort_by, SortKey::Name);
        assert_eq!(params.sort_order, SortDirection::Ascending);
        assert_eq!(params.view_mode, ViewMode::List);
        assert_eq!(params.price_range, store.price_span());
    }

    #[test]
    fn test_view_reflects_current_params() {
        let mut store = CatalogStore::new();
        store.ingest(VALID).unwrap();

        store.set_search_text("key");
        let view = store.view();
        assert_eq!(view.result_count, 1);
        assert_eq!(view.items[0].name, "Keyboard");
        assert_eq!(view.max_discount, 28);

        store.set_search_text("");
        assert_eq!(store.view().result_count, 2);
    }

    #[test]
    fn test_stale_category_matches_nothing() {
        let mut store = CatalogStore::new();
        store.ingest(VALID).unwrap();
        store.set_category(CategoryFilter::from_name("Discontinued"));
        assert_eq!(store.view().result_count, 0);
    }

    #[test]
    fn test_empty_store_price_span_is_default() {
        let store = CatalogStore::new();
        let span = store.price_span();
        assert_eq!((span.min, span.max), (0.0, 1000.0));
    }
}
