//! The derived view model handed to presentation layers.

use serde::Serialize;

use crate::catalog::Product;

/// Everything a presentation layer needs to render the catalog: the
/// filtered and sorted products, the category facets, and the result
/// summaries. Recomputed in full on every parameter or catalog change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// Filtered and sorted products.
    pub items: Vec<Product>,
    /// Category facets, the "all" sentinel first.
    pub categories: Vec<String>,
    /// Number of products that passed the filters.
    pub result_count: usize,
    /// Highest discount among the results, 0 when there are none.
    pub max_discount: u8,
}

impl CatalogView {
    /// Check if the filters matched nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the view.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
