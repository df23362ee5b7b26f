//! Catalog ingestion, store, and query engine for PromoHub.
//!
//! This crate turns a pasted JSON document of promotional products into a
//! browsable catalog:
//!
//! - **Ingestion**: validate and normalize untrusted input, all-or-nothing
//! - **Catalog store**: the owned product list plus the active query parameters
//! - **Query engine**: pure derivation of the filtered, sorted view model
//!
//! # Example
//!
//! ```rust
//! use promo_catalog::prelude::*;
//!
//! let mut store = CatalogStore::new();
//! store.ingest(
//!     r#"[{"name": "Gaming Mechanical Keyboard", "price": 129.99,
//!          "originalPrice": 179.99, "type": "Electronics",
//!          "link": "https://example.com/keyboard"}]"#,
//! )?;
//!
//! store.set_search_text("key");
//! let view = store.view();
//! assert_eq!(view.result_count, 1);
//! assert_eq!(view.max_discount, 28);
//! # Ok::<(), promo_catalog::CatalogError>(())
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod ingest;
pub mod query;

pub use catalog::{CatalogStore, Product};
pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{derive_discount, CatalogStore, Product};
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::ingest::{parse_catalog, sample_document};
    pub use crate::query::{
        evaluate, CatalogView, CategoryFilter, PriceRange, QueryParams, SortDirection, SortKey,
        ViewMode, ALL_CATEGORIES,
    };
}
