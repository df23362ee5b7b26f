//! Query module.
//!
//! User-controlled parameters, the pure evaluation engine, and the
//! derived view model handed to presentation layers.

mod engine;
mod params;
mod view;

pub use engine::{evaluate, facets};
pub use params::{
    CategoryFilter, PriceRange, QueryParams, SortDirection, SortKey, ViewMode, ALL_CATEGORIES,
    DEFAULT_PRICE_CEILING,
};
pub use view::CatalogView;
