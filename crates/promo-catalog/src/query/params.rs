//! User-controlled query parameters.

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::Product;

/// Sentinel facet name that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Upper bound of the price window used before any catalog-derived span
/// exists.
pub const DEFAULT_PRICE_CEILING: f64 = 1000.0;

/// Sort keys over the filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic by lower-cased name.
    #[default]
    Name,
    /// Numeric by current price.
    Price,
    /// Numeric by discount percentage, absent counting as 0.
    Discount,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Discount => "discount",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "price" => Some(SortKey::Price),
            "discount" => Some(SortKey::Discount),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Discount => "Discount",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first; reverses the comparator, not the final list.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// The opposite direction (the toggle button in the original UI).
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Grid or list presentation. Never affects the derived data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// Category facet selection: everything, or one named facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "all" sentinel: no category restriction.
    #[default]
    All,
    /// Restrict to products whose `type` equals this facet exactly.
    Only(String),
}

impl CategoryFilter {
    /// Parse a facet name; the "all" sentinel is matched case-insensitively.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    /// Whether a product with this `type` passes the filter.
    pub fn matches(&self, kind: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == kind,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Swap the bounds if they arrived inverted.
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self {
                min: self.max,
                max: self.min,
            }
        } else {
            self
        }
    }

    /// Clamp both ends into `span`.
    pub fn clamped_to(self, span: &PriceRange) -> Self {
        Self {
            min: self.min.clamp(span.min, span.max),
            max: self.max.clamp(span.min, span.max),
        }
    }

    /// Whether `price` falls inside the window, bounds included.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// The smallest window covering every product, or the default window
    /// for an empty catalog.
    pub fn span_of(products: &[Product]) -> Self {
        if products.is_empty() {
            return Self::default();
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for product in products {
            min = min.min(product.price);
            max = max.max(product.price);
        }
        Self { min, max }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

/// The full set of user-controlled filter, sort, and view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct QueryParams {
    /// Free-text search, matched case-insensitively against name,
    /// description, and type.
    pub search_text: String,
    /// Selected category facet.
    pub category: CategoryFilter,
    /// Inclusive price window.
    pub price_range: PriceRange,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortDirection,
    /// Grid or list presentation.
    pub view_mode: ViewMode,
}
