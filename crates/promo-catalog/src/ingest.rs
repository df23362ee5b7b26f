//! Ingestion pipeline: untrusted JSON text to validated product records.
//!
//! Validation is all-or-nothing. If any element fails, the whole batch is
//! rejected with the index of the first offending element, and whatever
//! catalog the caller already holds stays untouched.

use serde_json::Value;
use tracing::debug;

use crate::catalog::{derive_discount, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Fields every product element must carry with a truthy value.
const REQUIRED_FIELDS: [&str; 4] = ["name", "price", "type", "link"];

/// Parse and normalize a catalog document.
///
/// The input must decode to a JSON array of product objects. Each element
/// needs truthy `name`, `price`, `type`, and `link` fields; `price` and
/// `originalPrice` accept numbers or numeric strings. On success every
/// record gets a fresh id, a `category` defaulted from `type`, and a
/// derived `discount` where the original price warrants one.
pub fn parse_catalog(input: &str) -> Result<Vec<Product>, CatalogError> {
    let document: Value = serde_json::from_str(input)?;
    let items = document.as_array().ok_or(CatalogError::NotAnArray)?;

    let mut products = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        products.push(normalize(index, item)?);
    }

    debug!(count = products.len(), "catalog document parsed");
    Ok(products)
}

/// The canonical example payload shown by "need an example?" affordances.
pub fn sample_document() -> &'static str {
    r#"[
  {
    "name": "Sample Product",
    "price": 29.99,
    "originalPrice": 49.99,
    "type": "Electronics",
    "category": "Gadgets",
    "link": "https://example.com/product",
    "image": "https://example.com/image.jpg",
    "description": "This is a sample product description"
  }
]
"#
}

fn normalize(index: usize, item: &Value) -> Result<Product, CatalogError> {
    for field in REQUIRED_FIELDS {
        if is_falsy(item.get(field)) {
            return Err(CatalogError::Validation { index, field });
        }
    }

    let price = item
        .get("price")
        .and_then(coerce_number)
        .ok_or(CatalogError::Validation {
            index,
            field: "price",
        })?;

    // originalPrice only feeds the discount derivation; a value that is
    // falsy or not numeric is dropped rather than rejected.
    let original_price = item
        .get("originalPrice")
        .filter(|v| !is_falsy(Some(*v)))
        .and_then(coerce_number);

    let kind = coerce_text(&item["type"]);
    let category = item
        .get("category")
        .filter(|v| !is_falsy(Some(*v)))
        .map(coerce_text)
        .unwrap_or_else(|| kind.clone());

    Ok(Product {
        id: ProductId::generate(),
        name: coerce_text(&item["name"]),
        price,
        original_price,
        kind,
        category,
        link: coerce_text(&item["link"]),
        image: item.get("image").and_then(Value::as_str).map(str::to_string),
        description: item
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        discount: original_price.and_then(|original| derive_discount(original, price)),
    })
}

/// JSON truthiness as the upload form applies it: `null`, `false`,
/// numeric zero, and the empty string all count as missing.
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !*b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Accept a number, or a string that parses as one.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Required text fields accept any truthy scalar; non-strings keep their
/// JSON rendering.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
