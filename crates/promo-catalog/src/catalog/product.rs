//! Product records and discount derivation.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One catalog entry: a purchasable or promotable item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned at ingestion time.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: f64,
    /// Pre-discount reference price, when the offer is marked down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Category label; doubles as the filter facet.
    #[serde(rename = "type")]
    pub kind: String,
    /// Finer-grained label; falls back to `kind` when the source omits it.
    pub category: String,
    /// URL of the external offer.
    pub link: String,
    /// Image URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Derived percentage drop from `original_price` to `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Check if the offer is marked down from a higher original price.
    pub fn is_on_sale(&self) -> bool {
        self.discount.is_some()
    }

    /// The discount used for sorting and summaries: absent counts as 0.
    pub fn discount_or_zero(&self) -> u8 {
        self.discount.unwrap_or(0)
    }
}

/// Compute the rounded percentage drop from `original` to `price`.
///
/// Returns `None` unless `original` is strictly greater than `price` and
/// the percentage rounds to at least 1. Rounding is half away from zero.
pub fn derive_discount(original: f64, price: f64) -> Option<u8> {
    if !(original > price) {
        return None;
    }
    let percent = ((original - price) / original * 100.0).round();
    if percent >= 1.0 {
        Some(percent as u8)
    } else {
        None
    }
}
