//! Catalog product and product-list wire types.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog product.
///
/// `price` is `None` for "priceless" products: they are displayed in the
/// catalog but cannot be purchased. `image` is a path relative to the CDN
/// base URL; `category` is a free-form label mapped to a style class by the
/// view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Price in synapses, or `None` when the product has no price.
    pub price: Option<u64>,
    pub description: String,
    /// CDN-relative image path (e.g. `/5_Dots.svg`).
    pub image: String,
    pub category: String,
}

impl Product {
    /// Whether the product can be added to the cart.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

/// Wrapped product-list response from `GET /product`.
///
/// The catalog API serves `{ "total": n, "items": [...] }`; the wrapper
/// shape is the wire contract (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub total: u64,
    pub items: Vec<Product>,
}
