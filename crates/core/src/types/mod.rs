//! Domain types for the Larek storefront.

mod id;
mod order;
mod product;

pub use id::{IdError, ProductId};
pub use order::{OrderConfirmation, OrderPayload, Payment};
pub use product::{Product, ProductListResponse};
