//! Session state models: catalog, cart, and buyer.
//!
//! Each model owns its state behind a `RefCell`, is constructed once with an
//! injected [`EventBus`](crate::events::EventBus) reference, and announces
//! actual state changes on the bus after its internal borrow is released, so
//! nested handlers may read the model freely. Reads hand out clones only;
//! nothing outside a model can touch its canonical state.

mod buyer;
mod cart;
mod catalog;

pub use buyer::{BuyerData, BuyerModel, ValidationErrors};
pub use cart::{CartError, CartModel};
pub use catalog::CatalogModel;
