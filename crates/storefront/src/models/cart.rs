//! Cart model: the purchasable items selected by the user.

use std::cell::RefCell;
use std::rc::Rc;

use larek_core::{Product, ProductId};
use thiserror::Error;

use crate::events::{AppEvent, EventBus};

/// Errors produced by cart mutations.
///
/// These indicate a caller defect (the controller is expected to have
/// filtered unpurchasable products upstream), so callers let them propagate
/// loudly rather than recover.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A product without a price cannot be purchased.
    #[error("priceless product cannot be added to the cart: {0}")]
    Priceless(ProductId),
}

/// Ordered cart contents, unique by product id.
///
/// Insertion order is display order. Duplicate adds and removals of absent
/// ids are logged no-ops, not errors: the UI is expected to prevent them,
/// and repeating a mutation must not corrupt state.
pub struct CartModel {
    bus: Rc<EventBus>,
    items: RefCell<Vec<Product>>,
}

impl CartModel {
    #[must_use]
    pub fn new(bus: Rc<EventBus>) -> Self {
        Self {
            bus,
            items: RefCell::new(Vec::new()),
        }
    }

    /// Append a product to the cart.
    ///
    /// Emits `CartChanged` when the cart actually grows. Adding an id that
    /// is already present is a no-op and does not emit.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Priceless`] for a product without a price.
    pub fn add_item(&self, product: Product) -> Result<(), CartError> {
        if product.price.is_none() {
            return Err(CartError::Priceless(product.id));
        }
        if self.contains(&product.id) {
            tracing::warn!(id = %product.id, "product already in the cart, ignoring add");
            return Ok(());
        }

        self.items.borrow_mut().push(product);
        self.bus.emit(&AppEvent::CartChanged);
        Ok(())
    }

    /// Remove a product by id.
    ///
    /// Emits `CartChanged` when something was removed; removing an absent id
    /// is a no-op and does not emit.
    pub fn remove_item(&self, id: &ProductId) {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|product| &product.id != id);
            items.len() != before
        };

        if removed {
            self.bus.emit(&AppEvent::CartChanged);
        } else {
            tracing::warn!(%id, "product not in the cart, ignoring remove");
        }
    }

    /// Membership test by id.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.borrow().iter().any(|product| &product.id == id)
    }

    /// Cart contents in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.borrow().len()
    }

    /// Sum of item prices in synapses. An absent price counts as 0; in
    /// practice priceless items never enter the cart.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items
            .borrow()
            .iter()
            .map(|product| product.price.unwrap_or(0))
            .sum()
    }

    /// Empty the cart. Emits `CartChanged` unless it was already empty.
    pub fn clear(&self) {
        let was_empty = {
            let mut items = self.items.borrow_mut();
            let was_empty = items.is_empty();
            items.clear();
            was_empty
        };
        if !was_empty {
            self.bus.emit(&AppEvent::CartChanged);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::events::EventKind;

    fn product(id: &str, price: Option<u64>) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            title: format!("product {id}"),
            price,
            description: String::new(),
            image: format!("/{id}.svg"),
            category: "другое".to_string(),
        }
    }

    fn cart_with_counter() -> (CartModel, Rc<RefCell<u32>>) {
        let bus = Rc::new(EventBus::new());
        let changes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&changes);
        bus.on(EventKind::CartChanged, move |_| {
            *counter.borrow_mut() += 1;
        });
        (CartModel::new(bus), changes)
    }

    #[test]
    fn test_add_is_idempotent_by_id() {
        let (cart, changes) = cart_with_counter();

        cart.add_item(product("a", Some(100))).unwrap();
        cart.add_item(product("a", Some(100))).unwrap();

        assert_eq!(cart.total_count(), 1);
        assert_eq!(*changes.borrow(), 1, "no-op add must not emit");
    }

    #[test]
    fn test_priceless_product_is_rejected() {
        let (cart, changes) = cart_with_counter();
        cart.add_item(product("a", Some(100))).unwrap();

        let err = cart.add_item(product("b", None)).unwrap_err();
        assert_eq!(err, CartError::Priceless(ProductId::new("b").unwrap()));
        assert_eq!(cart.total_count(), 1);
        assert_eq!(cart.total_price(), 100);
        assert_eq!(*changes.borrow(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_a_silent_no_op() {
        let (cart, changes) = cart_with_counter();
        cart.add_item(product("a", Some(100))).unwrap();

        cart.remove_item(&ProductId::new("ghost").unwrap());

        assert_eq!(cart.items().len(), 1);
        assert_eq!(*changes.borrow(), 1, "no-op remove must not emit");
    }

    #[test]
    fn test_total_price_tracks_mutations() {
        let (cart, _) = cart_with_counter();
        cart.add_item(product("a", Some(100))).unwrap();
        cart.add_item(product("b", Some(250))).unwrap();
        assert_eq!(cart.total_price(), 350);

        cart.remove_item(&ProductId::new("a").unwrap());
        assert_eq!(cart.total_price(), 250);

        cart.clear();
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_count(), 0);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let (cart, _) = cart_with_counter();
        cart.add_item(product("b", Some(1))).unwrap();
        cart.add_item(product("a", Some(2))).unwrap();
        cart.add_item(product("c", Some(3))).unwrap();

        let ids: Vec<String> = cart
            .items()
            .into_iter()
            .map(|item| item.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_clear_on_empty_cart_does_not_emit() {
        let (cart, changes) = cart_with_counter();
        cart.clear();
        assert_eq!(*changes.borrow(), 0);
    }

    #[test]
    fn test_contains() {
        let (cart, _) = cart_with_counter();
        cart.add_item(product("a", Some(100))).unwrap();
        assert!(cart.contains(&ProductId::new("a").unwrap()));
        assert!(!cart.contains(&ProductId::new("b").unwrap()));
    }

    #[test]
    fn test_cart_changed_handler_can_read_the_cart() {
        // The change event fires after internal borrows are released, so a
        // handler may read totals inline.
        let bus = Rc::new(EventBus::new());
        let observed = Rc::new(RefCell::new(Vec::new()));

        let cart = Rc::new(CartModel::new(Rc::clone(&bus)));
        let reader = Rc::clone(&cart);
        let log = Rc::clone(&observed);
        bus.on(EventKind::CartChanged, move |_| {
            log.borrow_mut().push(reader.total_price());
        });

        cart.add_item(product("a", Some(100))).unwrap();
        cart.add_item(product("b", Some(50))).unwrap();
        assert_eq!(*observed.borrow(), vec![100, 150]);
    }
}
