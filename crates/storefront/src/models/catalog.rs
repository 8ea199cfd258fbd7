//! Catalog model: the product list and the currently inspected product.

use std::cell::RefCell;
use std::rc::Rc;

use larek_core::{Product, ProductId};

use crate::events::{AppEvent, EventBus};

/// Holds the server-provided product list (order preserved) and the product
/// currently shown in the detail view.
pub struct CatalogModel {
    bus: Rc<EventBus>,
    items: RefCell<Vec<Product>>,
    selected: RefCell<Option<Product>>,
}

impl CatalogModel {
    #[must_use]
    pub fn new(bus: Rc<EventBus>) -> Self {
        Self {
            bus,
            items: RefCell::new(Vec::new()),
            selected: RefCell::new(None),
        }
    }

    /// Replace the product list wholesale.
    ///
    /// Clears the current selection - a selection must never outlive the
    /// list it was made from. Emits `CatalogChanged`.
    pub fn set_items(&self, items: Vec<Product>) {
        *self.items.borrow_mut() = items;
        *self.selected.borrow_mut() = None;
        self.bus.emit(&AppEvent::CatalogChanged);
    }

    /// All products, in server order.
    #[must_use]
    pub fn items(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    /// Linear lookup by id.
    #[must_use]
    pub fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.items
            .borrow()
            .iter()
            .find(|product| &product.id == id)
            .cloned()
    }

    /// Store a product for detail view (`None` clears the selection).
    ///
    /// Emits `ProductSelected` when a product is stored; clearing is silent.
    pub fn set_selected(&self, product: Option<Product>) {
        let announce = product.is_some();
        *self.selected.borrow_mut() = product;
        if announce {
            self.bus.emit(&AppEvent::ProductSelected);
        }
    }

    /// The currently inspected product, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Product> {
        self.selected.borrow().clone()
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

    fn model() -> CatalogModel {
        CatalogModel::new(Rc::new(EventBus::new()))
    }

    #[test]
    fn test_set_items_replaces_and_announces() {
        let bus = Rc::new(EventBus::new());
        let changes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&changes);
        bus.on(EventKind::CatalogChanged, move |_| {
            *counter.borrow_mut() += 1;
        });

        let catalog = CatalogModel::new(Rc::clone(&bus));
        catalog.set_items(vec![product("a", Some(100)), product("b", None)]);

        assert_eq!(catalog.items().len(), 2);
        assert_eq!(*changes.borrow(), 1);
    }

    #[test]
    fn test_set_items_clears_selection() {
        let catalog = model();
        catalog.set_items(vec![product("a", Some(100))]);
        catalog.set_selected(catalog.product_by_id(&ProductId::new("a").unwrap()));
        assert!(catalog.selected().is_some());

        catalog.set_items(vec![product("b", Some(50))]);
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn test_product_by_id_returns_copy() {
        let catalog = model();
        catalog.set_items(vec![product("a", Some(100))]);

        let mut copy = catalog
            .product_by_id(&ProductId::new("a").unwrap())
            .unwrap();
        copy.title = "mutated".to_string();

        let canonical = catalog
            .product_by_id(&ProductId::new("a").unwrap())
            .unwrap();
        assert_eq!(canonical.title, "product a");
    }

    #[test]
    fn test_product_by_id_missing_is_none() {
        let catalog = model();
        catalog.set_items(vec![product("a", Some(100))]);
        assert!(
            catalog
                .product_by_id(&ProductId::new("zzz").unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_selected_returns_copy_and_none_clears() {
        let catalog = model();
        let original = product("a", Some(100));
        catalog.set_items(vec![original.clone()]);

        catalog.set_selected(Some(original.clone()));
        let mut copy = catalog.selected().unwrap();
        copy.title = "mutated".to_string();
        assert_eq!(catalog.selected().unwrap(), original);

        catalog.set_selected(None);
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn test_selecting_emits_product_selected() {
        let bus = Rc::new(EventBus::new());
        let selections = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&selections);
        bus.on(EventKind::ProductSelected, move |_| {
            *counter.borrow_mut() += 1;
        });

        let catalog = CatalogModel::new(bus);
        catalog.set_selected(Some(product("a", Some(100))));
        catalog.set_selected(None);
        assert_eq!(*selections.borrow(), 1, "clearing does not announce");
    }
}
