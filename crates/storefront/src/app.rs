//! Application assembly and the interaction surface.
//!
//! [`App`] wires the bus, the three models, the remote service adapter, the
//! page shell, and the controller together, then exposes the page's
//! interaction points as simulated clicks and keystrokes. Tests drive the
//! whole storefront through this surface, exactly as the binary does.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{Api, HttpError, ShopApi};
use crate::config::AppConfig;
use crate::controller::{Controller, Stage};
use crate::events::{AppEvent, EventBus};
use crate::models::{BuyerModel, CartModel, CatalogModel};
use crate::ui::{Page, SharedPage, UiError};

pub struct App {
    bus: Rc<EventBus>,
    catalog: Rc<CatalogModel>,
    cart: Rc<CartModel>,
    buyer: Rc<BuyerModel>,
    shop: Rc<ShopApi>,
    page: SharedPage,
    controller: Rc<Controller>,
}

impl App {
    /// Assemble the application over an injected transport.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] if the standard document is missing a required
    /// region. With the built-in layout this cannot happen, but the check
    /// stays on the construction path.
    pub fn new(config: &AppConfig, api: Rc<dyn Api>) -> Result<Self, UiError> {
        let bus = Rc::new(EventBus::new());
        let catalog = Rc::new(CatalogModel::new(Rc::clone(&bus)));
        let cart = Rc::new(CartModel::new(Rc::clone(&bus)));
        let buyer = Rc::new(BuyerModel::new(Rc::clone(&bus)));
        let shop = Rc::new(ShopApi::new(api, Rc::clone(&bus)));
        let page: SharedPage = Rc::new(RefCell::new(Page::new(crate::ui::static_document())?));

        let controller = Rc::new(Controller::new(
            Rc::clone(&bus),
            Rc::clone(&catalog),
            Rc::clone(&cart),
            Rc::clone(&buyer),
            Rc::clone(&shop),
            Rc::clone(&page),
            config.cdn_base_url.clone(),
        ));
        controller.wire();

        Ok(Self {
            bus,
            catalog,
            cart,
            buyer,
            shop,
            page,
            controller,
        })
    }

    /// Fetch the catalog and hand it to the model, which triggers the first
    /// gallery render.
    ///
    /// # Errors
    ///
    /// Returns the [`HttpError`] of a failed fetch; the failure has already
    /// been announced on the bus.
    pub async fn start(&self) -> Result<(), HttpError> {
        let items = self.shop.fetch_products().await?;
        self.catalog.set_items(items);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Component access
    // ------------------------------------------------------------------

    #[must_use]
    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    #[must_use]
    pub fn catalog(&self) -> &Rc<CatalogModel> {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &Rc<CartModel> {
        &self.cart
    }

    #[must_use]
    pub fn buyer(&self) -> &Rc<BuyerModel> {
        &self.buyer
    }

    #[must_use]
    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.controller.stage()
    }

    // ------------------------------------------------------------------
    // Interaction simulation
    // ------------------------------------------------------------------
    //
    // Each entry point looks the event up while borrowing the page, drops
    // the borrow, then emits - handlers re-render into the same page, so
    // emitting under the borrow would re-enter it.

    /// Click the first enabled element carrying `class`. Returns whether a
    /// click binding was found.
    pub fn click(&self, class: &str) -> bool {
        let event = self.page.borrow().event_for_class(class);
        self.emit_found(event)
    }

    /// Click the first enabled element whose `name` attribute matches.
    pub fn click_named(&self, name: &str) -> bool {
        let event = self.page.borrow().event_for_named(name);
        self.emit_found(event)
    }

    /// Click `class` inside the item subtree tagged `data-id == id`.
    pub fn click_card(&self, class: &str, id: &str) -> bool {
        let event = self.page.borrow().event_for_item(class, id);
        self.emit_found(event)
    }

    /// Type `value` into the input whose `name` attribute matches.
    pub fn type_into(&self, name: &str, value: &str) -> bool {
        let field = self.page.borrow().input_for_named(name);
        match field {
            Some(field) => {
                self.bus.emit(&AppEvent::FieldChanged {
                    field,
                    value: value.to_string(),
                });
                true
            }
            None => false,
        }
    }

    fn emit_found(&self, event: Option<AppEvent>) -> bool {
        match event {
            Some(event) => {
                self.bus.emit(&event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use larek_core::{Product, ProductId};
    use url::Url;

    use super::*;

    struct OfflineApi;

    #[async_trait(?Send)]
    impl Api for OfflineApi {
        async fn get(&self, _path: &str) -> Result<serde_json::Value, HttpError> {
            Err(HttpError::Status {
                status: 503,
                body: String::new(),
            })
        }

        async fn post(
            &self,
            _path: &str,
            _body: serde_json::Value,
        ) -> Result<serde_json::Value, HttpError> {
            Err(HttpError::Status {
                status: 503,
                body: String::new(),
            })
        }
    }

    fn app() -> App {
        let config = AppConfig {
            api_base_url: Url::parse("https://larek.example/api/weblarek").unwrap(),
            cdn_base_url: Url::parse("https://larek.example/content/weblarek").unwrap(),
        };
        App::new(&config, Rc::new(OfflineApi)).unwrap()
    }

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

    #[test]
    fn test_click_on_missing_element_reports_false() {
        let app = app();
        assert!(!app.click("no-such-class"));
        assert!(!app.type_into("no-such-input", "x"));
    }

    #[test]
    fn test_clicking_a_card_opens_its_preview() {
        let app = app();
        app.catalog()
            .set_items(vec![product("a", Some(100)), product("b", Some(50))]);

        assert!(app.click_card("gallery__item", "b"));
        let page = app.page().borrow();
        let preview = page.modal_content().unwrap();
        assert_eq!(
            preview.find("card__title").unwrap().text_content(),
            Some("product b")
        );
    }

    #[test]
    fn test_disabled_checkout_button_is_not_clickable() {
        let app = app();
        app.click("header__basket");
        // Empty basket: the checkout button renders disabled.
        assert!(!app.click("basket__button"));
        assert_eq!(app.stage(), Stage::CartOpen);
    }

    #[test]
    fn test_typing_updates_the_buyer_record() {
        let app = app();
        app.catalog().set_items(vec![product("a", Some(100))]);
        app.click_card("gallery__item", "a");
        app.click("card__button");
        app.click("header__basket");
        app.click("basket__button");
        assert_eq!(app.stage(), Stage::OrderForm);

        assert!(app.click_named("card"));
        assert!(app.type_into("address", "street 1"));
        assert_eq!(app.buyer().data().address.as_deref(), Some("street 1"));

        // Both fields present: the step's submit is enabled and advances.
        assert!(app.click("order__button"));
        assert_eq!(app.stage(), Stage::Contacts);
    }
}
