//! Checkout controller: the only component that owns flow.
//!
//! The controller subscribes to every interaction and model-change event,
//! reads the models, and re-renders the affected page regions. Views never
//! call back into it directly; everything arrives over the bus. Checkout
//! progress is tracked by a small [`Stage`] machine so that re-renders know
//! which panel is active and the submit path can refuse re-entry.

use std::cell::Cell;
use std::rc::Rc;

use larek_core::{OrderPayload, ProductId};
use url::Url;

use crate::api::ShopApi;
use crate::events::{AppEvent, EventBus, EventKind, FormKind};
use crate::models::{BuyerModel, CartModel, CatalogModel};
use crate::ui::{
    BasketLineData, CatalogCardData, ContactsFormData, OrderFormData, PreviewCardData, SharedPage,
    basket_line, basket_panel, catalog_card, contacts_form, order_form, preview_card,
    success_panel,
};

const MSG_SUBMIT_FAILED: &str = "Ошибка оформления заказа. Попробуйте еще раз.";

/// Where the user is in the browse/checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Catalog on screen, possibly with a product preview modal.
    Browsing,
    /// Basket modal open.
    CartOpen,
    /// First checkout form (payment and address).
    OrderForm,
    /// Second checkout form (contacts).
    Contacts,
    /// Order sent, waiting for the server. Submits are refused here.
    Submitting,
    /// Confirmation panel on screen.
    Success,
    /// Submission failed; contacts form shown again with the error.
    OrderError,
}

pub struct Controller {
    bus: Rc<EventBus>,
    catalog: Rc<CatalogModel>,
    cart: Rc<CartModel>,
    buyer: Rc<BuyerModel>,
    shop: Rc<ShopApi>,
    page: SharedPage,
    stage: Cell<Stage>,
    cdn_base_url: Url,
}

impl Controller {
    #[must_use]
    pub fn new(
        bus: Rc<EventBus>,
        catalog: Rc<CatalogModel>,
        cart: Rc<CartModel>,
        buyer: Rc<BuyerModel>,
        shop: Rc<ShopApi>,
        page: SharedPage,
        cdn_base_url: Url,
    ) -> Self {
        Self {
            bus,
            catalog,
            cart,
            buyer,
            shop,
            page,
            stage: Cell::new(Stage::Browsing),
            cdn_base_url,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    /// Subscribe every handler. Called once at startup; the subscriptions
    /// keep the controller alive for the lifetime of the bus.
    pub fn wire(self: &Rc<Self>) {
        self.handle(EventKind::CatalogChanged, |controller, _| {
            controller.render_gallery();
        });
        self.handle(EventKind::CardSelected, |controller, event| {
            if let AppEvent::CardSelected { id } = event {
                controller.on_card_selected(id);
            }
        });
        self.handle(EventKind::ProductSelected, |controller, _| {
            controller.on_product_selected();
        });
        self.handle(EventKind::PurchaseToggled, |controller, event| {
            if let AppEvent::PurchaseToggled { id } = event {
                controller.on_purchase_toggled(id);
            }
        });
        self.handle(EventKind::ItemRemoved, |controller, event| {
            if let AppEvent::ItemRemoved { id } = event {
                controller.cart.remove_item(id);
            }
        });
        self.handle(EventKind::CartChanged, |controller, _| {
            controller.on_cart_changed();
        });
        self.handle(EventKind::BasketOpened, |controller, _| {
            controller.on_basket_opened();
        });
        self.handle(EventKind::OrderStarted, |controller, _| {
            controller.on_order_started();
        });
        self.handle(EventKind::PaymentSelected, |controller, event| {
            if let AppEvent::PaymentSelected { payment } = event {
                controller.buyer.set_payment(*payment);
            }
        });
        self.handle(EventKind::FieldChanged, |controller, event| {
            if let AppEvent::FieldChanged { field, value } = event {
                controller.buyer.set_field(*field, value.clone());
            }
        });
        self.handle(EventKind::BuyerChanged, |controller, _| {
            controller.on_buyer_changed();
        });
        self.handle(EventKind::FormSubmitted, |controller, event| {
            if let AppEvent::FormSubmitted { form } = event {
                controller.on_form_submitted(*form);
            }
        });
        self.handle(EventKind::OrderAccepted, |controller, event| {
            if let AppEvent::OrderAccepted { total } = event {
                controller.on_order_accepted(*total);
            }
        });
        self.handle(EventKind::ApiFailed, |controller, event| {
            if let AppEvent::ApiFailed { message } = event {
                controller.on_api_failed(message);
            }
        });
        self.handle(EventKind::SuccessClosed, |controller, _| {
            controller.dismiss_modal();
        });
        self.handle(EventKind::ModalClosed, |controller, _| {
            controller.dismiss_modal();
        });
    }

    fn handle(
        self: &Rc<Self>,
        kind: EventKind,
        handler: impl Fn(&Rc<Self>, &AppEvent) + 'static,
    ) {
        let controller = Rc::clone(self);
        self.bus.on(kind, move |event| handler(&controller, event));
    }

    // ------------------------------------------------------------------
    // Catalog and preview
    // ------------------------------------------------------------------

    fn render_gallery(&self) {
        let cards: Vec<_> = self
            .catalog
            .items()
            .iter()
            .map(|product| {
                catalog_card(&CatalogCardData::from_product(product, &self.cdn_base_url))
            })
            .collect();
        self.page.borrow_mut().set_gallery(cards);
    }

    fn on_card_selected(&self, id: &ProductId) {
        match self.catalog.product_by_id(id) {
            Some(product) => self.catalog.set_selected(Some(product)),
            None => tracing::warn!(%id, "clicked card references an unknown product"),
        }
    }

    fn on_product_selected(&self) {
        let Some(product) = self.catalog.selected() else {
            return;
        };
        let in_cart = self.cart.contains(&product.id);
        let preview = preview_card(&PreviewCardData::from_product(
            &product,
            &self.cdn_base_url,
            in_cart,
        ));
        self.page.borrow_mut().open_modal(preview);
    }

    fn on_purchase_toggled(&self, id: &ProductId) {
        if self.cart.contains(id) {
            self.cart.remove_item(id);
        } else {
            match self.catalog.product_by_id(id) {
                Some(product) => {
                    if let Err(err) = self.cart.add_item(product) {
                        tracing::error!(error = %err, "preview offered an unpurchasable product");
                        return;
                    }
                }
                None => {
                    tracing::warn!(%id, "toggle references an unknown product");
                    return;
                }
            }
        }
        self.catalog.set_selected(None);
        self.page.borrow_mut().close_modal();
        self.stage.set(Stage::Browsing);
    }

    // ------------------------------------------------------------------
    // Basket
    // ------------------------------------------------------------------

    fn render_basket(&self) {
        let lines: Vec<_> = self
            .cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, product)| {
                basket_line(&BasketLineData::from_product(product, index + 1))
            })
            .collect();
        let panel = basket_panel(lines, self.cart.total_price(), self.cart.total_count() == 0);
        self.page.borrow_mut().open_modal(panel);
    }

    fn on_cart_changed(&self) {
        self.page
            .borrow_mut()
            .set_basket_counter(self.cart.total_count());
        if self.stage.get() == Stage::CartOpen {
            self.render_basket();
        }
    }

    fn on_basket_opened(&self) {
        self.stage.set(Stage::CartOpen);
        self.render_basket();
    }

    // ------------------------------------------------------------------
    // Checkout forms
    // ------------------------------------------------------------------

    fn render_order_form(&self) {
        let data = self.buyer.data();
        let errors = self.buyer.validate();
        let form = order_form(&OrderFormData {
            payment: data.payment,
            address: data.address.unwrap_or_default(),
            messages: errors.order_step().iter().map(ToString::to_string).collect(),
            can_submit: errors.order_step_valid(),
        });
        self.page.borrow_mut().open_modal(form);
    }

    fn render_contacts_form(&self, messages: Vec<String>, can_submit: bool) {
        let data = self.buyer.data();
        let form = contacts_form(&ContactsFormData {
            email: data.email.unwrap_or_default(),
            phone: data.phone.unwrap_or_default(),
            messages,
            can_submit,
        });
        self.page.borrow_mut().open_modal(form);
    }

    fn contacts_messages(&self) -> (Vec<String>, bool) {
        let errors = self.buyer.validate();
        let messages = errors
            .contacts_step()
            .iter()
            .map(ToString::to_string)
            .collect();
        (messages, errors.is_empty())
    }

    fn on_order_started(&self) {
        if self.cart.total_count() == 0 {
            tracing::warn!("checkout requested with an empty cart, ignoring");
            return;
        }
        self.stage.set(Stage::OrderForm);
        self.render_order_form();
    }

    fn on_buyer_changed(&self) {
        match self.stage.get() {
            Stage::OrderForm => self.render_order_form(),
            Stage::Contacts | Stage::OrderError => {
                let (messages, can_submit) = self.contacts_messages();
                self.render_contacts_form(messages, can_submit);
            }
            _ => {}
        }
    }

    fn on_form_submitted(&self, form: FormKind) {
        match form {
            FormKind::Order => self.on_order_form_submitted(),
            FormKind::Contacts => self.on_contacts_submitted(),
        }
    }

    fn on_order_form_submitted(&self) {
        let errors = self.buyer.validate();
        if errors.order_step_valid() {
            self.stage.set(Stage::Contacts);
            let (messages, can_submit) = self.contacts_messages();
            self.render_contacts_form(messages, can_submit);
        } else {
            // Submitted around the disabled button (keyboard path); show why.
            self.render_order_form();
        }
    }

    fn on_contacts_submitted(&self) {
        if self.stage.get() == Stage::Submitting {
            tracing::warn!("order already in flight, ignoring resubmit");
            return;
        }

        let errors = self.buyer.validate();
        if !errors.is_empty() {
            let messages = errors
                .contacts_step()
                .iter()
                .map(ToString::to_string)
                .collect();
            self.render_contacts_form(messages, false);
            return;
        }

        let data = self.buyer.data();
        let Some(payment) = data.payment else {
            tracing::error!("validated buyer record lost its payment method");
            return;
        };
        let payload = OrderPayload {
            payment,
            email: data.email.unwrap_or_default(),
            phone: data.phone.unwrap_or_default(),
            address: data.address.unwrap_or_default(),
            total: self.cart.total_price(),
            items: self
                .cart
                .items()
                .into_iter()
                .map(|product| product.id)
                .collect(),
        };

        self.stage.set(Stage::Submitting);
        self.render_contacts_form(Vec::new(), false);

        let shop = Rc::clone(&self.shop);
        tokio::task::spawn_local(async move {
            // Failure is announced on the bus by the adapter itself.
            if let Err(err) = shop.submit_order(&payload).await {
                tracing::debug!(error = %err, "order submission settled with an error");
            }
        });
    }

    // ------------------------------------------------------------------
    // Submission outcomes
    // ------------------------------------------------------------------

    fn on_order_accepted(&self, total: u64) {
        self.stage.set(Stage::Success);
        self.page.borrow_mut().open_modal(success_panel(total));
        self.cart.clear();
        self.buyer.clear();
    }

    fn on_api_failed(&self, message: &str) {
        if self.stage.get() != Stage::Submitting {
            tracing::warn!(%message, "backend call failed outside checkout");
            return;
        }
        self.stage.set(Stage::OrderError);
        self.render_contacts_form(vec![MSG_SUBMIT_FAILED.to_string()], true);
    }

    fn dismiss_modal(&self) {
        self.catalog.set_selected(None);
        self.page.borrow_mut().close_modal();
        self.stage.set(Stage::Browsing);
    }
}
