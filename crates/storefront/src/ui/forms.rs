//! Checkout form renderers: payment/address, then contacts.

use larek_core::Payment;

use super::Node;
use crate::events::{AppEvent, FormField, FormKind};

fn errors_node(messages: &[String]) -> Node {
    Node::new("span")
        .class("form__errors")
        .text(messages.join(", "))
}

// =============================================================================
// Order form (payment method + delivery address)
// =============================================================================

/// Rendering data for the first checkout step.
#[derive(Debug, Clone, Default)]
pub struct OrderFormData {
    pub payment: Option<Payment>,
    pub address: String,
    pub messages: Vec<String>,
    pub can_submit: bool,
}

fn payment_button(method: Payment, current: Option<Payment>) -> Node {
    let name = match method {
        Payment::Card => "card",
        Payment::Cash => "cash",
    };
    let mut button = Node::new("button")
        .class("button")
        .class("button_alt")
        .attr("name", name)
        .text(method.label())
        .on_click(AppEvent::PaymentSelected { payment: method });
    // Active styling is mutually exclusive across the two buttons.
    if current == Some(method) {
        button = button.class("button_alt-active");
    }
    button
}

/// First checkout step: pick a payment method, enter the address.
#[must_use]
pub fn order_form(data: &OrderFormData) -> Node {
    Node::new("form")
        .class("form")
        .attr("name", "order")
        .child(
            Node::new("div")
                .class("order__buttons")
                .child(payment_button(Payment::Card, data.payment))
                .child(payment_button(Payment::Cash, data.payment)),
        )
        .child(
            Node::new("input")
                .class("form__input")
                .attr("name", "address")
                .attr("value", &data.address)
                .on_input(FormField::Address),
        )
        .child(
            Node::new("div")
                .class("modal__actions")
                .child(
                    Node::new("button")
                        .class("button")
                        .class("order__button")
                        .attr("type", "submit")
                        .text("Далее")
                        .disabled(!data.can_submit)
                        .on_click(AppEvent::FormSubmitted {
                            form: FormKind::Order,
                        }),
                )
                .child(errors_node(&data.messages)),
        )
}

// =============================================================================
// Contacts form (email + phone)
// =============================================================================

/// Rendering data for the second checkout step.
#[derive(Debug, Clone, Default)]
pub struct ContactsFormData {
    pub email: String,
    pub phone: String,
    pub messages: Vec<String>,
    pub can_submit: bool,
}

/// Second checkout step: contact details and the final submit.
#[must_use]
pub fn contacts_form(data: &ContactsFormData) -> Node {
    Node::new("form")
        .class("form")
        .attr("name", "contacts")
        .child(
            Node::new("input")
                .class("form__input")
                .attr("name", "email")
                .attr("value", &data.email)
                .on_input(FormField::Email),
        )
        .child(
            Node::new("input")
                .class("form__input")
                .attr("name", "phone")
                .attr("value", &data.phone)
                .on_input(FormField::Phone),
        )
        .child(
            Node::new("div")
                .class("modal__actions")
                .child(
                    Node::new("button")
                        .class("button")
                        .class("contacts__button")
                        .attr("type", "submit")
                        .text("Оплатить")
                        .disabled(!data.can_submit)
                        .on_click(AppEvent::FormSubmitted {
                            form: FormKind::Contacts,
                        }),
                )
                .child(errors_node(&data.messages)),
        )
}
