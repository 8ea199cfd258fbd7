//! Buyer model: in-progress checkout form data and its presence validation.

use std::cell::RefCell;
use std::rc::Rc;

use larek_core::Payment;

use crate::events::{AppEvent, EventBus, FormField};

/// Partial checkout record, filled across the two sequential forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerData {
    pub payment: Option<Payment>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Presence-check result: one message per missing field, in display order
/// (payment, address, phone, email). A field absent from the result is
/// valid. This is a plain value, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub payment: Option<&'static str>,
    pub address: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ValidationErrors {
    /// Whether every field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.payment.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    /// Messages for the order step (payment method and address).
    #[must_use]
    pub fn order_step(&self) -> Vec<&'static str> {
        [self.payment, self.address].into_iter().flatten().collect()
    }

    /// Whether the order step (payment and address) is complete.
    #[must_use]
    pub const fn order_step_valid(&self) -> bool {
        self.payment.is_none() && self.address.is_none()
    }

    /// Messages for the contacts step (phone and email).
    #[must_use]
    pub fn contacts_step(&self) -> Vec<&'static str> {
        [self.phone, self.email].into_iter().flatten().collect()
    }

    /// All messages in display order.
    #[must_use]
    pub fn all(&self) -> Vec<&'static str> {
        [self.payment, self.address, self.phone, self.email]
            .into_iter()
            .flatten()
            .collect()
    }
}

const MSG_PAYMENT: &str = "Не выбран вид оплаты";
const MSG_ADDRESS: &str = "Укажите адрес";
const MSG_PHONE: &str = "Укажите телефон";
const MSG_EMAIL: &str = "Укажите email";

/// Accumulates buyer data across the order and contacts forms.
///
/// Validation is purely presence-based: an absent or empty field is invalid,
/// nothing is ever coerced, and no format checking is performed.
pub struct BuyerModel {
    bus: Rc<EventBus>,
    data: RefCell<BuyerData>,
}

impl BuyerModel {
    #[must_use]
    pub fn new(bus: Rc<EventBus>) -> Self {
        Self {
            bus,
            data: RefCell::new(BuyerData::default()),
        }
    }

    /// Record the chosen payment method. Emits `BuyerChanged`.
    pub fn set_payment(&self, payment: Payment) {
        self.data.borrow_mut().payment = Some(payment);
        self.bus.emit(&AppEvent::BuyerChanged);
    }

    /// Merge one text field into the record, overwriting any earlier value.
    /// Emits `BuyerChanged`.
    pub fn set_field(&self, field: FormField, value: String) {
        {
            let mut data = self.data.borrow_mut();
            match field {
                FormField::Address => data.address = Some(value),
                FormField::Phone => data.phone = Some(value),
                FormField::Email => data.email = Some(value),
            }
        }
        self.bus.emit(&AppEvent::BuyerChanged);
    }

    /// Current record (shallow copy).
    #[must_use]
    pub fn data(&self) -> BuyerData {
        self.data.borrow().clone()
    }

    /// Presence check over all four fields.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let data = self.data.borrow();
        let missing = |field: &Option<String>| field.as_deref().is_none_or(str::is_empty);

        ValidationErrors {
            payment: data.payment.is_none().then_some(MSG_PAYMENT),
            address: missing(&data.address).then_some(MSG_ADDRESS),
            phone: missing(&data.phone).then_some(MSG_PHONE),
            email: missing(&data.email).then_some(MSG_EMAIL),
        }
    }

    /// Reset to an empty record. Emits `BuyerChanged`.
    pub fn clear(&self) {
        *self.data.borrow_mut() = BuyerData::default();
        self.bus.emit(&AppEvent::BuyerChanged);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::events::EventKind;

    fn model() -> BuyerModel {
        BuyerModel::new(Rc::new(EventBus::new()))
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let buyer = model();
        let errors = buyer.validate();

        assert_eq!(errors.payment, Some(MSG_PAYMENT));
        assert_eq!(errors.address, Some(MSG_ADDRESS));
        assert_eq!(errors.phone, Some(MSG_PHONE));
        assert_eq!(errors.email, Some(MSG_EMAIL));
        assert_eq!(
            errors.all(),
            vec![MSG_PAYMENT, MSG_ADDRESS, MSG_PHONE, MSG_EMAIL]
        );
    }

    #[test]
    fn test_empty_string_is_as_invalid_as_absent() {
        let buyer = model();
        buyer.set_field(FormField::Email, String::new());
        assert_eq!(buyer.validate().email, Some(MSG_EMAIL));
    }

    #[test]
    fn test_complete_record_validates_clean() {
        let buyer = model();
        buyer.set_payment(Payment::Card);
        buyer.set_field(FormField::Address, "Spb Vosstania 1".to_string());
        buyer.set_field(FormField::Phone, "+79991234567".to_string());
        buyer.set_field(FormField::Email, "user@example.com".to_string());

        let errors = buyer.validate();
        assert!(errors.is_empty());
        assert!(errors.all().is_empty());
    }

    #[test]
    fn test_fields_merge_and_overwrite() {
        let buyer = model();
        buyer.set_field(FormField::Address, "first".to_string());
        buyer.set_field(FormField::Email, "a@b.c".to_string());
        buyer.set_field(FormField::Address, "second".to_string());

        let data = buyer.data();
        assert_eq!(data.address.as_deref(), Some("second"));
        assert_eq!(data.email.as_deref(), Some("a@b.c"));
        assert_eq!(data.phone, None);
    }

    #[test]
    fn test_order_step_partition() {
        let buyer = model();
        buyer.set_payment(Payment::Cash);

        let errors = buyer.validate();
        assert_eq!(errors.order_step(), vec![MSG_ADDRESS]);
        assert!(!errors.order_step_valid());

        buyer.set_field(FormField::Address, "street".to_string());
        let errors = buyer.validate();
        assert!(errors.order_step_valid());
        assert_eq!(errors.contacts_step(), vec![MSG_PHONE, MSG_EMAIL]);
        assert_eq!(errors.all(), vec![MSG_PHONE, MSG_EMAIL]);
    }

    #[test]
    fn test_clear_resets_and_announces() {
        let bus = Rc::new(EventBus::new());
        let changes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&changes);
        bus.on(EventKind::BuyerChanged, move |_| {
            *counter.borrow_mut() += 1;
        });

        let buyer = BuyerModel::new(bus);
        buyer.set_payment(Payment::Card);
        buyer.clear();

        assert_eq!(buyer.data(), BuyerData::default());
        assert_eq!(*changes.borrow(), 2);
    }

    #[test]
    fn test_data_is_a_copy() {
        let buyer = model();
        buyer.set_field(FormField::Email, "a@b.c".to_string());

        let mut copy = buyer.data();
        copy.email = Some("mutated".to_string());
        assert_eq!(buyer.data().email.as_deref(), Some("a@b.c"));
    }
}
