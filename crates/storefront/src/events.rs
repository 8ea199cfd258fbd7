//! Application event bus.
//!
//! All communication between views, the controller, and the remote service
//! adapter flows through [`EventBus`]. Events form a closed tagged union
//! ([`AppEvent`]) so every payload is strongly typed; subscriptions filter on
//! the fieldless [`EventKind`] mirror or match everything via
//! [`EventBus::on_any`].
//!
//! # Dispatch semantics
//!
//! `emit` is synchronous and depth-first: every matching handler runs to
//! completion, in registration order, before `emit` returns. A handler that
//! emits must expect the nested handlers to run inline. Handlers registered
//! while a dispatch is in progress only see subsequent events.
//!
//! There is no error isolation: a panicking handler propagates to the
//! emitter. This is a known sharp edge, accepted because handlers are wired
//! once at startup and a failing handler is a programming defect.

use std::cell::RefCell;
use std::rc::Rc;

use larek_core::{Payment, ProductId};

/// Input field of one of the checkout forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Address,
    Email,
    Phone,
}

/// Which checkout form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Order,
    Contacts,
}

/// Every event that can travel over the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // ------------------------------------------------------------------
    // Model change notifications
    // ------------------------------------------------------------------
    /// The catalog items were replaced wholesale.
    CatalogChanged,
    /// A product was stored for detail view.
    ProductSelected,
    /// The cart contents actually changed (no-op mutations do not emit).
    CartChanged,
    /// Buyer checkout data changed.
    BuyerChanged,

    // ------------------------------------------------------------------
    // View interactions
    // ------------------------------------------------------------------
    /// A catalog card was clicked.
    CardSelected { id: ProductId },
    /// The preview action button was clicked (add or remove, depending on
    /// cart membership).
    PurchaseToggled { id: ProductId },
    /// A basket line's delete button was clicked.
    ItemRemoved { id: ProductId },
    /// The header basket button was clicked.
    BasketOpened,
    /// The basket checkout button was clicked.
    OrderStarted,
    /// A payment method button was clicked on the order form.
    PaymentSelected { payment: Payment },
    /// A form input changed.
    FieldChanged { field: FormField, value: String },
    /// A form was submitted.
    FormSubmitted { form: FormKind },
    /// The success panel's dismiss button was clicked.
    SuccessClosed,
    /// The modal was closed (close button or background click).
    ModalClosed,

    // ------------------------------------------------------------------
    // Remote service notifications
    // ------------------------------------------------------------------
    /// The server accepted the order.
    OrderAccepted { total: u64 },
    /// A backend call failed.
    ApiFailed { message: String },
}

/// Fieldless mirror of [`AppEvent`], used as a subscription filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CatalogChanged,
    ProductSelected,
    CartChanged,
    BuyerChanged,
    CardSelected,
    PurchaseToggled,
    ItemRemoved,
    BasketOpened,
    OrderStarted,
    PaymentSelected,
    FieldChanged,
    FormSubmitted,
    SuccessClosed,
    ModalClosed,
    OrderAccepted,
    ApiFailed,
}

impl AppEvent {
    /// The subscription kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::CatalogChanged => EventKind::CatalogChanged,
            Self::ProductSelected => EventKind::ProductSelected,
            Self::CartChanged => EventKind::CartChanged,
            Self::BuyerChanged => EventKind::BuyerChanged,
            Self::CardSelected { .. } => EventKind::CardSelected,
            Self::PurchaseToggled { .. } => EventKind::PurchaseToggled,
            Self::ItemRemoved { .. } => EventKind::ItemRemoved,
            Self::BasketOpened => EventKind::BasketOpened,
            Self::OrderStarted => EventKind::OrderStarted,
            Self::PaymentSelected { .. } => EventKind::PaymentSelected,
            Self::FieldChanged { .. } => EventKind::FieldChanged,
            Self::FormSubmitted { .. } => EventKind::FormSubmitted,
            Self::SuccessClosed => EventKind::SuccessClosed,
            Self::ModalClosed => EventKind::ModalClosed,
            Self::OrderAccepted { .. } => EventKind::OrderAccepted,
            Self::ApiFailed { .. } => EventKind::ApiFailed,
        }
    }
}

// =============================================================================
// EventBus
// =============================================================================

type Handler = Rc<dyn Fn(&AppEvent)>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Filter {
    Kind(EventKind),
    Any,
}

impl Filter {
    fn matches(self, kind: EventKind) -> bool {
        match self {
            Self::Kind(filter_kind) => filter_kind == kind,
            Self::Any => true,
        }
    }
}

struct Entry {
    id: u64,
    filter: Filter,
    handler: Handler,
}

/// Handle returned by [`EventBus::on`], usable with [`EventBus::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(u64);

/// Single-threaded synchronous publish/subscribe bus.
///
/// Constructed once at startup and passed by `Rc` into every component that
/// needs it; the bus holds no state beyond its handler registry.
pub struct EventBus {
    registry: RefCell<Registry>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(Registry::default()),
        }
    }

    /// Register a handler for one event kind. Handlers run in registration
    /// order.
    pub fn on(&self, kind: EventKind, handler: impl Fn(&AppEvent) + 'static) -> HandlerId {
        self.register(Filter::Kind(kind), Rc::new(handler))
    }

    /// Register a wildcard handler invoked for every event.
    pub fn on_any(&self, handler: impl Fn(&AppEvent) + 'static) -> HandlerId {
        self.register(Filter::Any, Rc::new(handler))
    }

    fn register(&self, filter: Filter, handler: Handler) -> HandlerId {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.entries.push(Entry {
            id,
            filter,
            handler,
        });
        HandlerId(id)
    }

    /// Remove a previously registered handler. Returns `false` if the handler
    /// was already removed.
    pub fn off(&self, id: HandlerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|entry| entry.id != id.0);
        registry.entries.len() != before
    }

    /// Synchronously dispatch `event` to every matching handler.
    ///
    /// The matching handlers are snapshotted before the first one runs, so a
    /// handler may register or remove handlers without affecting the current
    /// dispatch.
    pub fn emit(&self, event: &AppEvent) {
        let kind = event.kind();
        let snapshot: Vec<Handler> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.filter.matches(kind))
            .map(|entry| Rc::clone(&entry.handler))
            .collect();

        tracing::trace!(?event, handlers = snapshot.len(), "dispatching event");
        for handler in snapshot {
            handler(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            bus.on(EventKind::CartChanged, move |_| {
                log.borrow_mut().push(tag);
            });
        }

        bus.emit(&AppEvent::CartChanged);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_exact_kind_filter_does_not_cross_match() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        bus.on(EventKind::CartChanged, move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.emit(&AppEvent::CatalogChanged);
        bus.emit(&AppEvent::BuyerChanged);
        assert_eq!(*hits.borrow(), 0);

        bus.emit(&AppEvent::CartChanged);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_wildcard_sees_every_event() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        bus.on_any(move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.emit(&AppEvent::CartChanged);
        bus.emit(&AppEvent::BasketOpened);
        bus.emit(&AppEvent::ModalClosed);
        assert_eq!(*hits.borrow(), 3);
    }

    #[test]
    fn test_off_removes_handler() {
        let bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let id = bus.on(EventKind::CartChanged, move |_| {
            *counter.borrow_mut() += 1;
        });

        bus.emit(&AppEvent::CartChanged);
        assert!(bus.off(id));
        bus.emit(&AppEvent::CartChanged);

        assert_eq!(*hits.borrow(), 1);
        assert!(!bus.off(id), "second removal reports absence");
    }

    #[test]
    fn test_nested_emit_runs_inline() {
        let bus = Rc::new(EventBus::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner_log = Rc::clone(&log);
        bus.on(EventKind::CartChanged, move |_| {
            inner_log.borrow_mut().push("cart");
        });

        let nested_bus = Rc::clone(&bus);
        let outer_log = Rc::clone(&log);
        bus.on(EventKind::BasketOpened, move |_| {
            outer_log.borrow_mut().push("basket:before");
            nested_bus.emit(&AppEvent::CartChanged);
            outer_log.borrow_mut().push("basket:after");
        });

        bus.emit(&AppEvent::BasketOpened);
        assert_eq!(*log.borrow(), vec!["basket:before", "cart", "basket:after"]);
    }

    #[test]
    fn test_handler_registered_during_dispatch_skips_current_event() {
        let bus = Rc::new(EventBus::new());
        let hits = Rc::new(RefCell::new(0));

        let registrar_bus = Rc::clone(&bus);
        let counter = Rc::clone(&hits);
        bus.on(EventKind::CartChanged, move |_| {
            let late_counter = Rc::clone(&counter);
            registrar_bus.on(EventKind::CartChanged, move |_| {
                *late_counter.borrow_mut() += 1;
            });
        });

        bus.emit(&AppEvent::CartChanged);
        assert_eq!(*hits.borrow(), 0, "late handler must not see current event");

        bus.emit(&AppEvent::CartChanged);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_event_kind_mirrors_payloads() {
        let id = larek_core::ProductId::new("a").unwrap();
        assert_eq!(
            AppEvent::CardSelected { id: id.clone() }.kind(),
            EventKind::CardSelected
        );
        assert_eq!(
            AppEvent::FieldChanged {
                field: FormField::Email,
                value: String::new(),
            }
            .kind(),
            EventKind::FieldChanged
        );
        assert_eq!(
            AppEvent::PurchaseToggled { id }.kind(),
            EventKind::PurchaseToggled
        );
    }
}
