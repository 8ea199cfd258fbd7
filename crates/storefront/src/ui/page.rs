//! Page shell: the long-lived document tree the controller renders into.
//!
//! Construction validates that the required regions exist and fails fast
//! otherwise. After that, region updates degrade to silent no-ops when the
//! region has gone missing, matching how optional elements are treated.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{AppEvent, FormField};

use super::{Node, UiError, header, modal_shell};

/// The page handle shared between the controller and the app shell.
pub type SharedPage = Rc<RefCell<Page>>;

const GALLERY: &str = "gallery";
const HEADER_COUNTER: &str = "header__basket-counter";
const MODAL_CONTAINER: &str = "modal-container";

/// The standard document layout the storefront boots with.
#[must_use]
pub fn static_document() -> Node {
    Node::new("body")
        .class("page")
        .child(header(0))
        .child(Node::new("main").class(GALLERY))
        .child(Node::new("div").class(MODAL_CONTAINER))
}

/// The mounted document and its well-known regions.
#[derive(Debug)]
pub struct Page {
    document: Node,
}

impl Page {
    /// Mount on `document`, checking every required region up front.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ElementNotFound`] naming the first missing region.
    pub fn new(document: Node) -> Result<Self, UiError> {
        document.require(GALLERY)?;
        document.require(HEADER_COUNTER)?;
        document.require(MODAL_CONTAINER)?;
        Ok(Self { document })
    }

    /// Mount on the standard layout. Infallible because the layout is known
    /// to carry every required region.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            document: static_document(),
        }
    }

    #[must_use]
    pub const fn document(&self) -> &Node {
        &self.document
    }

    // ------------------------------------------------------------------
    // Region updates
    // ------------------------------------------------------------------

    pub fn set_gallery(&mut self, cards: Vec<Node>) {
        if let Some(gallery) = self.document.find_mut(GALLERY) {
            gallery.replace_children(cards);
        }
    }

    pub fn set_basket_counter(&mut self, count: usize) {
        if let Some(counter) = self.document.find_mut(HEADER_COUNTER) {
            counter.set_text(count.to_string());
        }
    }

    /// Show `content` in the modal, replacing whatever was open.
    pub fn open_modal(&mut self, content: Node) {
        if let Some(container) = self.document.find_mut(MODAL_CONTAINER) {
            container.replace_children(vec![modal_shell(content)]);
        }
    }

    pub fn close_modal(&mut self) {
        if let Some(container) = self.document.find_mut(MODAL_CONTAINER) {
            container.replace_children(Vec::new());
        }
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn modal_is_open(&self) -> bool {
        self.document.find("modal_active").is_some()
    }

    /// The node currently shown inside the modal, if any.
    #[must_use]
    pub fn modal_content(&self) -> Option<&Node> {
        self.document.find("modal__content")?.child_nodes().first()
    }

    // ------------------------------------------------------------------
    // Interaction lookup
    // ------------------------------------------------------------------

    #[must_use]
    pub fn event_for_class(&self, class: &str) -> Option<AppEvent> {
        self.document.click_event_for(class)
    }

    #[must_use]
    pub fn event_for_named(&self, name: &str) -> Option<AppEvent> {
        self.document.click_event_for_named(name)
    }

    #[must_use]
    pub fn event_for_item(&self, class: &str, id: &str) -> Option<AppEvent> {
        self.document.click_event_for_item(class, id)
    }

    #[must_use]
    pub fn input_for_named(&self, name: &str) -> Option<FormField> {
        self.document.input_field_for_named(name)
    }
}
