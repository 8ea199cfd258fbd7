//! Owned render-tree node.
//!
//! A [`Node`] is the DOM stand-in produced by the view render functions:
//! tag, classes, attributes, text, a disabled flag, and declared interaction
//! bindings. The tree is rebuilt wholesale on every render, never patched.

use crate::events::{AppEvent, FormField};

use super::UiError;

/// One element of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: &'static str,
    classes: Vec<&'static str>,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    disabled: bool,
    on_click: Option<AppEvent>,
    on_input: Option<FormField>,
    children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            disabled: false,
            on_click: None,
            on_input: None,
            children: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------

    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Declare the event dispatched when this node is clicked.
    #[must_use]
    pub fn on_click(mut self, event: AppEvent) -> Self {
        self.on_click = Some(event);
        self
    }

    /// Declare the form field written when text is entered into this node.
    #[must_use]
    pub const fn on_input(mut self, field: FormField) -> Self {
        self.on_input = Some(field);
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub const fn click_event(&self) -> Option<&AppEvent> {
        self.on_click.as_ref()
    }

    #[must_use]
    pub const fn input_field(&self) -> Option<FormField> {
        self.on_input
    }

    #[must_use]
    pub fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Depth-first search for the first node carrying `class`.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<&Self> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(class))
    }

    /// Mutable variant of [`Self::find`].
    pub fn find_mut(&mut self, class: &str) -> Option<&mut Self> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(class))
    }

    /// Every node carrying `class`, in document order.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_all(class, &mut found);
        found
    }

    fn collect_all<'a>(&'a self, class: &str, found: &mut Vec<&'a Self>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_all(class, found);
        }
    }

    /// Like [`Self::find`], but failing fast when the element is required.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ElementNotFound`] if no node carries `class`.
    pub fn require(&self, class: &'static str) -> Result<&Self, UiError> {
        self.find(class).ok_or(UiError::ElementNotFound(class))
    }

    // ------------------------------------------------------------------
    // Interaction lookup (used by the page shell's simulation entry points)
    // ------------------------------------------------------------------

    /// The click event of the first enabled node carrying `class`.
    #[must_use]
    pub fn click_event_for(&self, class: &str) -> Option<AppEvent> {
        if self.has_class(class) && !self.disabled {
            if let Some(event) = &self.on_click {
                return Some(event.clone());
            }
        }
        self.children
            .iter()
            .find_map(|child| child.click_event_for(class))
    }

    /// The click event of the first enabled node whose `name` attribute
    /// matches.
    #[must_use]
    pub fn click_event_for_named(&self, name: &str) -> Option<AppEvent> {
        if self.attr_value("name") == Some(name) && !self.disabled {
            if let Some(event) = &self.on_click {
                return Some(event.clone());
            }
        }
        self.children
            .iter()
            .find_map(|child| child.click_event_for_named(name))
    }

    /// The click event for `class` inside the subtree tagged with
    /// `data-id == id` (the node carrying the id counts as part of its own
    /// subtree).
    #[must_use]
    pub fn click_event_for_item(&self, class: &str, id: &str) -> Option<AppEvent> {
        if self.attr_value("data-id") == Some(id) {
            return self.click_event_for(class);
        }
        self.children
            .iter()
            .find_map(|child| child.click_event_for_item(class, id))
    }

    /// The input binding of the first node whose `name` attribute matches.
    #[must_use]
    pub fn input_field_for_named(&self, name: &str) -> Option<FormField> {
        if self.attr_value("name") == Some(name) {
            if let Some(field) = self.on_input {
                return Some(field);
            }
        }
        self.children
            .iter()
            .find_map(|child| child.input_field_for_named(name))
    }

    // ------------------------------------------------------------------
    // Mutation (page shell regions only)
    // ------------------------------------------------------------------

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Wholesale child replacement - the only list update the UI performs.
    pub fn replace_children(&mut self, children: Vec<Self>) {
        self.children = children;
    }
}
