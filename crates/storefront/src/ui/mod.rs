//! View layer: pure render functions over an owned node tree.
//!
//! Every view is a `render(data) -> Node` function taking a plain data
//! record and returning a freshly built fragment - no partially updated
//! intermediate states. Interaction points are declared on the nodes
//! themselves ([`Node::on_click`], [`Node::on_input`]) as bus events, so the
//! view layer never calls into models or the controller.

pub mod node;

mod cards;
mod forms;
mod page;
mod panels;

pub use cards::{
    BasketLineData, CatalogCardData, PreviewAction, PreviewCardData, basket_line, catalog_card,
    preview_card,
};
pub use forms::{ContactsFormData, OrderFormData, contacts_form, order_form};
pub use node::Node;
pub use page::{Page, SharedPage, static_document};
pub use panels::{basket_panel, header, modal_shell, success_panel};

use thiserror::Error;
use url::Url;

/// A required element was missing when a view shell was constructed.
///
/// Fatal to that construction - optional elements degrade to silent no-ops
/// instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("required element missing: {0}")]
    ElementNotFound(&'static str),
}

/// Price text: `"{n} синапсов"`, or the priceless fallback label.
#[must_use]
pub fn price_label(price: Option<u64>) -> String {
    price.map_or_else(|| "Бесценно".to_string(), |value| format!("{value} синапсов"))
}

/// Style class for a product category. Unknown categories get no class.
#[must_use]
pub fn category_class(category: &str) -> Option<&'static str> {
    match category {
        "софт-скил" => Some("card__category_soft"),
        "хард-скил" => Some("card__category_hard"),
        "кнопка" => Some("card__category_button"),
        "дополнительное" => Some("card__category_additional"),
        "другое" => Some("card__category_other"),
        _ => None,
    }
}

/// Absolute image URL from the CDN base and a product's relative path.
#[must_use]
pub fn image_url(cdn: &Url, path: &str) -> String {
    format!("{}{path}", cdn.as_str().trim_end_matches('/'))
}
