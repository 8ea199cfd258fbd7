//! Product card renderers: catalog tile, detail preview, basket line.

use larek_core::{Product, ProductId};
use url::Url;

use super::{Node, category_class, image_url, price_label};
use crate::events::AppEvent;

fn category_node(category: &str) -> Node {
    let mut node = Node::new("span").class("card__category").text(category);
    if let Some(style) = category_class(category) {
        node = node.class(style);
    }
    node
}

// =============================================================================
// Catalog card
// =============================================================================

/// Rendering data for a catalog tile.
#[derive(Debug, Clone)]
pub struct CatalogCardData {
    pub id: ProductId,
    pub title: String,
    pub price: Option<u64>,
    pub image_url: String,
    pub category: String,
}

impl CatalogCardData {
    #[must_use]
    pub fn from_product(product: &Product, cdn: &Url) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image_url: image_url(cdn, &product.image),
            category: product.category.clone(),
        }
    }
}

/// Catalog tile; clicking it selects the product for detail view.
#[must_use]
pub fn catalog_card(data: &CatalogCardData) -> Node {
    Node::new("button")
        .class("gallery__item")
        .class("card")
        .attr("data-id", data.id.to_string())
        .on_click(AppEvent::CardSelected {
            id: data.id.clone(),
        })
        .child(category_node(&data.category))
        .child(Node::new("h2").class("card__title").text(&data.title))
        .child(
            Node::new("img")
                .class("card__image")
                .attr("src", &data.image_url)
                .attr("alt", &data.title),
        )
        .child(
            Node::new("span")
                .class("card__price")
                .text(price_label(data.price)),
        )
}

// =============================================================================
// Preview card
// =============================================================================

/// What the preview action button offers for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    AddToCart,
    RemoveFromCart,
    Unavailable,
}

impl PreviewAction {
    /// Pick the action from purchasability and cart membership.
    #[must_use]
    pub const fn for_product(purchasable: bool, in_cart: bool) -> Self {
        if !purchasable {
            Self::Unavailable
        } else if in_cart {
            Self::RemoveFromCart
        } else {
            Self::AddToCart
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddToCart => "В корзину",
            Self::RemoveFromCart => "Удалить из корзины",
            Self::Unavailable => "Недоступно",
        }
    }

    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Rendering data for the detail preview shown in the modal.
#[derive(Debug, Clone)]
pub struct PreviewCardData {
    pub id: ProductId,
    pub title: String,
    pub price: Option<u64>,
    pub image_url: String,
    pub category: String,
    pub description: String,
    pub action: PreviewAction,
}

impl PreviewCardData {
    #[must_use]
    pub fn from_product(product: &Product, cdn: &Url, in_cart: bool) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image_url: image_url(cdn, &product.image),
            category: product.category.clone(),
            description: product.description.clone(),
            action: PreviewAction::for_product(product.is_purchasable(), in_cart),
        }
    }
}

/// Full product preview; the action button toggles cart membership.
#[must_use]
pub fn preview_card(data: &PreviewCardData) -> Node {
    Node::new("div")
        .class("card")
        .class("card_full")
        .attr("data-id", data.id.to_string())
        .child(
            Node::new("img")
                .class("card__image")
                .attr("src", &data.image_url)
                .attr("alt", &data.title),
        )
        .child(
            Node::new("div")
                .class("card__column")
                .child(category_node(&data.category))
                .child(Node::new("h2").class("card__title").text(&data.title))
                .child(Node::new("p").class("card__text").text(&data.description))
                .child(
                    Node::new("div")
                        .class("card__row")
                        .child(
                            Node::new("button")
                                .class("button")
                                .class("card__button")
                                .text(data.action.label())
                                .disabled(data.action.is_disabled())
                                .on_click(AppEvent::PurchaseToggled {
                                    id: data.id.clone(),
                                }),
                        )
                        .child(
                            Node::new("span")
                                .class("card__price")
                                .text(price_label(data.price)),
                        ),
                ),
        )
}

// =============================================================================
// Basket line
// =============================================================================

/// Rendering data for one basket line.
#[derive(Debug, Clone)]
pub struct BasketLineData {
    pub id: ProductId,
    pub title: String,
    pub price: Option<u64>,
    /// 1-based display position.
    pub position: usize,
}

impl BasketLineData {
    #[must_use]
    pub fn from_product(product: &Product, position: usize) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            position,
        }
    }
}

/// One line of the basket list, with its delete button.
#[must_use]
pub fn basket_line(data: &BasketLineData) -> Node {
    Node::new("li")
        .class("basket__item")
        .class("card")
        .class("card_compact")
        .attr("data-id", data.id.to_string())
        .child(
            Node::new("span")
                .class("basket__item-index")
                .text(data.position.to_string()),
        )
        .child(Node::new("span").class("card__title").text(&data.title))
        .child(
            Node::new("span")
                .class("card__price")
                .text(price_label(data.price)),
        )
        .child(
            Node::new("button")
                .class("basket__item-delete")
                .attr("aria-label", "удалить")
                .on_click(AppEvent::ItemRemoved {
                    id: data.id.clone(),
                }),
        )
}
