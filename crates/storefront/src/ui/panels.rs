//! Page-level panels: header, basket, order success, and the modal shell.

use super::{Node, price_label};
use crate::events::AppEvent;

/// Page header with the basket button and its item counter.
#[must_use]
pub fn header(count: usize) -> Node {
    Node::new("header").class("header").child(
        Node::new("button")
            .class("header__basket")
            .on_click(AppEvent::BasketOpened)
            .child(
                Node::new("span")
                    .class("header__basket-counter")
                    .text(count.to_string()),
            ),
    )
}

/// Basket contents panel. The checkout button is disabled while empty.
#[must_use]
pub fn basket_panel(lines: Vec<Node>, total: u64, empty: bool) -> Node {
    Node::new("div")
        .class("basket")
        .child(Node::new("h2").class("modal__title").text("Корзина"))
        .child(Node::new("ul").class("basket__list").children(lines))
        .child(
            Node::new("div")
                .class("modal__actions")
                .child(
                    Node::new("button")
                        .class("button")
                        .class("basket__button")
                        .text("Оформить")
                        .disabled(empty)
                        .on_click(AppEvent::OrderStarted),
                )
                .child(
                    Node::new("span")
                        .class("basket__price")
                        .text(price_label(Some(total))),
                ),
        )
}

/// Order confirmation panel showing the charged total.
#[must_use]
pub fn success_panel(total: u64) -> Node {
    Node::new("div")
        .class("order-success")
        .child(
            Node::new("h2")
                .class("order-success__title")
                .text("Заказ оформлен"),
        )
        .child(
            Node::new("p")
                .class("order-success__description")
                .text(format!("Списано {total} синапсов")),
        )
        .child(
            Node::new("button")
                .class("button")
                .class("order-success__close")
                .text("За новыми покупками!")
                .on_click(AppEvent::SuccessClosed),
        )
}

/// Modal overlay wrapping arbitrary content. Clicking the overlay or the
/// close button dismisses it; the container swallows clicks.
#[must_use]
pub fn modal_shell(content: Node) -> Node {
    Node::new("div")
        .class("modal")
        .class("modal_active")
        .on_click(AppEvent::ModalClosed)
        .child(
            Node::new("div")
                .class("modal__container")
                .child(
                    Node::new("button")
                        .class("modal__close")
                        .attr("aria-label", "закрыть")
                        .on_click(AppEvent::ModalClosed),
                )
                .child(Node::new("div").class("modal__content").child(content)),
        )
}
