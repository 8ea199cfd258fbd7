//! Catalog bootstrap: fetch, first render, and the product preview.

#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use larek_integration_tests::{MockApi, app_with, product_json};

#[tokio::test]
async fn test_fetched_catalog_renders_one_card_per_product() {
    let api = Rc::new(MockApi::new());
    api.serve_catalog(&[product_json("widget", "Widget", Some(100))]);

    let app = app_with(Rc::clone(&api));
    app.start().await.unwrap();

    let page = app.page().borrow();
    let cards = page.document().find_all("gallery__item");
    assert_eq!(cards.len(), 1);
    assert_eq!(
        cards[0].find("card__title").unwrap().text_content(),
        Some("Widget")
    );
    assert_eq!(
        cards[0].find("card__price").unwrap().text_content(),
        Some("100 синапсов")
    );
    assert_eq!(
        page.document()
            .find("header__basket-counter")
            .unwrap()
            .text_content(),
        Some("0")
    );
}

#[tokio::test]
async fn test_failed_fetch_leaves_gallery_empty() {
    let api = Rc::new(MockApi::new());

    let app = app_with(Rc::clone(&api));
    assert!(app.start().await.is_err());

    let page = app.page().borrow();
    assert!(page.document().find_all("gallery__item").is_empty());
}

#[tokio::test]
async fn test_card_click_shows_the_preview_modal() {
    let api = Rc::new(MockApi::new());
    api.serve_catalog(&[
        product_json("widget", "Widget", Some(100)),
        product_json("gadget", "Gadget", Some(50)),
    ]);

    let app = app_with(Rc::clone(&api));
    app.start().await.unwrap();

    assert!(app.click_card("gallery__item", "gadget"));
    let page = app.page().borrow();
    let preview = page.modal_content().unwrap();
    assert!(preview.has_class("card_full"));
    assert_eq!(
        preview.find("card__title").unwrap().text_content(),
        Some("Gadget")
    );
    assert_eq!(
        preview.find("card__button").unwrap().text_content(),
        Some("В корзину")
    );
}
