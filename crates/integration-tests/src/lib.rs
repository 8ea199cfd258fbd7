//! Shared harness for end-to-end storefront tests.
//!
//! The harness assembles a full [`App`] over a scripted transport, so tests
//! drive the storefront exactly as a user would: simulated clicks and
//! keystrokes in, rendered page trees out. No network is involved.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test-support crate: fixture construction may panic on malformed fixtures.
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use larek_storefront::App;
use larek_storefront::api::{Api, HttpError};
use larek_storefront::config::AppConfig;
use serde_json::{Value, json};
use url::Url;

/// Scripted [`Api`] implementation recording every POST it receives.
pub struct MockApi {
    get_response: RefCell<Result<Value, u16>>,
    post_response: RefCell<Result<Value, u16>>,
    posts: RefCell<Vec<(String, Value)>>,
}

impl MockApi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            get_response: RefCell::new(Err(503)),
            post_response: RefCell::new(Err(503)),
            posts: RefCell::new(Vec::new()),
        }
    }

    /// Script the catalog the backend serves.
    pub fn serve_catalog(&self, products: &[Value]) {
        *self.get_response.borrow_mut() = Ok(json!({
            "total": products.len(),
            "items": products,
        }));
    }

    /// Script a successful order confirmation.
    pub fn accept_orders(&self, total: u64) {
        *self.post_response.borrow_mut() = Ok(json!({ "id": "order-1", "total": total }));
    }

    /// Script order submission to fail with `status`.
    pub fn reject_orders(&self, status: u16) {
        *self.post_response.borrow_mut() = Err(status);
    }

    /// Every POST observed so far, as `(path, body)` pairs.
    #[must_use]
    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.borrow().clone()
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Api for MockApi {
    async fn get(&self, _path: &str) -> Result<Value, HttpError> {
        self.get_response
            .borrow()
            .clone()
            .map_err(|status| HttpError::Status {
                status,
                body: String::new(),
            })
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.posts.borrow_mut().push((path.to_string(), body));
        self.post_response
            .borrow()
            .clone()
            .map_err(|status| HttpError::Status {
                status,
                body: String::new(),
            })
    }
}

/// A catalog product in the backend's wire shape.
#[must_use]
pub fn product_json(id: &str, title: &str, price: Option<u64>) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title} description"),
        "image": format!("/{id}.svg"),
        "category": "другое",
    })
}

/// Assemble an [`App`] over the given transport.
#[must_use]
pub fn app_with(api: Rc<MockApi>) -> App {
    let config = AppConfig {
        api_base_url: Url::parse("https://larek.example/api/weblarek").unwrap(),
        cdn_base_url: Url::parse("https://larek.example/content/weblarek").unwrap(),
    };
    App::new(&config, api).unwrap()
}

/// Let spawned local tasks (order submission) run to completion.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
