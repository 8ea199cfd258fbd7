//! Larek storefront binary.
//!
//! Boots the application against the configured backend: loads
//! configuration, assembles the component graph, fetches the catalog, and
//! logs a render summary. All interactive behavior lives in the library and
//! is exercised through [`larek_storefront::App`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::rc::Rc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use larek_storefront::api::HttpApi;
use larek_storefront::config::AppConfig;
use larek_storefront::{App, Result};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "larek_storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(api = %config.api_base_url, cdn = %config.cdn_base_url, "starting storefront");

    let api = Rc::new(HttpApi::new(&config.api_base_url));
    let app = App::new(&config, api)?;

    // spawn_local (used for order submission) needs a LocalSet to land in.
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            if let Err(err) = app.start().await {
                tracing::error!(error = %err, "catalog fetch failed, starting empty");
            }

            let page = app.page().borrow();
            tracing::info!(
                products = app.catalog().items().len(),
                cards = page.document().find_all("gallery__item").len(),
                "catalog rendered"
            );
        })
        .await;

    Ok(())
}
