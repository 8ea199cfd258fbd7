//! Storefront intents over the HTTP capability.

use std::rc::Rc;

use larek_core::{OrderConfirmation, OrderPayload, Product, ProductListResponse};

use super::{Api, HttpError};
use crate::events::{AppEvent, EventBus};

/// Remote service adapter: fetches the catalog and submits orders.
///
/// Outcomes are announced on the bus - `OrderAccepted` on a successful
/// submit, `ApiFailed` on any failure - and errors still propagate to the
/// caller; nothing is swallowed here.
pub struct ShopApi {
    api: Rc<dyn Api>,
    bus: Rc<EventBus>,
}

impl ShopApi {
    #[must_use]
    pub fn new(api: Rc<dyn Api>, bus: Rc<EventBus>) -> Self {
        Self { api, bus }
    }

    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`HttpError`] after emitting `ApiFailed`.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, HttpError> {
        let result = async {
            let value = self.api.get("/product").await?;
            let response: ProductListResponse = serde_json::from_value(value)?;
            Ok(response.items)
        }
        .await;

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "catalog fetched");
                Ok(items)
            }
            Err(err) => Err(self.announce_failure("catalog fetch", err)),
        }
    }

    /// Submit a composed order.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`HttpError`] after emitting `ApiFailed`.
    pub async fn submit_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<OrderConfirmation, HttpError> {
        let result = async {
            let body = serde_json::to_value(payload)?;
            let value = self.api.post("/order", body).await?;
            let confirmation: OrderConfirmation = serde_json::from_value(value)?;
            Ok(confirmation)
        }
        .await;

        match result {
            Ok(confirmation) => {
                tracing::info!(total = confirmation.total, "order accepted");
                self.bus.emit(&AppEvent::OrderAccepted {
                    total: confirmation.total,
                });
                Ok(confirmation)
            }
            Err(err) => Err(self.announce_failure("order submit", err)),
        }
    }

    fn announce_failure(&self, operation: &str, err: HttpError) -> HttpError {
        tracing::error!(%operation, error = %err, "API call failed");
        self.bus.emit(&AppEvent::ApiFailed {
            message: err.to_string(),
        });
        err
    }
}
