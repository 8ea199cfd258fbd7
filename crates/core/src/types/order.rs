//! Order submission wire types.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// Payment method selected during checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payment {
    /// Pay online by card.
    Card,
    /// Pay in cash on delivery.
    Cash,
}

impl Payment {
    /// Human-readable button label for the order form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Онлайн",
            Self::Cash => "При получении",
        }
    }
}

/// Body of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub payment: Payment,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Total price of the cart in synapses.
    pub total: u64,
    /// Ids of the purchased products, in cart order.
    pub items: Vec<ProductId>,
}

/// Order confirmation returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Server-assigned order id, when provided.
    #[serde(default)]
    pub id: Option<String>,
    pub total: u64,
}
