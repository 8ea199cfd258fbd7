//! Newtype product identifier.
//!
//! Product ids arrive as opaque strings from the catalog API. Wrapping them
//! in [`ProductId`] keeps them from being mixed up with other strings and
//! rejects empty ids at the wire boundary: a `ProductId` that exists is
//! always non-empty.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a [`ProductId`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    /// The id string was empty.
    #[error("product id must not be empty")]
    Empty,
}

/// Opaque, non-empty product identifier.
///
/// Deserialization goes through [`ProductId::new`], so an empty id in a
/// server response fails the whole parse instead of producing an invalid
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from a string, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Empty`] if the string is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(id))
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = IdError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
