//! Unified application error type.
//!
//! The error taxonomy splits along recoverability:
//!
//! - [`CartError`](crate::models::CartError) and
//!   [`IdError`](larek_core::IdError) are invalid-argument conditions: the
//!   controller validates upstream, so hitting one is a programming defect.
//!   They are allowed to propagate and fail loudly.
//! - [`UiError`](crate::ui::UiError) means a required element was missing
//!   when the page shell was built; fatal at startup.
//! - [`HttpError`](crate::api::HttpError) is the only recoverable kind: the
//!   controller converts it into a user-visible form message and the user
//!   may retry.
//! - `ValidationErrors` is deliberately *not* here: field-presence results
//!   are plain values driving the UI, never errors.

use thiserror::Error;

use crate::api::HttpError;
use crate::config::ConfigError;
use crate::ui::UiError;

/// Top-level error type for the storefront binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The page shell could not be constructed.
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    /// A backend call failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
