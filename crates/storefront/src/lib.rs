//! Larek storefront library.
//!
//! This crate provides the storefront as a library, allowing the whole
//! catalog/cart/checkout flow to be driven and tested without a network.
//!
//! # Architecture
//!
//! - Single-threaded: components share state via `Rc`/`RefCell`
//! - A synchronous [`events::EventBus`] mediates all component interaction
//! - Models own domain state; views are pure render functions over
//!   [`ui::Node`] trees; the [`controller::Controller`] owns flow
//! - The backend is reached through the injected [`api::Api`] capability

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod models;
pub mod ui;

pub use app::App;
pub use error::{AppError, Result};
