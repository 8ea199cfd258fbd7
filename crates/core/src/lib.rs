//! Larek Core - Shared domain types.
//!
//! This crate provides the domain types used across the Larek storefront:
//! products, identifiers, payment methods, and order wire shapes.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no DOM
//! concerns. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product, ProductId, Payment, and order payload/confirmation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
