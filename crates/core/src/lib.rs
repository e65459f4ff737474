//! EcoFinds Core - Shared types library.
//!
//! This crate provides common types used across all EcoFinds components:
//! - `storefront` - Marketplace storefront (stores, catalog, HTTP surface)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   usernames, and product categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
