//! Perfume House Core - Shared types library.
//!
//! This crate provides common types used across all Perfume House components:
//! - `storefront` - Public-facing site and admin area
//! - `integration-tests` - Cross-crate behavior tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no timers. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Store settings, banners, categories, catalog records, and
//!   typed ids
//! - [`theme`] - Derivation of the named theme variables from settings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod theme;
pub mod types;

pub use theme::ThemeVariables;
pub use types::*;
