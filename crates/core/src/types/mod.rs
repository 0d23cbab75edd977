//! Core types for Perfume House.
//!
//! Wire-compatible records for the remote data service, plus type-safe
//! wrappers for common domain concepts.

pub mod banner;
pub mod catalog;
pub mod id;
pub mod price;
pub mod session;
pub mod settings;

pub use banner::{Banner, BannerContent};
pub use catalog::{Category, Product, Service};
pub use id::*;
pub use price::Price;
pub use session::AuthSession;
pub use settings::{StoreSettings, ThemeSettings};
