//! Middleware for the storefront.

pub mod auth;
pub mod session;
pub mod splash;
