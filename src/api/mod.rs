//! HTTP API
//!
//! Thin actix-web adapter over the lookup services and the loader.

pub mod constants;
pub mod helpers;
pub mod middleware;
pub mod services;
pub mod types;

pub use services::configure_routes;
