//! geoip-server - IP geolocation over HTTP
//!
//! Resolves IP addresses against a locally loaded MaxMind database and
//! reloads that database atomically, without interrupting lookups.
//!
//! # Architecture
//! - `database`: snapshot handle, loader, MaxMind backend
//! - `services`: single and bulk lookups
//! - `api`: HTTP routes and middleware
//! - `config`: static configuration (TOML + environment)
//! - `runtime`: startup, server mode, shutdown
//! - `system`: logging and signal-driven reload

pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod system;
