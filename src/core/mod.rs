//! Core components of the `coindash` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`DashClient`] and its builder.
//! - The primary [`DashError`] type.
//! - The startup [`Config`] carrying the upstream API keys.
//! - Internal networking helpers.

/// The main client (`DashClient`), builder, and TTL cache.
pub mod client;
/// Startup configuration loaded from the process environment.
pub mod config;
/// The primary error type (`DashError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DashClient`
pub use client::{CacheMode, DashClient, DashClientBuilder};
pub use config::Config;
pub use error::DashError;
