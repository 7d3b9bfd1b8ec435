//! Core components of the `tradier-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`TradierClient`] and its builder.
//! - The primary [`TradierError`] type.
//! - The endpoint table and the request builder that resolves it against a host.

/// The main client (`TradierClient`), builder, and configuration.
pub mod client;
/// The fixed table of remote operations.
pub mod endpoints;
/// The primary error type (`TradierError`) for the crate.
pub mod error;
/// Account type selection.
pub mod models;
/// Host selection, headers, and query assembly.
pub mod request;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::TradierClient`
pub use client::{TradierClient, TradierClientBuilder};
pub use endpoints::Endpoint;
pub use error::TradierError;
pub use models::{AccountType, PRODUCTION_ACCOUNT_LABELS};
pub use request::{Hosts, QueryParams, RequestBuilder, RequestDescriptor};
