//! tradier-rs: typed client for the Tradier brokerage REST API.
//!
//! Each method maps to exactly one HTTP call and returns the parsed JSON body as a
//! [`serde_json::Value`]. Requests go to the sandbox or production host depending on the
//! [`AccountType`] the client was built with; streaming endpoints use a dedicated host and
//! are refused for sandbox accounts.
//!
//! ```no_run
//! # use tradier_rs::{AccountType, TradierClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), tradier_rs::TradierError> {
//! let client = TradierClient::builder("my-access-token", AccountType::Production)
//!     .timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let clock = client.market().clock().await?;
//! let expirations = client.market().option_expirations("SPX", true, false).await?;
//! # Ok(())
//! # }
//! ```

/// Implements `Display` by delegating to the type's `as_str`.
macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

pub mod account;
pub mod core;
pub mod fundamentals;
pub mod market;
pub mod oauth;
pub mod streaming;

pub use crate::core::{
    AccountType, Endpoint, Hosts, PRODUCTION_ACCOUNT_LABELS, QueryParams, RequestBuilder,
    RequestDescriptor, TradierClient, TradierClientBuilder, TradierError,
};
pub use account::AccountClient;
pub use fundamentals::FundamentalsClient;
pub use market::MarketClient;
pub use streaming::{EventStream, StreamingClient};
