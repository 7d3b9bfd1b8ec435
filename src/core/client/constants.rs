//! Centralized constants for default hosts and UA.

/// Default UA identifying this crate.
pub(crate) const USER_AGENT: &str = concat!("tradier-rs/", env!("CARGO_PKG_VERSION"));

/// Paper-trading host.
pub(crate) const DEFAULT_HOST_SANDBOX: &str = "https://sandbox.tradier.com";

/// Live-account host.
pub(crate) const DEFAULT_HOST_PRODUCTION: &str = "https://api.tradier.com";

/// Host serving HTTP streaming events.
pub(crate) const DEFAULT_HOST_STREAM: &str = "https://stream.tradier.com";

/// Environment variable holding the bearer token.
pub(crate) const ENV_ACCESS_TOKEN: &str = "TRADIER_ACCESS_TOKEN";

/// Environment variable holding the account type label.
pub(crate) const ENV_ACCOUNT_TYPE: &str = "TRADIER_ACCOUNT_TYPE";
