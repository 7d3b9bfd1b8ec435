//! Public client surface + builder.
//! Host defaults and environment keys live in `constants`.

pub(crate) mod constants;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde_json::Value;

use crate::account::AccountClient;
use crate::core::{AccountType, Endpoint, Hosts, QueryParams, RequestBuilder, TradierError, net};
use crate::fundamentals::FundamentalsClient;
use crate::market::MarketClient;
use crate::streaming::StreamingClient;
use constants::{ENV_ACCESS_TOKEN, ENV_ACCOUNT_TYPE, USER_AGENT};

/// State shared by every resource client of one [`TradierClient`]. Read-only after build.
#[derive(Debug)]
pub(crate) struct ClientInner {
    http: Client,
    requests: RequestBuilder,
}

impl ClientInner {
    pub(crate) const fn requests(&self) -> &RequestBuilder {
        &self.requests
    }

    /// `GET` a non-templated endpoint and return its JSON body.
    pub(crate) async fn get(
        &self,
        endpoint: Endpoint,
        query: QueryParams,
    ) -> Result<Value, TradierError> {
        self.call(Method::GET, endpoint, &[], query).await
    }

    /// Issue one request and return its JSON body.
    pub(crate) async fn call(
        &self,
        method: Method,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: QueryParams,
    ) -> Result<Value, TradierError> {
        let req = self.requests.build(method, endpoint, path_params, query)?;
        net::send_json(&self.http, req).await
    }

    /// Issue one request and hand back the raw response for incremental reading.
    pub(crate) async fn open(
        &self,
        method: Method,
        endpoint: Endpoint,
        query: QueryParams,
    ) -> Result<Response, TradierError> {
        let req = self.requests.build(method, endpoint, &[], query)?;
        net::send(&self.http, req).await
    }
}

/// Entry point to the Tradier API.
///
/// Built once from an access token and an [`AccountType`]; the request builder and HTTP
/// client are created a single time and shared by all resource clients. Cloning is cheap.
///
/// # Example
///
/// ```no_run
/// # use tradier_rs::{AccountType, TradierClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TradierClient::new("my-access-token", AccountType::Sandbox)?;
///
/// let quotes = client.market().quotes(&["AAPL", "MSFT"]).await?;
/// println!("{quotes:#}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TradierClient {
    inner: Arc<ClientInner>,
    market: MarketClient,
    fundamentals: FundamentalsClient,
    account: AccountClient,
    streaming: StreamingClient,
}

impl TradierClient {
    /// Create a client with default transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unusable or the HTTP client cannot be built.
    pub fn new(
        access_token: impl Into<String>,
        account_type: AccountType,
    ) -> Result<Self, TradierError> {
        Self::builder(access_token, account_type).build()
    }

    /// Create a new builder.
    pub fn builder(
        access_token: impl Into<String>,
        account_type: AccountType,
    ) -> TradierClientBuilder {
        TradierClientBuilder::new(access_token, account_type)
    }

    fn from_parts(http: Client, requests: RequestBuilder) -> Self {
        let inner = Arc::new(ClientInner { http, requests });
        Self {
            market: MarketClient::new(Arc::clone(&inner)),
            fundamentals: FundamentalsClient::new(Arc::clone(&inner)),
            account: AccountClient::new(Arc::clone(&inner)),
            streaming: StreamingClient::new(Arc::clone(&inner)),
            inner,
        }
    }

    /// Quotes, options, history, calendars and symbol search.
    #[must_use]
    pub const fn market(&self) -> &MarketClient {
        &self.market
    }

    /// Company fundamentals (beta surface).
    #[must_use]
    pub const fn fundamentals(&self) -> &FundamentalsClient {
        &self.fundamentals
    }

    /// Balances, positions, history, gain/loss and orders.
    #[must_use]
    pub const fn account(&self) -> &AccountClient {
        &self.account
    }

    /// HTTP streaming sessions and events.
    #[must_use]
    pub const fn streaming(&self) -> &StreamingClient {
        &self.streaming
    }

    /// The account type the client was built with.
    #[must_use]
    pub fn account_type(&self) -> AccountType {
        self.inner.requests.account_type()
    }

    /// The request builder shared by all resource clients.
    #[must_use]
    pub fn requests(&self) -> &RequestBuilder {
        self.inner.requests()
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`TradierClient`].
pub struct TradierClientBuilder {
    access_token: String,
    account_type: AccountType,
    user_agent: Option<String>,
    hosts: Option<Hosts>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    custom_client: Option<Client>,
}

impl fmt::Debug for TradierClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradierClientBuilder")
            .field("access_token", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("user_agent", &self.user_agent)
            .field("hosts", &self.hosts)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("custom_client", &self.custom_client.is_some())
            .finish()
    }
}

impl TradierClientBuilder {
    pub fn new(access_token: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            access_token: access_token.into(),
            account_type,
            user_agent: None,
            hosts: None,
            timeout: None,
            connect_timeout: None,
            custom_client: None,
        }
    }

    /// Read credentials from `TRADIER_ACCESS_TOKEN` (required) and `TRADIER_ACCOUNT_TYPE`
    /// (optional, defaults to `sandbox`).
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::Config`] if the token is missing or the account type label is
    /// not recognized.
    pub fn from_env() -> Result<Self, TradierError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, TradierError> {
        let token = get(ENV_ACCESS_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TradierError::Config(format!("{ENV_ACCESS_TOKEN} is not set")))?;
        let account_type = match get(ENV_ACCOUNT_TYPE) {
            Some(label) => label.parse()?,
            None => AccountType::default(),
        };
        Ok(Self::new(token, account_type))
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// (For testing) Override the sandbox, production and stream hosts.
    #[must_use]
    pub fn hosts(mut self, hosts: Hosts) -> Self {
        self.hosts = Some(hosts);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, ...).
    /// When set, the user agent and timeouts configured here are ignored.
    #[must_use]
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::InvalidToken`] for an unusable token, or
    /// [`TradierError::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<TradierClient, TradierError> {
        let requests = RequestBuilder::with_hosts(
            &self.access_token,
            self.account_type,
            self.hosts.unwrap_or_default(),
        )?;

        let http = match self.custom_client {
            Some(client) => client,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(TradierClient::from_parts(http, requests))
    }
}
