//! Request building: host selection, fixed headers, and query assembly.
//!
//! Nothing in this module performs I/O. A [`RequestBuilder`] is created once per client
//! and shared by every resource client; it only ever hands out fresh descriptors.

use std::fmt;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use crate::core::client::constants::{
    DEFAULT_HOST_PRODUCTION, DEFAULT_HOST_SANDBOX, DEFAULT_HOST_STREAM,
};
use crate::core::{AccountType, Endpoint, TradierError};

/// The three remote hosts a client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosts {
    /// Host used by sandbox accounts.
    pub sandbox: Url,
    /// Host used by production accounts.
    pub production: Url,
    /// Host serving streaming events.
    pub stream: Url,
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            sandbox: Url::parse(DEFAULT_HOST_SANDBOX).expect("valid sandbox host"),
            production: Url::parse(DEFAULT_HOST_PRODUCTION).expect("valid production host"),
            stream: Url::parse(DEFAULT_HOST_STREAM).expect("valid stream host"),
        }
    }
}

impl Hosts {
    /// (For testing) Route all three hosts to the same base, e.g. a mock server.
    #[must_use]
    pub fn uniform(base: Url) -> Self {
        Self {
            sandbox: base.clone(),
            production: base.clone(),
            stream: base,
        }
    }
}

/// Ordered query parameters of one request.
///
/// Absent optional values are never recorded, so they never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    /// An empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append `name=value`.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.0.push((name, value.to_string()));
        self
    }

    /// Append `name=value` only when `value` is present.
    #[must_use]
    pub fn with_opt<T: fmt::Display>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Append `name` with all `values` joined by commas. An empty list yields `name=`.
    #[must_use]
    pub fn with_list<I>(self, name: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.with(name, join_list(values))
    }

    /// The value recorded for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(k, v)| (*k == name).then_some(v.as_str()))
    }

    /// All recorded pairs, in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Number of recorded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no pair has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn join_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// A fully resolved request, ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Host + path, without query.
    pub url: Url,
    /// `Accept` and `Authorization`.
    pub headers: HeaderMap,
    /// Query parameters.
    pub query: QueryParams,
}

impl RequestDescriptor {
    /// The URL with the query parameters encoded onto it.
    #[must_use]
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query
                    .pairs()
                    .iter()
                    .map(|(k, v)| (*k, v.as_str())),
            );
        }
        url
    }
}

/// Resolves endpoints against the account's host and stamps the fixed headers.
///
/// The bearer token is kept only inside a header value flagged as sensitive, so it never
/// shows up in `Debug` output.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    account_type: AccountType,
    hosts: Hosts,
    headers: HeaderMap,
}

impl RequestBuilder {
    /// Create a builder against the default Tradier hosts.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::InvalidToken`] if the token is empty or cannot be sent in a
    /// header.
    pub fn new(access_token: &str, account_type: AccountType) -> Result<Self, TradierError> {
        Self::with_hosts(access_token, account_type, Hosts::default())
    }

    /// Create a builder against custom hosts.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::InvalidToken`] if the token is empty or cannot be sent in a
    /// header.
    pub fn with_hosts(
        access_token: &str,
        account_type: AccountType,
        hosts: Hosts,
    ) -> Result<Self, TradierError> {
        if access_token.trim().is_empty() {
            return Err(TradierError::InvalidToken("token is empty".into()));
        }
        let mut auth = HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(|_| {
            TradierError::InvalidToken("token contains characters not allowed in a header".into())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            account_type,
            hosts,
            headers,
        })
    }

    /// The account type that selects the regular host.
    #[must_use]
    pub const fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// The hosts requests are resolved against.
    #[must_use]
    pub const fn hosts(&self) -> &Hosts {
        &self.hosts
    }

    /// The fixed `Accept` / `Authorization` pair sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Fails with [`TradierError::StreamNotPermitted`] for sandbox accounts.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn ensure_streaming(&self) -> Result<(), TradierError> {
        if self.account_type.can_stream() {
            Ok(())
        } else {
            Err(TradierError::StreamNotPermitted)
        }
    }

    /// Join `path` onto the host selected by the account type and the stream flag.
    ///
    /// `path` must be absolute (start with `/`). The resolved URL always stays on the
    /// selected host, since the bearer token travels with it.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::StreamNotPermitted`] when `stream` is requested by a sandbox
    /// account, [`TradierError::Config`] if `path` is relative or would move the request to
    /// another host, or [`TradierError::Url`] if the result is not a valid URL.
    pub fn resolve_url(&self, path: &str, stream: bool) -> Result<Url, TradierError> {
        let host = if stream {
            self.ensure_streaming()?;
            &self.hosts.stream
        } else if self.account_type == AccountType::Production {
            &self.hosts.production
        } else {
            &self.hosts.sandbox
        };
        if !path.starts_with('/') {
            return Err(TradierError::Config(format!(
                "endpoint path must start with '/': {path:?}"
            )));
        }
        let url = Url::parse(&format!(
            "{}{path}",
            host.as_str().trim_end_matches('/')
        ))?;
        if url.scheme() != host.scheme()
            || url.host_str() != host.host_str()
            || url.port_or_known_default() != host.port_or_known_default()
        {
            return Err(TradierError::Config(format!(
                "endpoint path {path:?} leaves host {host}"
            )));
        }
        Ok(url)
    }

    /// Build the descriptor for one call of `endpoint`.
    ///
    /// # Errors
    ///
    /// Fails before any network access if the endpoint needs streaming on a sandbox
    /// account, or if a path placeholder is missing or not path-safe.
    pub fn build(
        &self,
        method: Method,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: QueryParams,
    ) -> Result<RequestDescriptor, TradierError> {
        if endpoint.requires_streaming() {
            self.ensure_streaming()?;
        }
        let path = endpoint.path(path_params)?;
        let url = self.resolve_url(&path, endpoint.uses_stream_host())?;
        Ok(RequestDescriptor {
            method,
            url,
            headers: self.headers.clone(),
            query,
        })
    }
}
