//! Market data: quotes, option chains, historical pricing, time & sales, market status,
//! and symbol search.

mod model;

pub use model::{HistoryInterval, SecurityType, SessionFilter, TimeSalesInterval};

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::core::client::ClientInner;
use crate::core::models::{DATE_FORMAT, DATETIME_FORMAT};
use crate::core::{Endpoint, QueryParams, TradierError};

/// Client for the `/v1/markets` resource group.
///
/// Every method issues a single `GET` and returns the response body untouched.
///
/// # Example
///
/// ```no_run
/// # use tradier_rs::{AccountType, TradierClient};
/// # use tradier_rs::market::HistoryInterval;
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TradierClient::new("my-access-token", AccountType::Sandbox)?;
/// let market = client.market();
///
/// let clock = market.clock().await?;
/// let history = market
///     .historical_pricing(
///         "AAPL",
///         Some(HistoryInterval::Weekly),
///         NaiveDate::from_ymd_opt(2024, 1, 1),
///         None,
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketClient {
    inner: Arc<ClientInner>,
}

impl MarketClient {
    pub(crate) const fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) const fn inner(&self) -> &Arc<ClientInner> {
        &self.inner
    }

    /// Get quotes for one or more equity or option symbols.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Value, TradierError> {
        let query =
            QueryParams::new().with_list("symbols", symbols.iter().map(AsRef::<str>::as_ref));
        self.inner.get(Endpoint::Quotes, query).await
    }

    /// Get all quotes in an option chain for one expiration.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn option_chains(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with("symbol", symbol)
            .with("expiration", expiration.format(DATE_FORMAT));
        self.inner.get(Endpoint::OptionChains, query).await
    }

    /// Get the strike prices of an underlying for one expiration.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn option_strikes(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with("symbol", symbol)
            .with("expiration", expiration.format(DATE_FORMAT));
        self.inner.get(Endpoint::OptionStrikes, query).await
    }

    /// Get expiration dates for an underlying.
    ///
    /// Some underlyings list weeklies under a different root (SPX/SPXW, RUT/RUTW). Pass
    /// `include_all_roots` to see every expiration, including roots created by corporate
    /// actions (AAPL1). `strikes` adds the strike list to each expiration. Both flags are
    /// always sent.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn option_expirations(
        &self,
        symbol: &str,
        include_all_roots: bool,
        strikes: bool,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with("symbol", symbol)
            .with("includeAllRoots", include_all_roots)
            .with("strikes", strikes);
        self.inner.get(Endpoint::OptionExpirations, query).await
    }

    /// Get historical pricing for a single security.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn historical_pricing(
        &self,
        symbol: &str,
        interval: Option<HistoryInterval>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with("symbol", symbol)
            .with_opt("interval", interval)
            .with_opt("start", start.map(|d| d.format(DATE_FORMAT)))
            .with_opt("end", end.map(|d| d.format(DATE_FORMAT)));
        self.inner.get(Endpoint::History, query).await
    }

    /// Get time & sales for a single security.
    ///
    /// Tick data gets large quickly for active symbols; keep the range short.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn time_and_sales(
        &self,
        symbol: &str,
        interval: Option<TimeSalesInterval>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        session_filter: Option<SessionFilter>,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with("symbol", symbol)
            .with_opt("interval", interval)
            .with_opt("start", start.map(|d| d.format(DATETIME_FORMAT)))
            .with_opt("end", end.map(|d| d.format(DATETIME_FORMAT)))
            .with_opt("session_filter", session_filter);
        self.inner.get(Endpoint::TimeSales, query).await
    }

    /// Get the easy-to-borrow list: securities that can be sold short.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn etb_securities(&self) -> Result<Value, TradierError> {
        self.inner.get(Endpoint::EtbSecurities, QueryParams::new()).await
    }

    /// Get the intraday market status.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn clock(&self) -> Result<Value, TradierError> {
        self.inner.get(Endpoint::Clock, QueryParams::new()).await
    }

    /// Get the market calendar. Defaults to the current month server-side.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn calendar(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with_opt("month", month.map(|m| format!("{m:02}")))
            .with_opt("year", year);
        self.inner.get(Endpoint::Calendar, query).await
    }

    /// Search companies by keyword on their description, ordered by average volume.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn search_companies(
        &self,
        q: &str,
        indexes: Option<bool>,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new().with("q", q).with_opt("indexes", indexes);
        self.inner.get(Endpoint::SearchCompanies, query).await
    }

    /// Look up symbols by full or partial ticker, ordered by average volume.
    ///
    /// `exchanges` is always sent, as an empty string when the slice is empty.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, exchanges), err))]
    pub async fn search_symbols<S: AsRef<str>>(
        &self,
        q: &str,
        exchanges: &[S],
        types: Option<&[SecurityType]>,
    ) -> Result<Value, TradierError> {
        let query = QueryParams::new()
            .with("q", q)
            .with_list("exchanges", exchanges.iter().map(AsRef::<str>::as_ref))
            .with_opt("types", types.map(crate::core::request::join_list));
        self.inner.get(Endpoint::LookupSymbol, query).await
    }
}
