//! Company fundamentals under `/beta/markets/fundamentals`.
//!
//! Every endpoint here is part of Tradier's **beta** surface: it is only available to
//! Tradier Brokerage account holders and should be used in production applications with
//! caution. [`Endpoint::is_beta`] reports this for each call; the client does not enforce it.

use std::sync::Arc;

use serde_json::Value;

use crate::core::client::ClientInner;
use crate::core::{Endpoint, QueryParams, TradierError};

/// Client for the fundamentals resource group (beta).
#[derive(Debug, Clone)]
pub struct FundamentalsClient {
    inner: Arc<ClientInner>,
}

impl FundamentalsClient {
    pub(crate) const fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) const fn inner(&self) -> &Arc<ClientInner> {
        &self.inner
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, symbols), fields(n = symbols.len()), err)
    )]
    async fn by_symbols<S: AsRef<str>>(
        &self,
        endpoint: Endpoint,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        let query =
            QueryParams::new().with_list("symbols", symbols.iter().map(AsRef::<str>::as_ref));
        self.inner.get(endpoint, query).await
    }

    /// Company profile information.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn company<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::Company, symbols).await
    }

    /// Corporate calendar events. Dividends are not included.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn corporate_calendars<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::CorporateCalendars, symbols).await
    }

    /// Past dividends and formally announced future dividend dates.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn dividends<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::Dividends, symbols).await
    }

    /// Historical and scheduled corporate actions.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn corporate_actions<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::CorporateActions, symbols).await
    }

    /// Standard financial ratios.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn ratios<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::Ratios, symbols).await
    }

    /// Financial statements and reports.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn financial_reports<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::FinancialReports, symbols).await
    }

    /// Price statistics.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the request fails or the body is not JSON.
    pub async fn price_statistics<S: AsRef<str>>(
        &self,
        symbols: &[S],
    ) -> Result<Value, TradierError> {
        self.by_symbols(Endpoint::PriceStatistics, symbols).await
    }
}
