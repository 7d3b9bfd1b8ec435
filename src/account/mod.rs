//! Account operations under `/v1/accounts/{account_id}`.

mod model;

pub use model::{AccountHistoryQuery, ActivityType, GainLossQuery, GainLossSortBy, SortOrder};

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::core::client::ClientInner;
use crate::core::{Endpoint, QueryParams, TradierError};

/// Client for the account resource group.
///
/// Account and order ids are substituted into the endpoint path. They must be non-empty
/// and contain only ASCII alphanumerics, `-`, `_` or `.`; anything else fails with
/// [`TradierError::InvalidPathParam`] before a request is sent.
#[derive(Debug, Clone)]
pub struct AccountClient {
    inner: Arc<ClientInner>,
}

impl AccountClient {
    pub(crate) const fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) const fn inner(&self) -> &Arc<ClientInner> {
        &self.inner
    }

    async fn get(
        &self,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: QueryParams,
    ) -> Result<Value, TradierError> {
        self.inner
            .call(Method::GET, endpoint, path_params, query)
            .await
    }

    /// Cash, margin and equity balances.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the id is not path-safe, the request fails, or the body is
    /// not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn balances(&self, account_id: &str) -> Result<Value, TradierError> {
        self.get(
            Endpoint::Balances,
            &[("account_id", account_id)],
            QueryParams::new(),
        )
        .await
    }

    /// Open positions.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the id is not path-safe, the request fails, or the body is
    /// not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn positions(&self, account_id: &str) -> Result<Value, TradierError> {
        self.get(
            Endpoint::Positions,
            &[("account_id", account_id)],
            QueryParams::new(),
        )
        .await
    }

    /// Historical account activity (trades, transfers, dividends, ...).
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the id is not path-safe, the request fails, or the body is
    /// not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn history(
        &self,
        account_id: &str,
        filter: &AccountHistoryQuery,
    ) -> Result<Value, TradierError> {
        self.get(
            Endpoint::AccountHistory,
            &[("account_id", account_id)],
            filter.to_query(),
        )
        .await
    }

    /// Realized gain/loss of closed positions.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the id is not path-safe, the request fails, or the body is
    /// not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn gain_loss(
        &self,
        account_id: &str,
        filter: &GainLossQuery,
    ) -> Result<Value, TradierError> {
        self.get(
            Endpoint::GainLoss,
            &[("account_id", account_id)],
            filter.to_query(),
        )
        .await
    }

    /// Orders placed within the current day, plus open GTC orders.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if the id is not path-safe, the request fails, or the body is
    /// not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn orders(&self, account_id: &str, include_tags: bool) -> Result<Value, TradierError> {
        self.get(
            Endpoint::Orders,
            &[("account_id", account_id)],
            QueryParams::new().with("includeTags", include_tags),
        )
        .await
    }

    /// A single order.
    ///
    /// # Errors
    ///
    /// Returns `TradierError` if either id is not path-safe, the request fails, or the body
    /// is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn order(
        &self,
        account_id: &str,
        order_id: &str,
        include_tags: bool,
    ) -> Result<Value, TradierError> {
        self.get(
            Endpoint::Order,
            &[("account_id", account_id), ("id", order_id)],
            QueryParams::new().with("includeTags", include_tags),
        )
        .await
    }
}
