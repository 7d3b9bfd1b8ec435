use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::QueryParams;
use crate::core::models::DATE_FORMAT;

/// Kind of account activity to filter history by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Trade,
    Option,
    Ach,
    Wire,
    Dividend,
    Fee,
    Tax,
    Journal,
    Check,
    Transfer,
    Adjustment,
    Interest,
}

impl ActivityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trade => "trade",
            Self::Option => "option",
            Self::Ach => "ach",
            Self::Wire => "wire",
            Self::Dividend => "dividend",
            Self::Fee => "fee",
            Self::Tax => "tax",
            Self::Journal => "journal",
            Self::Check => "check",
            Self::Transfer => "transfer",
            Self::Adjustment => "adjustment",
            Self::Interest => "interest",
        }
    }
}

/// Field to order closed positions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GainLossSortBy {
    OpenDate,
    CloseDate,
}

impl GainLossSortBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenDate => "openDate",
            Self::CloseDate => "closeDate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

display_as_str!(ActivityType, GainLossSortBy, SortOrder);

/// Optional filters of the account history endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountHistoryQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub activity_type: Option<ActivityType>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub exact_match: Option<bool>,
}

impl AccountHistoryQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn activity_type(mut self, kind: ActivityType) -> Self {
        self.activity_type = Some(kind);
        self
    }

    /// Restrict to activity between `start` and `end`, inclusive.
    #[must_use]
    pub const fn range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Restrict to one symbol. With `exact_match`, `SPY` will not also match SPY options.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>, exact_match: bool) -> Self {
        self.symbol = Some(symbol.into());
        self.exact_match = Some(exact_match);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
            .with_opt("type", self.activity_type)
            .with_opt("start", self.start.map(|d| d.format(DATE_FORMAT)))
            .with_opt("end", self.end.map(|d| d.format(DATE_FORMAT)))
            .with_opt("symbol", self.symbol.as_deref())
            .with_opt("exactMatch", self.exact_match)
    }
}

/// Optional filters of the gain/loss endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GainLossQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<GainLossSortBy>,
    pub sort: Option<SortOrder>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub symbol: Option<String>,
}

impl GainLossQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn sorted(mut self, by: GainLossSortBy, order: SortOrder) -> Self {
        self.sort_by = Some(by);
        self.sort = Some(order);
        self
    }

    #[must_use]
    pub const fn range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
            .with_opt("sortBy", self.sort_by)
            .with_opt("sort", self.sort)
            .with_opt("start", self.start.map(|d| d.format(DATE_FORMAT)))
            .with_opt("end", self.end.map(|d| d.format(DATE_FORMAT)))
            .with_opt("symbol", self.symbol.as_deref())
    }
}
