//! The fixed table of remote operations and their path templates.

use crate::core::TradierError;

/// One remote operation of the Tradier API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /* -------- market data -------- */
    Quotes,
    OptionChains,
    OptionStrikes,
    OptionExpirations,
    History,
    TimeSales,
    EtbSecurities,
    Clock,
    Calendar,
    SearchCompanies,
    LookupSymbol,

    /* -------- fundamentals (beta) -------- */
    Company,
    CorporateCalendars,
    Dividends,
    CorporateActions,
    Ratios,
    FinancialReports,
    PriceStatistics,

    /* -------- account -------- */
    Balances,
    Positions,
    AccountHistory,
    GainLoss,
    Orders,
    Order,

    /* -------- streaming -------- */
    StreamSession,
    StreamEvents,

    /* -------- oauth -------- */
    Authorize,
}

impl Endpoint {
    /// The path template, possibly containing `{name}` placeholders.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Quotes => "/v1/markets/quotes",
            Self::OptionChains => "/v1/markets/options/chains",
            Self::OptionStrikes => "/v1/markets/options/strikes",
            Self::OptionExpirations => "/v1/markets/options/expirations",
            Self::History => "/v1/markets/history",
            Self::TimeSales => "/v1/markets/timesales",
            Self::EtbSecurities => "/v1/markets/etb",
            Self::Clock => "/v1/markets/clock",
            Self::Calendar => "/v1/markets/calendar",
            Self::SearchCompanies => "/v1/markets/search",
            Self::LookupSymbol => "/v1/markets/lookup",

            Self::Company => "/beta/markets/fundamentals/company",
            Self::CorporateCalendars => "/beta/markets/fundamentals/calendars",
            Self::Dividends => "/beta/markets/fundamentals/dividends",
            Self::CorporateActions => "/beta/markets/fundamentals/corporate_actions",
            Self::Ratios => "/beta/markets/fundamentals/ratios",
            Self::FinancialReports => "/beta/markets/fundamentals/financials",
            Self::PriceStatistics => "/beta/markets/fundamentals/statistics",

            Self::Balances => "/v1/accounts/{account_id}/balances",
            Self::Positions => "/v1/accounts/{account_id}/positions",
            Self::AccountHistory => "/v1/accounts/{account_id}/history",
            Self::GainLoss => "/v1/accounts/{account_id}/gainloss",
            Self::Orders => "/v1/accounts/{account_id}/orders",
            Self::Order => "/v1/accounts/{account_id}/orders/{id}",

            Self::StreamSession => "/v1/markets/events/session",
            Self::StreamEvents => "/v1/markets/events",

            Self::Authorize => "/v1/oauth/authorize",
        }
    }

    /// Whether the endpoint belongs to the beta API surface.
    ///
    /// Beta endpoints are only available to Tradier Brokerage account holders and should be
    /// used in production applications with caution. This is informational; the client
    /// does not refuse to call them.
    #[must_use]
    pub const fn is_beta(self) -> bool {
        matches!(
            self,
            Self::Company
                | Self::CorporateCalendars
                | Self::Dividends
                | Self::CorporateActions
                | Self::Ratios
                | Self::FinancialReports
                | Self::PriceStatistics
        )
    }

    /// Whether the endpoint is only available to accounts allowed to stream.
    #[must_use]
    pub const fn requires_streaming(self) -> bool {
        matches!(self, Self::StreamSession | Self::StreamEvents)
    }

    /// Whether the endpoint is served from the streaming host.
    #[must_use]
    pub const fn uses_stream_host(self) -> bool {
        matches!(self, Self::StreamEvents)
    }

    /// Resolve the template into a concrete path.
    ///
    /// Every `{name}` placeholder must have a matching entry in `params`. Values must be
    /// non-empty and made of ASCII alphanumerics, `-`, `_` or `.`; anything else would
    /// change the path structure and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::MissingPathParam`] for an unfilled placeholder and
    /// [`TradierError::InvalidPathParam`] for a value that is not path-safe.
    pub fn path(self, params: &[(&str, &str)]) -> Result<String, TradierError> {
        let template = self.template();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| TradierError::MissingPathParam(after.to_string()))?;
            let name = &after[..close];

            let value = params
                .iter()
                .find_map(|(k, v)| (*k == name).then_some(*v))
                .ok_or_else(|| TradierError::MissingPathParam(name.to_string()))?;
            if !is_path_safe(value) {
                return Err(TradierError::InvalidPathParam {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            out.push_str(value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

fn is_path_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        && value != "."
        && value != ".."
}
