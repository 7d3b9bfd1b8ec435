use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::TradierError;

/// Labels that select the production account type.
///
/// Tradier has used both `api` and `brokerage` for the production selector. Either one
/// parses to [`AccountType::Production`]; the embedding application picks its spelling.
pub const PRODUCTION_ACCOUNT_LABELS: [&str; 2] = ["api", "brokerage"];

/// Wire format of calendar dates (`2019-05-17`).
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of date-times in time & sales ranges (`2019-05-17 09:30`).
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Selects the remote host and the permissions (streaming eligibility) of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Paper-trading account served by `sandbox.tradier.com`. Cannot stream.
    #[default]
    Sandbox,
    /// Live account served by `api.tradier.com`.
    #[serde(alias = "api", alias = "brokerage")]
    Production,
}

impl AccountType {
    /// The canonical label of this account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    /// Whether streaming endpoints may be used with this account type.
    #[must_use]
    pub const fn can_stream(self) -> bool {
        !matches!(self, Self::Sandbox)
    }
}

display_as_str!(AccountType);

impl FromStr for AccountType {
    type Err = TradierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        if label == "sandbox" {
            Ok(Self::Sandbox)
        } else if label == "production" || PRODUCTION_ACCOUNT_LABELS.contains(&label.as_str()) {
            Ok(Self::Production)
        } else {
            Err(TradierError::Config(format!("unknown account type: {s:?}")))
        }
    }
}
