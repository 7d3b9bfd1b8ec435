//! OAuth authorization URL construction.
//!
//! Only the first leg of the flow lives here: sending the user to Tradier's consent page.
//! Exchanging the returned code for a token happens outside this crate.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::request::join_list;
use crate::core::{Endpoint, TradierClient, TradierError};

/// Permission scopes an application can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Read,
    Write,
    Market,
    Trade,
    Stream,
}

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Market => "market",
            Self::Trade => "trade",
            Self::Stream => "stream",
        }
    }
}

display_as_str!(Scope);

impl TradierClient {
    /// The consent-page URL to redirect a user to.
    ///
    /// Resolved on the account's regular host. No request is made.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::Url`] if the configured host yields an invalid URL.
    pub fn authorize_url(
        &self,
        client_id: &str,
        scopes: &[Scope],
        state: &str,
    ) -> Result<Url, TradierError> {
        let path = Endpoint::Authorize.path(&[])?;
        let mut url = self.requests().resolve_url(&path, false)?;
        url.query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("scope", &join_list(scopes))
            .append_pair("state", state);
        Ok(url)
    }
}
