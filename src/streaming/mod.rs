//! HTTP streaming of market events.
//!
//! Streaming is not available to sandbox accounts: both calls here fail with
//! [`TradierError::StreamNotPermitted`] before any request is sent.

mod decoder;

pub use decoder::LineDecoder;

use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::client::ClientInner;
use crate::core::{Endpoint, QueryParams, TradierError};

/// Events decoded from a streaming response, one JSON payload per item.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<Value, TradierError>> + Send>>;

/// Event kinds a stream can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFilter {
    Trade,
    Quote,
    Summary,
    Timesale,
    Tradex,
}

impl StreamFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trade => "trade",
            Self::Quote => "quote",
            Self::Summary => "summary",
            Self::Timesale => "timesale",
            Self::Tradex => "tradex",
        }
    }
}

display_as_str!(StreamFilter);

/// Client for streaming sessions and events.
#[derive(Debug, Clone)]
pub struct StreamingClient {
    inner: Arc<ClientInner>,
}

impl StreamingClient {
    pub(crate) const fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) const fn inner(&self) -> &Arc<ClientInner> {
        &self.inner
    }

    /// Create a streaming session. The response carries the `sessionid` to pass to
    /// [`events`](Self::events); sessions expire shortly if unused.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::StreamNotPermitted`] for sandbox accounts, otherwise any
    /// transport error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn create_session(&self) -> Result<Value, TradierError> {
        self.inner
            .call(Method::POST, Endpoint::StreamSession, &[], QueryParams::new())
            .await
    }

    /// Open the event stream for `symbols` on the streaming host.
    ///
    /// An empty `filters` slice streams every event kind.
    ///
    /// # Errors
    ///
    /// Returns [`TradierError::StreamNotPermitted`] for sandbox accounts, or a transport
    /// error if the stream cannot be opened. Errors while reading are yielded by the stream.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, session_id, symbols), err))]
    pub async fn events<S: AsRef<str>>(
        &self,
        session_id: &str,
        symbols: &[S],
        filters: &[StreamFilter],
    ) -> Result<EventStream, TradierError> {
        let query = QueryParams::new()
            .with("sessionid", session_id)
            .with_list("symbols", symbols.iter().map(AsRef::<str>::as_ref))
            .with_opt(
                "filter",
                (!filters.is_empty()).then(|| crate::core::request::join_list(filters)),
            )
            .with("linebreak", true);

        let resp = self
            .inner
            .open(Method::GET, Endpoint::StreamEvents, query)
            .await?;

        let body = Box::pin(resp.bytes_stream());
        let events = futures::stream::unfold(
            (body, LineDecoder::new(), false),
            |(mut body, mut decoder, done)| async move {
                if done {
                    return None;
                }
                loop {
                    if let Some(event) = decoder.next_event() {
                        return Some((event, (body, decoder, false)));
                    }
                    match body.next().await {
                        Some(Ok(chunk)) => decoder.push(&chunk),
                        Some(Err(e)) => return Some((Err(e.into()), (body, decoder, true))),
                        None => {
                            return decoder
                                .finish()
                                .map(|event| (event, (body, decoder, true)));
                        }
                    }
                }
            },
        );

        Ok(Box::pin(events))
    }
}
