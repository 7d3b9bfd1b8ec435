use reqwest::{Client, Response};
use serde_json::Value;

use crate::core::{RequestDescriptor, TradierError};

/// Send the request and fail on any non-2xx status.
pub(crate) async fn send(http: &Client, req: RequestDescriptor) -> Result<Response, TradierError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(method = %req.method, url = %req.full_url(), "tradier request");

    let RequestDescriptor {
        method,
        url,
        headers,
        query,
    } = req;

    let resp = http
        .request(method, url)
        .headers(headers)
        .query(query.pairs())
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let url = resp.url().to_string();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%url, error = %_e, "failed to read error response body");
                String::new()
            }
        };

        #[cfg(feature = "tracing")]
        tracing::warn!(status = status.as_u16(), %url, "tradier request failed");

        return Err(TradierError::Status {
            status: status.as_u16(),
            url,
            body,
        });
    }

    Ok(resp)
}

/// Send the request and decode the body as JSON.
pub(crate) async fn send_json(http: &Client, req: RequestDescriptor) -> Result<Value, TradierError> {
    let resp = send(http, req).await?;
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}
