use crate::common::{client_for, fixture, setup_server};
use futures::StreamExt;
use httpmock::Method::GET;
use tradier_rs::streaming::StreamFilter;
use tradier_rs::{AccountType, TradierError};

const SESSION: &str = "c8638963-a6d4-4fb9-9bc6-e25fbd8c60c3";

#[tokio::test]
async fn events_decode_one_value_per_line() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/events")
            .query_param("sessionid", SESSION)
            .query_param("symbols", "SPY")
            .query_param("filter", "quote,trade,summary")
            .query_param("linebreak", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("events", "SPY", "ndjson"));
    });

    let client = client_for(&server, AccountType::Production);
    let stream = client
        .streaming()
        .events(
            SESSION,
            &["SPY"],
            &[StreamFilter::Quote, StreamFilter::Trade, StreamFilter::Summary],
        )
        .await
        .unwrap();

    let events: Vec<_> = stream.collect().await;
    mock.assert();

    assert_eq!(events.len(), 3);
    let kinds: Vec<String> = events
        .into_iter()
        .map(|e| e.unwrap()["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["quote", "trade", "summary"]);
}

#[tokio::test]
async fn events_without_filters_omit_the_filter_param() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/events")
            .query_param("sessionid", SESSION)
            .query_param("symbols", "SPY,AAPL")
            .query_param("linebreak", "true")
            .query_param_missing("filter");
        then.status(200).body("{\"type\":\"trade\",\"symbol\":\"AAPL\"}");
    });

    let client = client_for(&server, AccountType::Production);
    let mut stream = client
        .streaming()
        .events(SESSION, &["SPY", "AAPL"], &[])
        .await
        .unwrap();

    // No trailing newline: the last event is decoded once the body ends.
    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first["symbol"], "AAPL");
    assert!(stream.next().await.is_none());
    mock.assert();
}

#[tokio::test]
async fn expired_session_fails_when_opening() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/events");
        then.status(400).body("Session not found");
    });

    let client = client_for(&server, AccountType::Production);
    let result = client
        .streaming()
        .events("expired", &["SPY"], &[])
        .await;

    mock.assert();
    match result {
        Err(TradierError::Status { status, body, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "Session not found");
        }
        Err(other) => panic!("expected Status error, got {other:?}"),
        Ok(_) => panic!("expected the stream to fail to open"),
    }
}
