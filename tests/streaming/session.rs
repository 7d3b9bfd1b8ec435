use crate::common::{BEARER, client_for, fixture, offline_client, setup_server};
use httpmock::Method::POST;
use tradier_rs::streaming::StreamFilter;
use tradier_rs::{AccountType, TradierError};

#[tokio::test]
async fn sandbox_cannot_create_a_session() {
    let client = offline_client(AccountType::Sandbox);
    let err = client.streaming().create_session().await.unwrap_err();
    assert!(matches!(err, TradierError::StreamNotPermitted));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn sandbox_cannot_open_events() {
    let client = offline_client(AccountType::Sandbox);
    let result = client
        .streaming()
        .events("any-session", &["SPY"], &[StreamFilter::Quote])
        .await;
    assert!(matches!(result, Err(TradierError::StreamNotPermitted)));
}

#[tokio::test]
async fn production_session_is_a_post() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/markets/events/session")
            .header("authorization", BEARER);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("session", "stream", "json"));
    });

    let client = client_for(&server, AccountType::Production);
    let body = client.streaming().create_session().await.unwrap();

    mock.assert();
    assert_eq!(
        body["stream"]["sessionid"],
        "c8638963-a6d4-4fb9-9bc6-e25fbd8c60c3"
    );
}
