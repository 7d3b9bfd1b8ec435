use crate::common::{client_for, setup_server};
use httpmock::Method::GET;
use tradier_rs::{AccountType, TradierError};

#[tokio::test]
async fn non_2xx_surfaces_as_status_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/clock");
        then.status(401).body("Invalid Access Token");
    });

    let client = client_for(&server, AccountType::Sandbox);
    let err = client.market().clock().await.unwrap_err();
    mock.assert();

    assert!(err.is_transport());
    match err {
        TradierError::Status { status, url, body } => {
            assert_eq!(status, 401);
            assert!(url.contains("/v1/markets/clock"));
            assert_eq!(body, "Invalid Access Token");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_not_distinguished_from_client_errors() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/quotes");
        then.status(503).body("unavailable");
    });

    let client = client_for(&server, AccountType::Production);
    let err = client.market().quotes(&["AAPL"]).await.unwrap_err();
    mock.assert();

    assert!(matches!(err, TradierError::Status { status: 503, .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/clock");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = client_for(&server, AccountType::Sandbox);
    let err = client.market().clock().await.unwrap_err();
    mock.assert();

    assert!(matches!(err, TradierError::Json(_)));
}
