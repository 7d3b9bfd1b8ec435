use crate::common::{BEARER, client_for, fixture, offline_client, setup_server};
use httpmock::Method::GET;
use tradier_rs::{AccountType, TradierError};

#[tokio::test]
async fn balances_substitutes_the_account_id() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/accounts/VA000001/balances")
            .header("authorization", BEARER);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("balances", "VA000001", "json"));
    });

    let client = client_for(&server, AccountType::Sandbox);
    let body = client.account().balances("VA000001").await.unwrap();

    mock.assert();
    assert_eq!(body["balances"]["account_number"], "VA000001");
    assert_eq!(body["balances"]["account_type"], "margin");
}

#[tokio::test]
async fn positions_substitutes_the_account_id() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/accounts/6YA05708/positions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"positions":"null"}"#);
    });

    let client = client_for(&server, AccountType::Production);
    let body = client.account().positions("6YA05708").await.unwrap();

    mock.assert();
    assert_eq!(body["positions"], "null");
}

#[tokio::test]
async fn unsafe_account_ids_fail_before_any_request() {
    let client = offline_client(AccountType::Production);

    for bad in ["", "..", "VA/balances", "a b", "VA?x=1"] {
        let err = client.account().balances(bad).await.unwrap_err();
        match err {
            TradierError::InvalidPathParam { name, value } => {
                assert_eq!(name, "account_id");
                assert_eq!(value, bad);
            }
            other => panic!("expected InvalidPathParam for {bad:?}, got {other:?}"),
        }
    }
}
