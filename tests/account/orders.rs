use crate::common::{client_for, offline_client, setup_server};
use httpmock::Method::GET;
use tradier_rs::{AccountType, TradierError};

#[tokio::test]
async fn orders_send_include_tags() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/accounts/VA000001/orders")
            .query_param("includeTags", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"orders":{"order":[{"id":228175,"status":"filled"}]}}"#);
    });

    let client = client_for(&server, AccountType::Sandbox);
    let body = client.account().orders("VA000001", true).await.unwrap();

    mock.assert();
    assert_eq!(body["orders"]["order"][0]["id"], 228_175);
}

#[tokio::test]
async fn single_order_substitutes_both_ids() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/accounts/VA000001/orders/228175")
            .query_param("includeTags", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"order":{"id":228175,"status":"filled"}}"#);
    });

    let client = client_for(&server, AccountType::Sandbox);
    let body = client
        .account()
        .order("VA000001", "228175", false)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(body["order"]["status"], "filled");
}

#[tokio::test]
async fn bad_order_id_is_rejected_locally() {
    let client = offline_client(AccountType::Sandbox);
    let err = client
        .account()
        .order("VA000001", "../balances", false)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TradierError::InvalidPathParam { ref name, .. } if name == "id"
    ));
    assert!(!err.is_transport());
}
