use crate::common::{BEARER, client_for, fixture, setup_server};
use httpmock::Method::GET;
use tradier_rs::AccountType;

#[tokio::test]
async fn quotes_joins_symbols_and_sends_auth_headers() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/quotes")
            .query_param("symbols", "AAPL,MSFT")
            .header("accept", "application/json")
            .header("authorization", BEARER);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("quotes", "AAPL_MSFT", "json"));
    });

    let client = client_for(&server, AccountType::Sandbox);
    let body = client.market().quotes(&["AAPL", "MSFT"]).await.unwrap();

    mock.assert();
    let quotes = body["quotes"]["quote"].as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0]["symbol"], "AAPL");
    assert_eq!(quotes[1]["symbol"], "MSFT");
}

#[tokio::test]
async fn quotes_accepts_owned_symbols() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/quotes")
            .query_param("symbols", "SPY");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quotes":{"quote":{"symbol":"SPY"}}}"#);
    });

    let client = client_for(&server, AccountType::Production);
    let symbols = vec![String::from("SPY")];
    let body = client.market().quotes(&symbols).await.unwrap();

    mock.assert();
    assert_eq!(body["quotes"]["quote"]["symbol"], "SPY");
}
