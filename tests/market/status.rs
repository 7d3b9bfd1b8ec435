use crate::common::{client_for, setup_server};
use httpmock::Method::GET;
use tradier_rs::AccountType;

#[tokio::test]
async fn clock_and_etb_take_no_parameters() {
    let server = setup_server();
    let clock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/clock");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"clock":{"date":"2024-06-03","state":"open"}}"#);
    });
    let etb = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/etb");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"securities":{"security":[{"symbol":"AAPL"}]}}"#);
    });

    let client = client_for(&server, AccountType::Production);
    let body = client.market().clock().await.unwrap();
    client.market().etb_securities().await.unwrap();

    clock.assert();
    etb.assert();
    assert_eq!(body["clock"]["state"], "open");
}

#[tokio::test]
async fn calendar_pads_the_month() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/calendar")
            .query_param("month", "02")
            .query_param("year", "2025");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"calendar":{"month":2,"year":2025,"days":{"day":[]}}}"#);
    });

    let client = client_for(&server, AccountType::Sandbox);
    let body = client.market().calendar(Some(2), Some(2025)).await.unwrap();

    mock.assert();
    assert_eq!(body["calendar"]["month"], 2);
}
