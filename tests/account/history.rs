use crate::common::{client_for, setup_server};
use chrono::NaiveDate;
use httpmock::Method::GET;
use tradier_rs::AccountType;
use tradier_rs::account::{
    AccountHistoryQuery, ActivityType, GainLossQuery, GainLossSortBy, SortOrder,
};

#[tokio::test]
async fn history_forwards_the_filter() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/accounts/VA000001/history")
            .query_param("page", "2")
            .query_param("limit", "50")
            .query_param("type", "dividend")
            .query_param("start", "2024-01-01")
            .query_param("end", "2024-12-31")
            .query_param("symbol", "AAPL")
            .query_param("exactMatch", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"history":{"event":[]}}"#);
    });

    let filter = AccountHistoryQuery::new()
        .page(2)
        .limit(50)
        .activity_type(ActivityType::Dividend)
        .range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .symbol("AAPL", true);

    let client = client_for(&server, AccountType::Sandbox);
    client.account().history("VA000001", &filter).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn gain_loss_forwards_sorting() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/accounts/VA000001/gainloss")
            .query_param("sortBy", "closeDate")
            .query_param("sort", "desc")
            .query_param("symbol", "SPY");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"gainloss":{"closed_position":[]}}"#);
    });

    let filter = GainLossQuery::new()
        .sorted(GainLossSortBy::CloseDate, SortOrder::Desc)
        .symbol("SPY");

    let client = client_for(&server, AccountType::Sandbox);
    let body = client
        .account()
        .gain_loss("VA000001", &filter)
        .await
        .unwrap();

    mock.assert();
    assert!(body["gainloss"]["closed_position"].is_array());
}
