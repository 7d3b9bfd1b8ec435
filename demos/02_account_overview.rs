use tradier_rs::TradierClientBuilder;
use tradier_rs::account::{
    AccountHistoryQuery, ActivityType, GainLossQuery, GainLossSortBy, SortOrder,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let account_id = std::env::var("TRADIER_ACCOUNT_ID")?;
    let client = TradierClientBuilder::from_env()?.build()?;
    let account = client.account();

    let balances = account.balances(&account_id).await?;
    println!("--- Balances for {account_id} ---");
    println!("Total equity: {}", balances["balances"]["total_equity"]);
    println!("Total cash:   {}", balances["balances"]["total_cash"]);
    println!();

    let positions = account.positions(&account_id).await?;
    println!("--- Positions ---");
    println!("{}", positions["positions"]);
    println!();

    // 25 most recent trades.
    let trades = account
        .history(
            &account_id,
            &AccountHistoryQuery::new()
                .limit(25)
                .activity_type(ActivityType::Trade),
        )
        .await?;
    println!("--- Recent trades ---");
    println!("{}", trades["history"]);
    println!();

    let realized = account
        .gain_loss(
            &account_id,
            &GainLossQuery::new().sorted(GainLossSortBy::CloseDate, SortOrder::Desc),
        )
        .await?;
    println!("--- Realized gain/loss ---");
    println!("{}", realized["gainloss"]);
    println!();

    let orders = account.orders(&account_id, true).await?;
    println!("--- Orders ---");
    println!("{}", orders["orders"]);

    // Streaming is refused up front for sandbox accounts.
    match client.streaming().create_session().await {
        Ok(session) => println!("Stream session: {}", session["stream"]["sessionid"]),
        Err(e) => println!("No streaming: {e}"),
    }

    Ok(())
}
