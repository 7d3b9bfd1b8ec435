use chrono::{Duration, Local};
use tradier_rs::TradierClientBuilder;
use tradier_rs::market::{HistoryInterval, SecurityType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client from TRADIER_ACCESS_TOKEN / TRADIER_ACCOUNT_TYPE.
    let client = TradierClientBuilder::from_env()?
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    println!("Using a {} account", client.account_type());

    // 2. Is the market open?
    let clock = client.market().clock().await?;
    println!(
        "Market state: {} ({})",
        clock["clock"]["state"], clock["clock"]["description"]
    );
    println!();

    // 3. Batch quotes.
    let quotes = client.market().quotes(&["AAPL", "MSFT", "SPY"]).await?;
    if let Some(list) = quotes["quotes"]["quote"].as_array() {
        for quote in list {
            println!("  {}: last {}", quote["symbol"], quote["last"]);
        }
    }
    println!();

    // 4. Option expirations including every root, then the strikes of the nearest one.
    let expirations = client
        .market()
        .option_expirations("SPX", true, false)
        .await?;
    let nearest = expirations["expirations"]["date"]
        .as_array()
        .and_then(|dates| dates.first())
        .and_then(|d| d.as_str())
        .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
    if let Some(date) = nearest {
        let strikes = client.market().option_strikes("SPX", date).await?;
        let count = strikes["strikes"]["strike"]
            .as_array()
            .map_or(0, Vec::len);
        println!("SPX {date}: {count} strikes");
    }
    println!();

    // 5. A month of weekly bars.
    let today = Local::now().date_naive();
    let history = client
        .market()
        .historical_pricing(
            "AAPL",
            Some(HistoryInterval::Weekly),
            Some(today - Duration::days(30)),
            Some(today),
        )
        .await?;
    if let Some(days) = history["history"]["day"].as_array() {
        for day in days {
            println!("  {} close {}", day["date"], day["close"]);
        }
    }
    println!();

    // 6. Symbol lookup narrowed to ETFs.
    let found = client
        .market()
        .search_symbols("spy", &[] as &[&str], Some(&[SecurityType::Etf][..]))
        .await?;
    println!("Lookup: {}", found["securities"]);

    Ok(())
}
