#![allow(dead_code)]

use httpmock::MockServer;
use std::{fs, path::Path};
use tradier_rs::{AccountType, Hosts, TradierClient};
use url::Url;

pub const TOKEN: &str = "test-token";
pub const BEARER: &str = "Bearer test-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose three hosts all point at the mock server.
pub fn client_for(server: &MockServer, account_type: AccountType) -> TradierClient {
    init_tracing();
    TradierClient::builder(TOKEN, account_type)
        .hosts(Hosts::uniform(Url::parse(&server.base_url()).unwrap()))
        .build()
        .unwrap()
}

/// A client against the real hosts; only for calls that must fail before any I/O.
pub fn offline_client(account_type: AccountType) -> TradierClient {
    TradierClient::new(TOKEN, account_type).unwrap()
}

pub fn init_tracing() {
    #[cfg(feature = "tracing-subscriber")]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
