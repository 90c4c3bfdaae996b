// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use pointwallet::application::WalletLedger;
use pointwallet::domain::Wallet;
use pointwallet::server;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Helper to create a test ledger with a temporary database
pub async fn test_ledger() -> Result<(WalletLedger, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let ledger = WalletLedger::init(db_path.to_str().unwrap()).await?;
    Ok((ledger, temp_dir))
}

/// Helper to create a router over a temporary database
pub async fn test_app() -> Result<(Router, TempDir)> {
    let (ledger, temp_dir) = test_ledger().await?;
    Ok((server::router(Arc::new(ledger)), temp_dir))
}

/// The two wallets used throughout the HTTP tests
pub fn sample_wallets() -> Vec<Wallet> {
    vec![
        Wallet::new(1, "Ahmed", 10.0).with_description("test description"),
        Wallet::new(2, "Omar", 20.0).with_description("test description"),
    ]
}

/// Send a request and return the status with the decoded JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}
