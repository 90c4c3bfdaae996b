use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{Points, Wallet, WalletId};

use super::{ApiError, SharedLedger};

/// Query string for the add/withdraw routes: `?points=5`.
#[derive(Debug, Deserialize)]
pub struct PointsQuery {
    pub points: Points,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome There, How can i help you?" }))
}

pub async fn create_wallet(
    State(ledger): State<SharedLedger>,
    payload: Result<Json<Wallet>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), ApiError> {
    let Json(wallet) = payload?;
    let wallet = ledger.create_wallet(wallet).await?;
    Ok((StatusCode::CREATED, Json(wallet)))
}

pub async fn get_wallet(
    State(ledger): State<SharedLedger>,
    id: Result<Path<WalletId>, PathRejection>,
) -> Result<Json<Wallet>, ApiError> {
    let Path(id) = id?;
    Ok(Json(ledger.get_wallet(id).await?))
}

pub async fn list_wallets(
    State(ledger): State<SharedLedger>,
) -> Result<Json<Vec<Wallet>>, ApiError> {
    Ok(Json(ledger.list_wallets().await?))
}

pub async fn add_points(
    State(ledger): State<SharedLedger>,
    id: Result<Path<WalletId>, PathRejection>,
    query: Result<Query<PointsQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<Wallet>), ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let wallet = ledger.add_points(id, query.points).await?;
    Ok((StatusCode::CREATED, Json(wallet)))
}

pub async fn withdraw_points(
    State(ledger): State<SharedLedger>,
    id: Result<Path<WalletId>, PathRejection>,
    query: Result<Query<PointsQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<Wallet>), ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let wallet = ledger.withdraw_points(id, query.points).await?;
    Ok((StatusCode::CREATED, Json(wallet)))
}

pub async fn delete_wallet(
    State(ledger): State<SharedLedger>,
    id: Result<Path<WalletId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id?;
    ledger.delete_wallet(id).await?;
    Ok(Json(json!({ "message": "wallet deleted successfully!" })))
}
