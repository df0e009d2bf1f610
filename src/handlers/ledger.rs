use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::db::TxRow;
use crate::error::LedgerError;
use crate::middleware::auth::RequireToken;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub account_id: i64,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TxRow>,
}

pub async fn create_account_handler(
    State(state): State<AppState>,
    _: RequireToken,
    Json(req): Json<CreateAccountRequest>,
) -> Result<Json<Value>, LedgerError> {
    let account_id = state.storage.create_account(&req.name).await?;
    info!(account_id, "account created");
    Ok(Json(
        json!({"message": "Account created", "account_id": account_id}),
    ))
}

pub async fn deposit_handler(
    State(state): State<AppState>,
    _: RequireToken,
    Json(req): Json<TransferRequest>,
) -> Result<Json<Value>, LedgerError> {
    state.storage.deposit(req.account_id, req.amount).await?;
    info!(account_id = req.account_id, amount = req.amount, "deposit");
    Ok(Json(json!({"message": "Deposit successful"})))
}

pub async fn withdraw_handler(
    State(state): State<AppState>,
    _: RequireToken,
    Json(req): Json<TransferRequest>,
) -> Result<Json<Value>, LedgerError> {
    state.storage.withdraw(req.account_id, req.amount).await?;
    info!(account_id = req.account_id, amount = req.amount, "withdrawal");
    Ok(Json(json!({"message": "Withdrawal successful"})))
}

pub async fn balance_handler(
    State(state): State<AppState>,
    _: RequireToken,
    Path(account_id): Path<i64>,
) -> Result<Json<Value>, LedgerError> {
    let balance = state.storage.balance(account_id).await?;
    Ok(Json(json!({"balance": balance})))
}

pub async fn transactions_handler(
    State(state): State<AppState>,
    _: RequireToken,
    Path(account_id): Path<i64>,
) -> Result<Json<TransactionsResponse>, LedgerError> {
    let transactions = state.storage.recent_transactions(account_id).await?;
    Ok(Json(TransactionsResponse { transactions }))
}

/// Unauthenticated liveness probe; constant payload, no state touched.
pub async fn health_handler() -> Json<Value> {
    Json(json!({"message": "Ledger service running"}))
}
