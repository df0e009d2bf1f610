use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::db::LedgerStorage;
use crate::handlers::ledger::{
    balance_handler, create_account_handler, deposit_handler, health_handler,
    transactions_handler, withdraw_handler,
};

/// Shared application state: the ledger storage plus the expected token,
/// resolved once at startup and injected so tests can override it.
#[derive(Clone)]
pub struct AppState {
    pub storage: LedgerStorage,
    pub token: Arc<str>,
}

impl AppState {
    pub fn new(storage: LedgerStorage, token: Arc<str>) -> Self {
        Self { storage, token }
    }
}

pub fn ledger_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/create_account", post(create_account_handler))
        .route("/deposit", post(deposit_handler))
        .route("/withdraw", post(withdraw_handler))
        .route("/balance/{account_id}", get(balance_handler))
        .route("/transactions/{account_id}", get(transactions_handler))
        .with_state(state)
}
