use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of a ledger transaction. Stored as lowercase TEXT; the sign of the
/// amount is implied by the kind, the recorded amount is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TxKind {
    Deposit,
    Withdraw,
}

/// One immutable transaction row, mirrored on the wire for the history
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct TxRow {
    pub id: i64,
    pub account_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: TxKind,
    pub amount: f64,
    pub timestamp: NaiveDateTime,
}
