//! SQL DDL for initializing the ledger storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `accounts`: `id` INTEGER PRIMARY KEY AUTOINCREMENT, free-form `name`,
///   `balance` defaulting to 0
/// - `transactions`: one immutable row per balance-affecting event, `type`
///   restricted to deposit/withdraw, `timestamp` assigned by the store
/// - Non-unique index on `transactions(account_id)` for the history query
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    balance REAL NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id INTEGER NOT NULL,
    type TEXT NOT NULL,
    amount REAL NOT NULL,
    timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_transactions_account_id ON transactions(account_id);
"#;
