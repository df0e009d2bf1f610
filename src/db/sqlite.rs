use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::{TxKind, TxRow};
use crate::db::schema::SQLITE_INIT;
use crate::error::LedgerError;

pub type SqlitePool = Pool<Sqlite>;

/// How many rows the transaction-history query returns.
const HISTORY_LIMIT: i64 = 10;

/// Ledger storage over a SQLite pool. All balance mutations pair the
/// balance update with a transaction insert inside a single database
/// transaction, so either both land or neither does.
#[derive(Clone)]
pub struct LedgerStorage {
    pool: SqlitePool,
}

/// Open (creating the backing file if absent) and return an initialized
/// storage handle. Safe to call on every process start.
pub async fn connect(database_url: &str) -> Result<LedgerStorage, LedgerError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let storage = LedgerStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

impl LedgerStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), LedgerError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new account with balance 0 and return its id. The name is
    /// taken as-is: empty and duplicate names are allowed.
    pub async fn create_account(&self, name: &str) -> Result<i64, LedgerError> {
        let result = sqlx::query("INSERT INTO accounts (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Credit `amount` to the account and record a deposit row, atomically.
    ///
    /// Unknown accounts are rejected with `NotFound` rather than silently
    /// recording a transaction with no matching balance change, which would
    /// break the balance-equals-sum-of-transactions invariant.
    pub async fn deposit(&self, account_id: i64, amount: f64) -> Result<(), LedgerError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE accounts SET balance = balance + ? WHERE id = ?")
            .bind(amount)
            .bind(account_id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(LedgerError::NotFound(account_id));
        }

        sqlx::query("INSERT INTO transactions (account_id, type, amount) VALUES (?, ?, ?)")
            .bind(account_id)
            .bind(TxKind::Deposit)
            .bind(amount)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Debit `amount` from the account and record a withdrawal row,
    /// atomically.
    ///
    /// The balance check and decrement run as one conditional update, so
    /// concurrent withdrawals cannot both pass the check and drive the
    /// balance negative. Zero rows affected means either the account does
    /// not exist or its balance is too low; callers see both as
    /// `InsufficientFunds`.
    pub async fn withdraw(&self, account_id: i64, amount: f64) -> Result<(), LedgerError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE accounts SET balance = balance - ? WHERE id = ? AND balance >= ?",
        )
        .bind(amount)
        .bind(account_id)
        .bind(amount)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(LedgerError::InsufficientFunds(account_id));
        }

        sqlx::query("INSERT INTO transactions (account_id, type, amount) VALUES (?, ?, ?)")
            .bind(account_id)
            .bind(TxKind::Withdraw)
            .bind(amount)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Current balance, or `NotFound` when no such account exists.
    pub async fn balance(&self, account_id: i64) -> Result<f64, LedgerError> {
        let row: Option<(f64,)> = sqlx::query_as("SELECT balance FROM accounts WHERE id = ?")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some((balance,)) => Ok(balance),
            None => Err(LedgerError::NotFound(account_id)),
        }
    }

    /// The 10 most recent transactions for the account, newest first.
    /// `id DESC` breaks timestamp ties in insertion order, since
    /// CURRENT_TIMESTAMP only has second resolution. Unknown accounts yield
    /// an empty list, not an error.
    pub async fn recent_transactions(&self, account_id: i64) -> Result<Vec<TxRow>, LedgerError> {
        let rows = sqlx::query_as(
            r#"SELECT id, account_id, type, amount, timestamp
               FROM transactions WHERE account_id = ?
               ORDER BY timestamp DESC, id DESC LIMIT ?"#,
        )
        .bind(account_id)
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
