use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Process configuration, resolved once at startup.
///
/// Every field can be overridden through `LEDGER_`-prefixed environment
/// variables (e.g. `LEDGER_TOKEN`, `LEDGER_DATABASE_URL`). `token` has no
/// default: startup fails without one.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Shared secret required on every protected route.
    pub token: String,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_database_url() -> String {
    "sqlite:ledger.db".to_string()
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("LEDGER_")).extract()
    }
}
