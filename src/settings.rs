// config lets you read a separate config file
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Settings for the demo binary.
///
/// Read from built-in defaults, then an optional `sqlfields` config file
/// (`sqlfields.toml`, `sqlfields.json`, ...), then `SQLFIELDS_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// SQLite database path, `:memory:` for a throwaway database.
    pub database: String,
    pub table: String,
    /// `tracing-subscriber` filter directive, e.g. `sqlfields=debug`.
    pub log_filter: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from("sqlfields")
    }
    pub fn load_from(file: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("database", ":memory:")?
            .set_default("table", "call")?
            .set_default("log_filter", "info")?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("SQLFIELDS"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
