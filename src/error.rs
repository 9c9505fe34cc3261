use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlFieldsError {
    #[error("Column metadata error: {0}")]
    Columns(String),
    #[error("Scan error: {0}")]
    Scan(String),
    #[error("Lookup error: {0}")]
    Lookup(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SqlFieldsError>;

// Helper conversions
impl From<rusqlite::Error> for SqlFieldsError {
    fn from(e: rusqlite::Error) -> Self { Self::Database(e.to_string()) }
}
impl From<config::ConfigError> for SqlFieldsError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
