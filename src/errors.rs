use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid reserves for {pool}: {reason}")]
    InvalidReserves { pool: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Decimal parse error: {0}")]
    ParseDecimal(#[from] bigdecimal::ParseBigDecimalError),

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn invalid_reserves(pool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReserves {
            pool: pool.into(),
            reason: reason.into(),
        }
    }
}
