use thiserror::Error;

/// Сообщение о недопустимом входном значении (показывается пользователю как есть).
pub const HEX_LENGTH_MESSAGE: &str = "hexadecimal value must be 8 bytes / 16 hex characters";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{msg} ({0})", msg = HEX_LENGTH_MESSAGE)]
    InvalidInput(String),

    #[error("unsupported byte ordering '{0}', expected 'le' or 'be'")]
    UnsupportedOrdering(String),

    #[error("FILETIME {0} is outside the supported date range")]
    DateRange(u64),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
