use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("column \"{column}\" is not readable as text: {message}")]
    Decode { column: String, message: String },
}
