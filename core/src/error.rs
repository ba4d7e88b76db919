use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid ticket: {reason}")]
    InvalidTicket { reason: String },

    #[error("Number {value} outside 1-45")]
    InvalidNumber { value: i64 },

    #[error("Dataset failed validation with {count} issue(s), first: {first}")]
    IntegrityFailed { count: usize, first: String },

    #[error("Dataset contains no draws")]
    EmptyDataset,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
