use crate::domain::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("The receipt is invalid")]
    InvalidReceipt(#[from] ValidationError),
    #[error("No receipt found for that id")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
