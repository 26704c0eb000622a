use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanBookError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}
