use thiserror::Error;

/// Unified error type for the voting core
#[derive(Error, Debug)]
pub enum VotingError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Key validation error: {0}")]
    Validation(String),

    #[error("Signature construction error: {0}")]
    SignatureConstruction(String),
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, VotingError>;
