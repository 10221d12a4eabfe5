use thiserror::Error;

/// Error for KittenId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KittenIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for KittenName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KittenNameError {
    #[error("Kitten name must not be empty")]
    Empty,

    #[error("Kitten name too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all kitten-related operations
#[derive(Debug, Clone, Error)]
pub enum KittenError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid kitten ID: {0}")]
    InvalidKittenId(#[from] KittenIdError),

    #[error("Invalid kitten name: {0}")]
    InvalidName(#[from] KittenNameError),

    // Domain-level errors
    #[error("Kitten not found: {0}")]
    NotFound(String),

    #[error("Kitten does not belong to the requesting user")]
    NotOwner,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
