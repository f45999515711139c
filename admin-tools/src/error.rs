use thiserror::Error;

/// Errors raised by the admin tooling library
#[derive(Debug, Error)]
pub enum ToolError {
    /// Connection or query failure against the storefront database
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing library failure
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// Invalid input supplied through configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ToolError {
    /// True when the failure came from the database rather than from local input or hashing
    pub fn is_persistence(&self) -> bool {
        matches!(self, ToolError::Database(_))
    }
}

impl From<bcrypt::BcryptError> for ToolError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ToolError::Hash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
