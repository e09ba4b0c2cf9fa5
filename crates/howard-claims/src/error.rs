//! Claims factory error types

use thiserror::Error;

/// Result type alias for claims operations.
pub type Result<T> = std::result::Result<T, ClaimsError>;

/// Errors that can occur while building or reading a claims registry
#[derive(Error, Debug)]
pub enum ClaimsError {
    /// Two source functions map to the same claim name
    #[error("Duplicate claim name '{name}' (from '{origin}')")]
    DuplicateName {
        /// The generated claim name
        name: String,
        /// The source function name that collided
        origin: String,
    },

    /// A source function name cannot be turned into a claim name
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// No claim is registered under this name
    #[error("Unknown claim: {0}")]
    UnknownClaim(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
