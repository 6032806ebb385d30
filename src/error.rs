//! Error types for the investor profile app.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Database-related errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Could not open settings database: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Schema setup failed: {0}")]
    Schema(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A line typed into the shell that can't be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for the list)")]
    Unknown(String),

    #[error("`{command}` needs a value")]
    MissingArgument { command: String },

    #[error("Invalid value for `{command}`: {value}. Expected one of: {expected}")]
    InvalidValue {
        command: String,
        value: String,
        expected: String,
    },

    #[error("`{command}` is not on this step")]
    NotOnThisStep { command: String },

    #[error("`{command}` is not available here")]
    NotAvailable { command: String },
}

/// Result type alias for the app.
pub type Result<T> = std::result::Result<T, Error>;
