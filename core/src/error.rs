//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! The interface-tree parse itself is infallible by design (malformed
//! fragments are dropped, never fatal); this enum covers the document
//! loading layer and the CLI.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Document text that is neither valid YAML nor valid JSON.
    #[display("Document Error: {_0}")]
    Document(serde_yaml::Error),

    /// Output serialization errors.
    #[display("Serialization Error: {_0}")]
    Serialization(serde_json::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
