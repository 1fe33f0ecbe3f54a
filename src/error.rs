// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with user-facing messages.

/// Errors produced by the login and directory operations.
///
/// The `Display` text of each variant is the message shown to the user,
/// so `login` can hand it straight to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Please enter both username and password.")]
    Validation,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("{0}")]
    Transport(String),

    #[error("Request failed with code {0}")]
    Protocol(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Validation => "validation",
            ClientError::InvalidCredentials => "invalid_credentials",
            ClientError::Transport(_) => "transport",
            ClientError::Protocol(_) => "protocol",
            ClientError::Decode(_) => "decode",
        }
    }

    /// True if the error was raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::Validation)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
