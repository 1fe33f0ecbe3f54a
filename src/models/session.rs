// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login input and outcome models.

use crate::error::ClientError;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Username/password pair for a single login attempt.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Build credentials, rejecting empty fields.
    pub fn new(username: &str, password: &str) -> Result<Self, ClientError> {
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::Validation);
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Wire body for `POST /api/login`.
    pub fn to_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            email: &self.username,
            password: &self.password,
        }
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// `POST /api/login` request body.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SessionOutcome {
    Authenticated,
    Rejected(String),
}

impl SessionOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionOutcome::Authenticated)
    }

    /// Rejection message, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            SessionOutcome::Authenticated => None,
            SessionOutcome::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<(), ClientError>> for SessionOutcome {
    fn from(result: Result<(), ClientError>) -> Self {
        match result {
            Ok(()) => SessionOutcome::Authenticated,
            Err(err) => SessionOutcome::Rejected(err.to_string()),
        }
    }
}
