// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login against the directory API.

use crate::error::{ClientError, Result};
use crate::models::{Credentials, SessionOutcome};
use crate::services::api::ApiClient;
use std::str::FromStr;

const LOGIN_PATH: &str = "/api/login";

/// Substring whose presence in a 200 login body means success.
pub const TOKEN_MARKER: &str = "token";

/// How a 200 login response is judged to carry a session token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenCheck {
    /// Raw body contains [`TOKEN_MARKER`] anywhere. A body like
    /// `{"error":"token expired"}` passes this check.
    #[default]
    Substring,
    /// Body is a JSON object with a non-null `token` member.
    JsonField,
}

impl TokenCheck {
    pub fn accepts(self, body: &str) -> bool {
        match self {
            TokenCheck::Substring => body.contains(TOKEN_MARKER),
            TokenCheck::JsonField => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|value| value.get(TOKEN_MARKER).cloned())
                .is_some_and(|token| !token.is_null()),
        }
    }
}

impl FromStr for TokenCheck {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(TokenCheck::Substring),
            "json_field" => Ok(TokenCheck::JsonField),
            other => Err(format!("unknown token check: {other}")),
        }
    }
}

/// Exchanges credentials for a session indicator. Holds no session state.
#[derive(Debug, Clone)]
pub struct Authenticator {
    api: ApiClient,
    token_check: TokenCheck,
}

impl Authenticator {
    pub fn new(api: ApiClient, token_check: TokenCheck) -> Self {
        Self { api, token_check }
    }

    /// Log in, folding every failure into [`SessionOutcome::Rejected`].
    pub async fn login(&self, username: &str, password: &str) -> SessionOutcome {
        let result = self.try_login(username, password).await;

        match &result {
            Ok(()) => tracing::info!(username = %username, "Login succeeded"),
            // Empty-field rejections never reach the network.
            Err(e) if e.is_local() => tracing::debug!(kind = e.kind(), "Login form incomplete"),
            Err(e) => tracing::warn!(
                username = %username,
                kind = e.kind(),
                error = %e,
                "Login rejected"
            ),
        }

        result.into()
    }

    /// Log in, returning the typed failure.
    ///
    /// Empty fields fail with [`ClientError::Validation`] before any request
    /// is sent.
    pub async fn try_login(&self, username: &str, password: &str) -> Result<()> {
        let credentials = Credentials::new(username, password)?;
        tracing::debug!(username = credentials.username(), "Sending login request");

        let body = self
            .api
            .post_json(LOGIN_PATH, &credentials.to_request())
            .await?;

        if self.token_check.accepts(&body) {
            Ok(())
        } else {
            Err(ClientError::InvalidCredentials)
        }
    }
}
