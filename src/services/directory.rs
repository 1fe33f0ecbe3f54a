// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory reads: one user by id, one page of users.
//!
//! The public fetch operations never fail. Transport errors, non-200
//! statuses and malformed payloads all collapse to "no record" or an
//! empty page; the underlying error is logged at `warn`.

use crate::error::Result;
use crate::models::user::RawUserPage;
use crate::models::{UserEnvelope, UserPage, UserRecord};
use crate::services::api::ApiClient;
use std::str::FromStr;

/// User fetched by the home screen's single-user action.
pub const DEFAULT_USER_ID: i64 = 2;

/// Page fetched by the home screen's list action.
pub const DEFAULT_PAGE: u32 = 1;

/// How malformed elements of a users page are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageDecoding {
    /// Any bad element fails the whole page.
    #[default]
    Strict,
    /// Bad elements are skipped; the rest keep their order.
    Lenient,
}

impl FromStr for PageDecoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(PageDecoding::Strict),
            "lenient" => Ok(PageDecoding::Lenient),
            other => Err(format!("unknown page decoding: {other}")),
        }
    }
}

/// Decode a single-user response body.
pub fn decode_user(body: &str) -> Result<UserRecord> {
    let envelope: UserEnvelope = serde_json::from_str(body)?;
    Ok(envelope.data)
}

/// Decode a users-page response body, preserving array order.
pub fn decode_users_page(body: &str, mode: PageDecoding) -> Result<Vec<UserRecord>> {
    match mode {
        PageDecoding::Strict => {
            let page: UserPage = serde_json::from_str(body)?;
            Ok(page.data)
        }
        PageDecoding::Lenient => {
            let page: RawUserPage = serde_json::from_str(body)?;
            let users = page
                .data
                .into_iter()
                .enumerate()
                .filter_map(|(index, value)| {
                    serde_json::from_value::<UserRecord>(value)
                        .inspect_err(|e| {
                            tracing::warn!(index, error = %e, "Skipping malformed user record");
                        })
                        .ok()
                })
                .collect();
            Ok(users)
        }
    }
}

/// Read-only client for the user directory.
#[derive(Debug, Clone)]
pub struct UserDirectoryClient {
    api: ApiClient,
    page_decoding: PageDecoding,
}

impl UserDirectoryClient {
    pub fn new(api: ApiClient, page_decoding: PageDecoding) -> Self {
        Self { api, page_decoding }
    }

    /// Fetch one user, or `None` on any failure.
    pub async fn fetch_user(&self, id: i64) -> Option<UserRecord> {
        match self.try_fetch_user(id).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Fetched user");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(user_id = id, kind = e.kind(), error = %e, "User fetch failed");
                None
            }
        }
    }

    /// Fetch [`DEFAULT_USER_ID`].
    pub async fn fetch_default_user(&self) -> Option<UserRecord> {
        self.fetch_user(DEFAULT_USER_ID).await
    }

    pub async fn try_fetch_user(&self, id: i64) -> Result<UserRecord> {
        let body = self.api.get_text(&format!("/api/users/{}", id), &[]).await?;
        decode_user(&body)
    }

    /// Fetch one page of users, or an empty page on any failure.
    pub async fn fetch_users_page(&self, page: u32) -> Vec<UserRecord> {
        match self.try_fetch_users_page(page).await {
            Ok(users) => {
                tracing::info!(page, count = users.len(), "Fetched users page");
                users
            }
            Err(e) => {
                tracing::warn!(page, kind = e.kind(), error = %e, "Users page fetch failed");
                Vec::new()
            }
        }
    }

    /// Fetch [`DEFAULT_PAGE`].
    pub async fn fetch_first_page(&self) -> Vec<UserRecord> {
        self.fetch_users_page(DEFAULT_PAGE).await
    }

    pub async fn try_fetch_users_page(&self, page: u32) -> Result<Vec<UserRecord>> {
        let body = self
            .api
            .get_text("/api/users", &[("page", page.to_string())])
            .await?;
        decode_users_page(&body, self.page_decoding)
    }
}
