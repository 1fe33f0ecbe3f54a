// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User directory client: log in against a REST user service and read
//! user records from it.
//!
//! This crate provides the stateless login and directory services plus
//! the screen state a presentation layer drives them with.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use services::{ApiClient, Authenticator, UserDirectoryClient};

/// Shared service handles, built once at startup.
#[derive(Debug, Clone)]
pub struct Services {
    pub authenticator: Authenticator,
    pub directory: UserDirectoryClient,
}

impl Services {
    /// Build both services over one shared HTTP client.
    pub fn from_config(config: &Config) -> error::Result<Self> {
        let api = ApiClient::new(config)?;

        Ok(Self {
            authenticator: Authenticator::new(api.clone(), config.token_check),
            directory: UserDirectoryClient::new(api, config.page_decoding),
        })
    }
}
