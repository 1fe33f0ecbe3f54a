// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - remote calls and response handling.

pub mod api;
pub mod auth;
pub mod directory;

pub use api::ApiClient;
pub use auth::{Authenticator, TokenCheck};
pub use directory::{PageDecoding, UserDirectoryClient};
