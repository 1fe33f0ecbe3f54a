// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory command-line driver.
//!
//! Logs in with the given credentials, then fetches the default user and
//! the first page of users and prints them as JSON.
//!
//! Usage: `user-directory <email> <password>`

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_directory::{
    app::{App, Screen},
    config::Config,
    models::SessionOutcome,
    Services,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(base_url = %config.api_base_url, "Starting user directory client");

    let services = Services::from_config(&config).context("Failed to build HTTP client")?;
    let mut app = App::new(services);

    let mut args = std::env::args().skip(1);
    if let Some(form) = app.login_form_mut() {
        form.username = args.next().unwrap_or_default();
        form.password = args.next().unwrap_or_default();
    }

    if let SessionOutcome::Rejected(reason) = app.submit_login().await {
        anyhow::bail!("Login failed: {reason}");
    }

    app.load_selected_user().await;
    app.load_users().await;

    if let Screen::Home(view) = app.screen() {
        let output = serde_json::json!({
            "selected_user": view.selected_user,
            "users": view.users,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    app.logout();
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("user_directory=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
