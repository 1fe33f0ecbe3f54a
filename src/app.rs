// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation state for the login and home screens.
//!
//! The services stay stateless; everything a screen shows lives here and
//! changes only through the transitions below. Network-backed transitions
//! take `&mut self`, so one `App` never has two requests in flight.

use crate::models::{SessionOutcome, UserRecord};
use crate::Services;

/// Login form contents plus the pending alert, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub alert: Option<String>,
}

impl LoginForm {
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

/// What the home screen is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    pub selected_user: Option<UserRecord>,
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(LoginForm),
    Home(HomeView),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login(LoginForm::default())
    }
}

/// Screen state machine driven by user actions.
pub struct App {
    services: Services,
    screen: Screen,
}

impl App {
    /// Start on an empty login screen.
    pub fn new(services: Services) -> Self {
        Self {
            services,
            screen: Screen::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.screen, Screen::Home(_))
    }

    /// Mutable access to the login form; `None` once logged in.
    pub fn login_form_mut(&mut self) -> Option<&mut LoginForm> {
        match &mut self.screen {
            Screen::Login(form) => Some(form),
            Screen::Home(_) => None,
        }
    }

    fn home_mut(&mut self) -> Option<&mut HomeView> {
        match &mut self.screen {
            Screen::Home(view) => Some(view),
            Screen::Login(_) => None,
        }
    }

    /// Submit the login form. On rejection the form is kept and the alert set.
    /// Already being on the home screen counts as authenticated.
    pub async fn submit_login(&mut self) -> SessionOutcome {
        let Screen::Login(form) = &mut self.screen else {
            return SessionOutcome::Authenticated;
        };

        let outcome = self
            .services
            .authenticator
            .login(&form.username, &form.password)
            .await;

        match &outcome {
            SessionOutcome::Authenticated => self.screen = Screen::Home(HomeView::default()),
            SessionOutcome::Rejected(reason) => form.alert = Some(reason.clone()),
        }

        outcome
    }

    /// Replace the selected user with a fresh fetch; a failed fetch clears it.
    pub async fn load_selected_user(&mut self) {
        if !self.is_logged_in() {
            return;
        }

        let user = self.services.directory.fetch_default_user().await;
        if let Some(view) = self.home_mut() {
            view.selected_user = user;
        }
    }

    pub fn clear_selected_user(&mut self) {
        if let Some(view) = self.home_mut() {
            view.selected_user = None;
        }
    }

    /// Replace the users list with a fresh fetch of the first page.
    pub async fn load_users(&mut self) {
        if !self.is_logged_in() {
            return;
        }

        let users = self.services.directory.fetch_first_page().await;
        if let Some(view) = self.home_mut() {
            view.users = users;
        }
    }

    pub fn clear_users(&mut self) {
        if let Some(view) = self.home_mut() {
            view.users.clear();
        }
    }

    /// Drop all home state and return to an empty login form.
    pub fn logout(&mut self) {
        self.screen = Screen::default();
    }
}
