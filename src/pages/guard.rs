// src/pages/guard.rs

use nexis_api::UserValidation;

use super::cookies::Cookies;
use crate::config::Config;
use crate::http::ApiClient;

pub const ID_COOKIE: &str = "id";
pub const VALIDATE_PATH: &str = "/users/validate";

/// Who may open a route once their session has been validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Superusers only; everyone else goes back to the landing page
    Superuser,
    /// Regular users only; superusers go back to the landing page
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: u16,
    pub location: String,
}

impl Redirect {
    pub const MOVED_PERMANENTLY: u16 = 301;

    pub fn to(location: impl Into<String>) -> Self {
        Self {
            status: Self::MOVED_PERMANENTLY,
            location: location.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Continue(Session),
    Redirect(Redirect),
}

/// Runs before a page renders and decides whether the visitor may stay.
///
/// Without an `id` cookie the visitor is redirected straight away and the
/// backend is never asked. Otherwise the session is validated against
/// [`VALIDATE_PATH`], forwarding the visitor's cookies.
#[derive(Debug, Clone, Copy)]
pub struct LoadGuard<'a> {
    client: &'a ApiClient,
    config: &'a Config,
}

impl<'a> LoadGuard<'a> {
    pub fn new(client: &'a ApiClient, config: &'a Config) -> Self {
        Self { client, config }
    }

    pub async fn check(&self, access: Access, cookies: &Cookies) -> GuardOutcome {
        let Some(user_id) = cookies.get(ID_COOKIE) else {
            tracing::debug!("No id cookie, redirecting to landing page");
            return self.to_landing();
        };

        let client = match self.client.forwarding_cookies(cookies.header()) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "Cookie header cannot be forwarded");
                return self.to_landing();
            }
        };

        let validation = match client.get_json::<UserValidation>(VALIDATE_PATH).await {
            Ok(validation) => validation,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Session validation failed");
                return self.to_landing();
            }
        };

        tracing::debug!(user_id, is_superuser = validation.is_superuser, ?access, "Session validated");

        match (access, validation.is_superuser) {
            (Access::Superuser, false) | (Access::Member, true) => self.to_landing(),
            _ => GuardOutcome::Continue(Session {
                user_id: user_id.to_string(),
                is_superuser: validation.is_superuser,
            }),
        }
    }

    fn to_landing(&self) -> GuardOutcome {
        GuardOutcome::Redirect(Redirect::to(self.config.landing_path()))
    }
}
