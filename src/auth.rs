// src/auth.rs

use nexis_api::{CustomError, LoginUser, NewUser, User, is_valid_email, password_issues};

use crate::error::ClientError;
use crate::http::{ApiClient, RequestBody};
use crate::stores::AppState;

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";
pub const LOGOUT_PATH: &str = "/users/logout";
pub const VERIFY_SESSION_PATH: &str = "/users/verify-session";

/// Login, registration and session actions behind the auth forms.
///
/// Each action clears the error store, toggles the loading flag around the
/// request and pushes whatever went wrong back into the error store.
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a ApiClient,
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a ApiClient, state: &'a AppState) -> Self {
        Self { client, state }
    }

    /// POST /users/login
    pub async fn login(&self, credentials: &LoginUser) -> Result<User, Vec<CustomError>> {
        self.state.clear_errors();
        if !is_valid_email(&credentials.email) {
            return Err(self.report(ClientError::InvalidEmail));
        }

        let result = self
            .with_loading("Logging in...", async {
                let payload = self
                    .client
                    .post(LOGIN_PATH, RequestBody::json(credentials)?)
                    .await?;
                let actual = payload.kind();
                payload
                    .into_user()
                    .ok_or(ClientError::UnexpectedPayload { actual })
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!(email = %user.email, "Logged in");
                self.state.logged_in.set(true);
                Ok(user)
            }
            Err(e) => {
                self.state.logged_in.set(false);
                Err(self.report(e))
            }
        }
    }

    /// POST /users/register, returns the backend's confirmation message
    pub async fn register(&self, new_user: &NewUser) -> Result<String, Vec<CustomError>> {
        self.state.clear_errors();
        if !is_valid_email(&new_user.email) {
            return Err(self.report(ClientError::InvalidEmail));
        }
        let issues = password_issues(&new_user.password);
        if !issues.is_empty() {
            return Err(self.report(ClientError::InvalidPassword(issues)));
        }

        let result = self
            .with_loading("Creating your account...", async {
                let payload = self
                    .client
                    .post(REGISTER_PATH, RequestBody::json(new_user)?)
                    .await?;
                let actual = payload.kind();
                payload
                    .into_message()
                    .and_then(|body| body.message)
                    .ok_or(ClientError::UnexpectedPayload { actual })
            })
            .await;

        result.map_err(|e| self.report(e))
    }

    /// POST /users/logout
    pub async fn logout(&self) -> Result<(), Vec<CustomError>> {
        self.state.clear_errors();
        let result = self
            .with_loading("Logging out...", self.client.post(LOGOUT_PATH, RequestBody::Empty))
            .await;

        match result {
            Ok(_) => {
                tracing::info!("Logged out");
                self.state.logged_in.set(false);
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// GET /users/verify-session; refreshes the logged-in flag.
    ///
    /// A 401/403 only means there is no session. Any other failure is also
    /// pushed to the error store.
    pub async fn verify_session(&self) -> bool {
        let valid = match self.client.get(VERIFY_SESSION_PATH).await {
            Ok(_) => true,
            Err(e) if e.is_unauthorized() => {
                tracing::debug!(error = %e, "Session is not valid");
                false
            }
            Err(e) => {
                self.report(e);
                false
            }
        };
        self.state.logged_in.set(valid);
        valid
    }

    async fn with_loading<T>(
        &self,
        message: &str,
        action: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        self.state.set_loading(true, Some(message));
        let result = action.await;
        self.state.set_loading(false, None);
        result
    }

    fn report(&self, err: ClientError) -> Vec<CustomError> {
        tracing::warn!(error = %err, "Auth action failed");
        let errors = err.into_error_list();
        self.state.push_errors(errors.clone());
        errors
    }
}
