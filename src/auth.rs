//! Auth gateway: the single source of truth for authentication state
//! transitions, and the only writer of the session context.
//!
//! TRADE-OFFS
//! ==========
//! Login deliberately collapses "wrong credentials" and "server unreachable"
//! into one generic failure, and a failed remote logout leaves the local
//! token intact even though the server may already have invalidated it.
//! Both are part of the inherited client contract; the discarded detail is
//! logged at debug level rather than surfaced.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Method;
use tokio::sync::Mutex;

use crate::guards::{Navigator, Route};
use crate::net::types::{FieldErrors, LoginRequest, LoginResponse, NewUser, RegistrationResponse, UserProfile};
use crate::net::{ApiClient, ApiError};
use crate::session::SessionContext;

pub const LOGIN_PATH: &str = "/auth/login/";
pub const LOGOUT_PATH: &str = "/auth/logout/";
pub const USERS_PATH: &str = "/auth/users/";
pub const ME_PATH: &str = "/auth/users/me/";

/// How long guards firing within one navigation may share a verification
/// result before a fresh round-trip is made.
pub const VERIFICATION_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Every login failure cause collapses here; wrong credentials and an
    /// unreachable server are indistinguishable to the caller.
    #[error("an error occurred during login; please try again")]
    LoginFailed,
    /// Remote logout failed; the local token is left intact so the user is
    /// not silently logged out while the server still thinks otherwise.
    #[error("an error occurred during logout; please try again")]
    LogoutFailed,
    /// Registration rejected with field-keyed validation errors, passed
    /// through for field-level display.
    #[error("registration rejected: {0}")]
    RegistrationRejected(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to persist auth token: {0}")]
    TokenStorage(#[source] std::io::Error),
}

pub struct AuthGateway {
    api: ApiClient,
    session: Arc<SessionContext>,
    navigator: Arc<dyn Navigator>,
    // Debounce cell for guard-driven verification: (when, result).
    last_verification: Mutex<Option<(Instant, bool)>>,
}

impl AuthGateway {
    #[must_use]
    pub fn new(api: ApiClient, navigator: Arc<dyn Navigator>) -> Self {
        let session = Arc::clone(api.session());
        Self { api, session, navigator, last_verification: Mutex::new(None) }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Register a new user. Returns a greeting built from the echoed
    /// username. A validation rejection surfaces with its field errors
    /// intact; every other failure passes through unprocessed.
    ///
    /// # Errors
    /// [`AuthError::RegistrationRejected`] on field validation failure,
    /// [`AuthError::Api`] otherwise.
    pub async fn register_user(&self, new_user: &NewUser) -> Result<String, AuthError> {
        let response = self.api.send(Method::POST, USERS_PATH, Some(new_user)).await?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;

        if status == reqwest::StatusCode::BAD_REQUEST {
            if let Some(fields) = FieldErrors::from_body(&body) {
                return Err(AuthError::RegistrationRejected(fields));
            }
        }
        if !status.is_success() {
            return Err(ApiError::Response { status: status.as_u16(), body }.into());
        }

        let parsed: RegistrationResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::info!(username = %parsed.username, "user registered");
        Ok(format!("Welcome, {}! to Peter's FARMS", parsed.username))
    }

    /// Log in and persist the returned token to durable storage.
    ///
    /// # Errors
    /// Always [`AuthError::LoginFailed`]; the underlying cause is discarded.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String, AuthError> {
        match self.try_login(credentials).await {
            Ok(token) => {
                self.invalidate_verification_cache().await;
                tracing::info!(username = %credentials.username, "login succeeded");
                Ok(token)
            }
            Err(error) => {
                tracing::debug!(%error, "login failed");
                Err(AuthError::LoginFailed)
            }
        }
    }

    async fn try_login(&self, credentials: &LoginRequest) -> Result<String, AuthError> {
        let parsed: LoginResponse = self.api.post_json(LOGIN_PATH, credentials).await?;
        self.session
            .store_token(&parsed.auth_token)
            .map_err(AuthError::TokenStorage)?;
        Ok(parsed.auth_token)
    }

    /// Notify the server, then clear the token, reset the role flags, and
    /// navigate to the login view. Fires the remote call even when no token
    /// is stored.
    ///
    /// # Errors
    /// [`AuthError::LogoutFailed`] when the remote call fails; local state
    /// is untouched in that case.
    pub async fn logout(&self) -> Result<(), AuthError> {
        match self.api.post_empty(LOGOUT_PATH).await {
            Ok(()) => {
                self.session.clear_token();
                self.session.reset_flags();
                self.invalidate_verification_cache().await;
                self.navigator.navigate(Route::Login);
                tracing::info!("logged out");
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, "logout failed; keeping local token");
                Err(AuthError::LogoutFailed)
            }
        }
    }

    /// Verify the stored token against the "me" lookup. Total: resolves to a
    /// boolean for every network outcome. `true` updates the role flags from
    /// the fetched profile; `false` clears the stored token and resets all
    /// flags.
    pub async fn verify_token(&self) -> bool {
        let verified = self.check_profile().await;
        if !verified {
            self.session.clear_token();
            self.session.reset_flags();
        }
        verified
    }

    // A cached result must never outlive the session state it was computed
    // against; login and logout drop it on success.
    async fn invalidate_verification_cache(&self) {
        *self.last_verification.lock().await = None;
    }

    /// Guard entry point: reuse a verification result younger than
    /// [`VERIFICATION_DEBOUNCE`] so guards firing within one navigation
    /// share a round-trip. Serialized, so concurrent guards cannot race the
    /// role flags mid-update.
    pub async fn verify_for_navigation(&self) -> bool {
        let mut slot = self.last_verification.lock().await;
        if let Some((at, verified)) = *slot {
            if at.elapsed() < VERIFICATION_DEBOUNCE {
                return verified;
            }
        }
        let verified = self.verify_token().await;
        *slot = Some((Instant::now(), verified));
        verified
    }

    /// Fetch the current user's profile without touching session state.
    ///
    /// # Errors
    /// Transport failure, non-2xx status, or an undecodable body.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.api.get_json(ME_PATH).await
    }

    async fn check_profile(&self) -> bool {
        let response = match self.api.send(Method::GET, ME_PATH, None::<&()>).await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!(%error, "token verification transport failure");
                return false;
            }
        };
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "token verification rejected");
            return false;
        }
        match response.json::<UserProfile>().await {
            Ok(profile) if profile.id != 0 => {
                self.session.set_flags(profile.role_flags());
                true
            }
            Ok(_) => {
                tracing::debug!("profile response missing identity marker");
                false
            }
            Err(error) => {
                tracing::debug!(%error, "profile response undecodable");
                false
            }
        }
    }
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway").field("session", &self.session).finish()
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
