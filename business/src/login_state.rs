//! Login state and the authentication seam.
//!
//! This module tracks:
//! - The identifier (email or username) and password inputs
//! - Authentication status (idle, in flight, failed)
//! - The [`Authenticator`] used to check credentials
//!
//! ## Backend
//!
//! There is no real backend. [`SimulatedAuthenticator`] waits for the
//! configured delay and then always rejects the credentials.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use roster_states::{Command, Compute, ComputeDeps, Dep, State, Updater};
use thiserror::Error;

/// Shown for every rejected login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Input state for the login form.
#[derive(Default, Debug, Clone)]
pub struct LoginInput {
    /// Email or username.
    pub identifier: String,
    pub password: String,
}

impl State for LoginInput {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{field} is required")]
    EmptyField { field: &'static str },
    #[error("Invalid email or password. Please try again.")]
    SimulatedFailure,
}

/// Checks credentials. Implementations may take as long as they like; the
/// caller runs them on a background task.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the signed-in identity.
    async fn authenticate(&self, credentials: Credentials) -> Result<String, AuthError>;
}

/// Stand-in backend: sleeps, then fails.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> Result<String, AuthError> {
        info!(
            "SimulatedAuthenticator: checking '{}' after {:?}",
            credentials.identifier, self.delay
        );
        tokio::time::sleep(self.delay).await;
        Err(AuthError::SimulatedFailure)
    }
}

/// The authenticator `LoginCommand` calls, registered as a state.
#[derive(Clone)]
pub struct AuthBackend(pub Arc<dyn Authenticator>);

impl AuthBackend {
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        Self(Arc::new(authenticator))
    }

    pub fn simulated(delay: Duration) -> Self {
        Self::new(SimulatedAuthenticator::new(delay))
    }
}

impl fmt::Debug for AuthBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthBackend(..)")
    }
}

impl State for AuthBackend {}

/// Result/status of authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Idle,
    /// A login is in flight; inputs are locked.
    Authenticating,
    Authenticated {
        identifier: String,
    },
    /// Message for the inline alert.
    Failed(String),
}

impl AuthStatus {
    pub fn is_authenticating(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Compute-shaped cache for the authentication status.
///
/// `compute()` is a no-op: only `LoginCommand` writes it, through
/// `Updater::set`.
#[derive(Default, Debug)]
pub struct AuthCompute {
    pub status: AuthStatus,
}

impl AuthCompute {
    pub fn is_authenticating(&self) -> bool {
        self.status.is_authenticating()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}

impl Compute for AuthCompute {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 0] = [];
        const COMPUTE_IDS: [TypeId; 0] = [];
        (&STATE_IDS, &COMPUTE_IDS)
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn failed(err: &AuthError) -> AuthCompute {
    AuthCompute {
        status: AuthStatus::Failed(err.to_string()),
    }
}

/// Manual-only command that submits the login form.
///
/// ## Flow
///
/// 1. Ignored while a previous login is still in flight
/// 2. Both fields must be non-empty after trimming
/// 3. Sets status to `Authenticating`
/// 4. Spawns the [`AuthBackend`] call on the current tokio runtime
/// 5. The task reports `Authenticated` or `Failed` through the updater
///
/// Dispatch explicitly via `ctx.dispatch::<LoginCommand>()`.
#[derive(Default, Debug)]
pub struct LoginCommand;

impl Command for LoginCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        if deps.get_compute_ref::<AuthCompute>().is_authenticating() {
            info!("LoginCommand: login already in flight, ignoring");
            return;
        }

        let input = deps.get_state_ref::<LoginInput>();
        let identifier = input.identifier.trim().to_owned();

        if identifier.is_empty() {
            info!("LoginCommand: identifier is empty");
            updater.set(failed(&AuthError::EmptyField {
                field: "Email or Username",
            }));
            return;
        }

        if input.password.trim().is_empty() {
            info!("LoginCommand: password is empty");
            updater.set(failed(&AuthError::EmptyField { field: "Password" }));
            return;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                error!("LoginCommand: no async runtime to authenticate on: {err}");
                updater.set(AuthCompute {
                    status: AuthStatus::Failed("Login is unavailable right now".to_owned()),
                });
                return;
            }
        };

        info!("LoginCommand: authenticating '{identifier}'");
        updater.set(AuthCompute {
            status: AuthStatus::Authenticating,
        });

        let backend = deps.get_state_ref::<AuthBackend>().clone();
        let credentials = Credentials {
            identifier,
            password: input.password.clone(),
        };

        handle.spawn(async move {
            let status = match backend.0.authenticate(credentials).await {
                Ok(identifier) => {
                    info!("LoginCommand: signed in as '{identifier}'");
                    AuthStatus::Authenticated { identifier }
                }
                Err(err) => {
                    info!("LoginCommand: authentication failed: {err}");
                    AuthStatus::Failed(err.to_string())
                }
            };
            updater.set(AuthCompute { status });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_failure_uses_the_fixed_message() {
        assert_eq!(
            AuthError::SimulatedFailure.to_string(),
            "Invalid email or password. Please try again."
        );
    }

    #[test]
    fn empty_field_names_the_field() {
        assert_eq!(
            AuthError::EmptyField { field: "Password" }.to_string(),
            "Password is required"
        );
    }

    #[test]
    fn auth_status_default_is_idle() {
        let status = AuthStatus::default();
        assert_eq!(status, AuthStatus::Idle);
        assert!(!status.is_authenticating());
        assert!(status.error().is_none());
    }

    #[test]
    fn failed_status_exposes_message() {
        let status = AuthStatus::Failed("nope".to_owned());
        assert_eq!(status.error(), Some("nope"));
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_authenticator_waits_then_fails() {
        let auth = SimulatedAuthenticator::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        let result = auth
            .authenticate(Credentials {
                identifier: "john@example.com".to_owned(),
                password: "secret".to_owned(),
            })
            .await;

        assert_eq!(result, Err(AuthError::SimulatedFailure));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
