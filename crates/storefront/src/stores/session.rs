//! Session store.
//!
//! Authoritative holder of "who is logged in". Keeps the in-memory user
//! directory for this mock system, the active session, and the durable
//! snapshot that survives restarts. At most one session is active per
//! application instance.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use ecofinds_core::{Email, EmailError, UserId, Username, UsernameError};

use crate::latency::MockLatency;
use crate::models::{CurrentUser, User};
use crate::stores::snapshot::SnapshotStore;

/// Errors that can occur during session operations.
///
/// Every failure leaves the session and the user directory unchanged.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Invalid display name.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// The email is already registered.
    #[error("an account with this email already exists")]
    EmailAlreadyExists,

    /// Wrong email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The operation needs an active session and there is none.
    #[error("no active session")]
    NotSignedIn,
}

/// A registered identity plus its mock credential.
///
/// Credentials are compared for equality; this mock never hashes them. An
/// identity restored from a snapshot has no credential until it registers
/// again, so logging in against it fails.
struct UserRecord {
    user: User,
    password: Option<SecretString>,
}

struct SessionInner {
    users: Vec<UserRecord>,
    active: Option<UserId>,
}

/// The session store.
///
/// Cheaply cloneable; clones share the same directory and active session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
    snapshots: Arc<dyn SnapshotStore>,
    latency: MockLatency,
}

impl SessionStore {
    /// Create a session store, restoring the active session from the
    /// durable snapshot if one was persisted.
    #[must_use]
    pub fn restore(snapshots: Arc<dyn SnapshotStore>, latency: MockLatency) -> Self {
        let mut users = Vec::new();
        let mut active = None;

        if let Some(current) = snapshots.load() {
            tracing::info!(user = %current.email, "Restored session from snapshot");
            active = Some(current.id.clone());
            users.push(UserRecord {
                user: User {
                    id: current.id,
                    email: current.email,
                    username: current.username,
                    created_at: Utc::now(),
                },
                password: None,
            });
        }

        Self {
            inner: Arc::new(RwLock::new(SessionInner { users, active })),
            snapshots,
            latency,
        }
    }

    // Mutations never leave a record half-updated, so a poisoned lock still
    // guards consistent data; recover the guard instead of failing reads.
    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The currently signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let inner = self.read();
        let active = inner.active.as_ref()?;
        inner
            .users
            .iter()
            .find(|r| r.user.id == *active)
            .map(|r| r.user.clone())
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.read().active.is_some()
    }

    /// Register a new identity and make it the active session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` / `AuthError::InvalidUsername` for
    /// malformed input and `AuthError::EmailAlreadyExists` if the email is
    /// already registered.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        self.latency.simulate().await;

        let email = Email::parse(email)?;
        let username = Username::parse(username)?;

        let user = {
            let mut inner = self.write();
            if inner.users.iter().any(|r| r.user.email == email) {
                return Err(AuthError::EmailAlreadyExists);
            }

            let user = User {
                id: UserId::random(),
                email,
                username,
                created_at: Utc::now(),
            };
            inner.users.push(UserRecord {
                user: user.clone(),
                password: Some(SecretString::from(password.to_owned())),
            });
            inner.active = Some(user.id.clone());
            user
        };

        self.snapshots.save(&CurrentUser::from(&user));
        tracing::info!(user = %user.email, "Registered new account");
        Ok(user)
    }

    /// Activate an existing identity whose stored credential matches.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for malformed input and
    /// `AuthError::InvalidCredentials` if the email is unknown or the
    /// password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.latency.simulate().await;

        let email = Email::parse(email)?;

        let user = {
            let mut inner = self.write();
            let record = inner
                .users
                .iter()
                .find(|r| r.user.email == email)
                .ok_or(AuthError::InvalidCredentials)?;

            let matches = record
                .password
                .as_ref()
                .is_some_and(|stored| stored.expose_secret() == password);
            if !matches {
                return Err(AuthError::InvalidCredentials);
            }

            let user = record.user.clone();
            inner.active = Some(user.id.clone());
            user
        };

        self.snapshots.save(&CurrentUser::from(&user));
        tracing::info!(user = %user.email, "Signed in");
        Ok(user)
    }

    /// Clear the active session and the persisted snapshot.
    ///
    /// The caller is responsible for clearing the dependent cart store.
    pub fn logout(&self) {
        self.write().active = None;
        self.snapshots.clear();
        tracing::info!("Signed out");
    }

    /// Change the active user's display name.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` with no active session and
    /// `AuthError::InvalidUsername` if the trimmed name is too short.
    pub async fn update_username(&self, new_name: &str) -> Result<User, AuthError> {
        self.latency.simulate().await;

        let username = Username::parse(new_name)?;

        let user = {
            let mut inner = self.write();
            let active = inner.active.clone().ok_or(AuthError::NotSignedIn)?;
            let record = inner
                .users
                .iter_mut()
                .find(|r| r.user.id == active)
                .ok_or(AuthError::NotSignedIn)?;

            record.user.username = username;
            record.user.clone()
        };

        self.snapshots.save(&CurrentUser::from(&user));
        Ok(user)
    }
}
