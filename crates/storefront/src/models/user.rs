//! User domain types.
//!
//! These types represent validated domain objects; raw form input is parsed
//! into them at the edges.

use chrono::{DateTime, Utc};

use ecofinds_core::{Email, UserId, Username};

/// A marketplace user (domain type).
///
/// The login credential is held by the session store, not here, so `User`
/// values can flow freely into views and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (the login key).
    pub email: Email,
    /// User's mutable display name.
    pub username: Username,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
