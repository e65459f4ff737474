//! Session-related types.

use serde::{Deserialize, Serialize};

use ecofinds_core::{Email, UserId, Username};

use crate::models::User;

/// The identity of the signed-in user.
///
/// This is the minimal record that identifies a session: it is what the
/// durable snapshot persists across application restarts, and what the
/// HTTP surface returns for auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// User's display name.
    pub username: Username,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
        }
    }
}
