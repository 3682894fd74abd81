//! User entity - the single record type managed by this service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record.
///
/// The `id` is assigned by the persistence gateway when the record is
/// created and never changes afterwards. `email` is unique across all
/// records (enforced by the store's unique index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Stored exactly as supplied; this service does no hashing.
    pub password: String,
}

/// Fields for a user that does not exist yet. The gateway assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

impl User {
    /// Attach a gateway-assigned id to creation fields.
    pub fn from_new(id: Uuid, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
        }
    }
}
