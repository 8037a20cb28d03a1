//! User domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The owner of an account. Identity records are created by an external
/// process and never mutated here; the email is the recipient key for
/// advisory notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
