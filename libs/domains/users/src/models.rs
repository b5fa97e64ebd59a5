use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity, the only record type held by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Identifier assigned by the repository, starting at 1 and never reused
    pub id: u64,
    /// Display name, stored as given
    pub name: String,
    /// Email address, stored as given (not required to be unique)
    pub email: String,
}

/// DTO for creating a new user
///
/// Missing fields default to empty strings; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// DTO for a partial update
///
/// Absent or `null` fields leave the stored value untouched. Unknown keys,
/// `id` included, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Creates an unsaved user. The `id` is a placeholder until the
    /// repository assigns one.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Merge a partial update onto this user, field by field
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}
