use serde::{Deserialize, Serialize};

use crate::base::Base;
use crate::ids::UserId;
use crate::role::Role;

/// Account status as reported by the server.
///
/// Anything other than an explicit `inactive` counts as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Active,
    Inactive,
    /// Unrecognized status code, preserved as-is
    Other(String),
}

impl From<String> for UserStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "active" => UserStatus::Active,
            "inactive" => UserStatus::Inactive,
            _ => UserStatus::Other(code),
        }
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => "active".to_string(),
            UserStatus::Inactive => "inactive".to_string(),
            UserStatus::Other(code) => code,
        }
    }
}

/// A user record as fetched from the server.
///
/// The password is write-only: it never appears on fetched records and is
/// carried only in the request payloads (`CreateUserRequest`,
/// `UpdateUserRequest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Assigned base; records without one must be handled defensively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Base>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl User {
    /// A user is active unless its status is explicitly `inactive`.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, Some(UserStatus::Inactive))
    }
}
