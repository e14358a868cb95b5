use serde::{Deserialize, Serialize};

use crate::ids::BaseId;
use crate::role::Role;

/// Request payload to create a user.
///
/// The identifier is assigned by the server; the password is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<BaseId>,
}

/// Request payload to update an existing user.
///
/// `password` is omitted from the payload entirely when left blank so the
/// server keeps the stored credential untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<BaseId>,
}
