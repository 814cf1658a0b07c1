//! User account types.

use serde::{Deserialize, Serialize};

use crate::{Email, UserId};

/// A user account as exposed by the API.
///
/// Credential material never leaves the server; this is the shape returned
/// from register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub is_admin: bool,
}
