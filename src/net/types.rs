//! Wire types for the auth endpoints.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::RoleFlags;

/// Credentials for `POST /auth/login/`. Transient: never persisted beyond
/// the login call.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub auth_token: String,
}

/// Registration payload for `POST /auth/users/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub sex: String,
    pub is_farm_owner: bool,
    pub is_farm_manager: bool,
    pub is_assistant_farm_manager: bool,
    pub is_farm_worker: bool,
}

#[derive(Debug, Deserialize)]
pub struct RegistrationResponse {
    pub username: String,
}

/// Profile returned by the id-less `GET /auth/users/me/` lookup. A non-zero
/// `id` is the identity marker verification checks for.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub is_farm_owner: bool,
    #[serde(default)]
    pub is_farm_manager: bool,
    #[serde(default)]
    pub is_assistant_farm_manager: bool,
    #[serde(default)]
    pub is_farm_worker: bool,
    // Present on the wire but not consulted by any guard.
    #[serde(default)]
    pub is_team_leader: bool,
}

impl UserProfile {
    #[must_use]
    pub fn role_flags(&self) -> RoleFlags {
        RoleFlags {
            is_farm_owner: self.is_farm_owner,
            is_farm_manager: self.is_farm_manager,
            is_assistant_farm_manager: self.is_assistant_farm_manager,
            is_farm_worker: self.is_farm_worker,
        }
    }
}

/// Field-keyed validation errors from a rejected registration, e.g.
/// `{"username": ["A user with that username already exists."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Parse a server error body into per-field message lists. Accepts both
    /// list-valued and string-valued fields (the server mixes them).
    /// Returns `None` when the body is not a JSON object of that shape.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        let root: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = root.as_object()?;
        let mut fields = BTreeMap::new();
        for (key, value) in object {
            let messages: Vec<String> = match value {
                serde_json::Value::String(message) => vec![message.clone()],
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
                _ => continue,
            };
            if !messages.is_empty() {
                fields.insert(key.clone(), messages);
            }
        }
        if fields.is_empty() { None } else { Some(Self(fields)) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
