use serde::{Deserialize, Serialize};

/// Authorization role carried by a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The user record held by the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    /// The fixed identity installed by `SessionStore::login`. There is no
    /// credential exchange; login is a stubbed role toggle.
    pub fn demo_admin() -> Self {
        AuthUser {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@newsportal.com".to_string(),
            role: Role::Admin,
        }
    }
}

/// Persisted shape of the session, one JSON value under the `auth` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: AuthUser,
}
