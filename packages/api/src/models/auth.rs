use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl LoginResponse {
    pub fn into_session(self) -> store::Session {
        store::Session {
            token: self.token,
            user: store::SessionUser {
                id: self.id,
                name: self.name,
                email: self.email,
            },
        }
    }
}
