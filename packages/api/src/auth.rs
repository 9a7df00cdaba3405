//! `POST /auth/login`.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{LoginCredentials, LoginResponse};

const LOGIN: &str = "tentar fazer login";

impl ApiClient {
    /// Exchange credentials for a token and the user's identity.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        let response: LoginResponse = self.post("/auth/login", credentials, LOGIN).await?;
        tracing::info!(user_id = %response.id, "logged in");
        Ok(response)
    }
}
