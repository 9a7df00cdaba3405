//! `/users` resource.

use std::future::Future;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{User, UserCreate, UserUpdate};

const LIST: &str = "consultar usuários";
const GET: &str = "consultar dados do usuário";
const CREATE: &str = "criar o usuário";
const UPDATE: &str = "atualizar o usuário";
const DELETE: &str = "excluir o usuário";

/// User mutations, abstracted so form controllers can run against any backend.
pub trait UserService {
    fn create_user(&self, payload: &UserCreate) -> impl Future<Output = Result<User>>;

    fn update_user(&self, id: &str, payload: &UserUpdate) -> impl Future<Output = Result<User>>;

    fn delete_user(&self, id: &str) -> impl Future<Output = Result<()>>;
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/users", LIST).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.get(&format!("/users/{id}"), GET).await
    }
}

impl UserService for ApiClient {
    async fn create_user(&self, payload: &UserCreate) -> Result<User> {
        self.post("/users", payload, CREATE).await
    }

    async fn update_user(&self, id: &str, payload: &UserUpdate) -> Result<User> {
        self.patch(&format!("/users/{id}"), payload, UPDATE).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(&format!("/users/{id}"), DELETE).await
    }
}
