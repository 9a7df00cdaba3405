use std::future::Future;

use api::{ApiClient, ApiError, User, UserCreate, UserService, UserUpdate};
use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::client::{use_api, use_users_revision, UsersRevision};

/// User create/update/delete with shared `loading` and `error` state.
///
/// Implements [`UserService`], so the form controller drives it exactly like
/// the raw client. Every successful mutation is logged and bumps the user-list
/// revision.
#[derive(Clone)]
pub struct UserMutations {
    api: ApiClient,
    log: Signal<ActivityLog>,
    revision: UsersRevision,
    pub loading: Signal<bool>,
    pub error: Signal<Option<ApiError>>,
}

pub fn use_user_mutations() -> UserMutations {
    UserMutations {
        api: use_api(),
        log: use_activity_log(),
        revision: use_users_revision(),
        loading: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl UserMutations {
    async fn track<T>(&self, request: impl Future<Output = api::Result<T>>, done: impl FnOnce(&T) -> String) -> api::Result<T> {
        let mut loading = self.loading;
        let mut error = self.error;
        let mut log = self.log;

        loading.set(true);
        error.set(None);
        let result = request.await;
        match &result {
            Ok(value) => {
                log_activity(&mut log, LogLevel::Success, &done(value));
                self.revision.bump();
            }
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &e.to_string());
                error.set(Some(e.clone()));
            }
        }
        loading.set(false);
        result
    }
}

impl UserService for UserMutations {
    async fn create_user(&self, payload: &UserCreate) -> api::Result<User> {
        self.track(self.api.create_user(payload), |u: &User| format!("Usuário {} criado", u.name))
            .await
    }

    async fn update_user(&self, id: &str, payload: &UserUpdate) -> api::Result<User> {
        self.track(self.api.update_user(id, payload), |u: &User| format!("Usuário {} atualizado", u.name))
            .await
    }

    async fn delete_user(&self, id: &str) -> api::Result<()> {
        self.track(self.api.delete_user(id), |_| format!("Usuário {id} excluído"))
            .await
    }
}
