//! Session context.
//!
//! The logged-in session is held in one [`SessionContext`] provided at the app
//! root. Components read it through [`use_session`]; only [`use_login`] and
//! [`use_logout`] write it, and they always write storage and the in-memory
//! state together.

use api::{ApiClient, LoginCredentials};
use dioxus::prelude::*;
use store::{Session, SessionStore, SessionUser};

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::storage::SharedStorage;

/// Shown when no session user is stored.
pub const GUEST_NAME: &str = "Trade";
pub const GUEST_EMAIL: &str = "trade@tradetechnology.com.br";
pub const GUEST_AVATAR: &str = "/avatars/shadcn.jpg";

#[derive(Clone)]
pub struct SessionContext {
    state: Signal<Option<Session>>,
    store: SessionStore<SharedStorage>,
}

impl SessionContext {
    pub fn new(storage: SharedStorage) -> Self {
        let store = SessionStore::new(storage);
        Self {
            state: Signal::new(store.load()),
            store,
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.read().as_ref().map(|s| s.user.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.user.id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_some()
    }

    fn sign_in(&self, session: Session) {
        let mut state = self.state;
        self.store.save(&session);
        state.set(Some(session));
    }

    fn sign_out(&self) {
        let mut state = self.state;
        self.store.clear();
        state.set(None);
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Credential submission with its own `loading` / `error` state.
#[derive(Clone)]
pub struct UseLogin {
    session: SessionContext,
    api: ApiClient,
    log: Signal<ActivityLog>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

pub fn use_login() -> UseLogin {
    UseLogin {
        session: use_session(),
        api: crate::client::use_api(),
        log: crate::activity_log::use_activity_log(),
        loading: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl UseLogin {
    /// Spawn the login request. On success the session is stored and
    /// `on_success` receives the user, typically to navigate away.
    pub fn submit(&self, credentials: LoginCredentials, on_success: EventHandler<SessionUser>) {
        let this = self.clone();
        spawn(async move {
            this.run(credentials, on_success).await;
        });
    }

    async fn run(self, credentials: LoginCredentials, on_success: EventHandler<SessionUser>) {
        let mut loading = self.loading;
        let mut error = self.error;
        let mut log = self.log;

        loading.set(true);
        error.set(None);

        match self.api.login(&credentials).await {
            Ok(response) => {
                let session = response.into_session();
                let user = session.user.clone();
                self.session.sign_in(session);
                log_activity(&mut log, LogLevel::Success, &format!("Login de {}", user.email));
                loading.set(false);
                on_success.call(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                log_activity(&mut log, LogLevel::Error, &e.to_string());
                error.set(Some(e.to_string()));
                loading.set(false);
            }
        }
    }
}

/// Returns a callback that clears the stored session. Navigation back to the
/// login route is left to `on_logged_out` so this crate stays router-agnostic.
pub fn use_logout(on_logged_out: EventHandler<()>) -> Callback<()> {
    let session = use_session();
    let mut log = crate::activity_log::use_activity_log();
    use_callback(move |_: ()| {
        session.sign_out();
        log_activity(&mut log, LogLevel::Info, "Sessão encerrada");
        on_logged_out.call(());
    })
}
