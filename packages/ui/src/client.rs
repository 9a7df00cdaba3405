//! Root providers: API client, session, activity log and the user-list
//! revision counter.

use api::ApiClient;
use dioxus::prelude::*;
use store::ApiConfig;

use crate::activity_log::ActivityLog;
use crate::session::SessionContext;
use crate::storage::make_storage;

/// Bumped after a user mutation; every mounted user list refetches.
#[derive(Clone, Copy)]
pub struct UsersRevision(Signal<u32>);

impl UsersRevision {
    pub fn get(&self) -> u32 {
        (self.0)()
    }

    pub fn bump(&self) {
        let mut inner = self.0;
        inner += 1;
    }
}

pub fn use_users_revision() -> UsersRevision {
    use_context::<UsersRevision>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Wrap the router with this. Everything below it can use the hooks in
/// [`crate::hooks`] and [`crate::session`].
#[component]
pub fn RewardsProvider(config: ApiConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));
    use_context_provider(|| SessionContext::new(make_storage()));
    use_context_provider(|| UsersRevision(Signal::new(0)));

    let client = use_hook(|| {
        ApiClient::new(&config).inspect_err(|e| tracing::error!(error = ?e, "could not build HTTP client"))
    });

    match client {
        Ok(client) => rsx! {
            ApiScope { client: client, {children} }
        },
        Err(e) => rsx! {
            div { class: "fatal-error", "{e}" }
        },
    }
}

#[component]
fn ApiScope(client: ApiClient, children: Element) -> Element {
    use_context_provider(|| {
        tracing::debug!(base_url = client.base_url(), "api client ready");
        client.clone()
    });
    rsx! {
        {children}
    }
}
