use std::future::Future;

use api::{ApiClient, ApiError};
use dioxus::prelude::*;

use crate::client::use_api;

/// `idle → loading → {success | error}`; a refetch goes back to `loading`.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Which branch a page should render.
#[derive(Debug, PartialEq)]
pub enum FetchStatus<'a, T> {
    Idle,
    Loading,
    Failed(&'a ApiError),
    Ready(&'a T),
}

impl<T> FetchState<T> {
    /// State of a hook that has mounted but not resolved yet.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Previous data is kept when a refetch fails.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    pub fn status(&self) -> FetchStatus<'_, T> {
        if self.loading {
            FetchStatus::Loading
        } else if let Some(e) = &self.error {
            FetchStatus::Failed(e)
        } else if let Some(data) = &self.data {
            FetchStatus::Ready(data)
        } else {
            FetchStatus::Idle
        }
    }
}

/// Handle returned by every data hook.
pub struct Fetch<T: 'static> {
    state: Signal<FetchState<T>>,
    resource: Resource<()>,
}

impl<T: 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Fetch<T> {}

impl<T: Clone + 'static> Fetch<T> {
    pub fn state(&self) -> FetchState<T> {
        self.state.read().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.read().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.read().error.clone()
    }

    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}

/// Run `fetch` on mount and whenever a signal it reads changes.
pub fn use_fetch<T, F, Fut>(fetch: F) -> Fetch<T>
where
    T: 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = api::Result<T>> + 'static,
{
    let api = use_api();
    let mut state = use_signal(FetchState::<T>::pending);

    let resource = use_resource(move || {
        let request = fetch(api.clone());
        async move {
            state.write().start();
            let result = request.await;
            if let Err(e) = &result {
                tracing::warn!(action = e.action(), error = ?e, "fetch failed");
            }
            state.write().finish(result);
        }
    });

    Fetch { state, resource }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ApiError {
        ApiError::network("consultar missões", "timeout")
    }

    #[test]
    fn test_lifecycle_success() {
        let mut state = FetchState::<Vec<u32>>::default();
        assert_eq!(state.status(), FetchStatus::Idle);

        state.start();
        assert_eq!(state.status(), FetchStatus::Loading);

        state.finish(Ok(vec![1, 2]));
        assert!(!state.loading);
        assert_eq!(state.status(), FetchStatus::Ready(&vec![1, 2]));
    }

    #[test]
    fn test_lifecycle_error() {
        let mut state = FetchState::<Vec<u32>>::default();
        state.start();
        state.finish(Err(failure()));
        assert!(!state.loading);
        assert_eq!(state.status(), FetchStatus::Failed(&failure()));
    }

    #[test]
    fn test_pending_renders_as_loading() {
        let state = FetchState::<u32>::pending();
        assert_eq!(state.status(), FetchStatus::Loading);
    }

    #[test]
    fn test_refetch_clears_error_and_keeps_data() {
        let mut state = FetchState::<u32>::default();
        state.start();
        state.finish(Ok(7));
        state.start();
        state.finish(Err(failure()));
        assert_eq!(state.data, Some(7));

        state.start();
        assert!(state.error.is_none());
        assert_eq!(state.status(), FetchStatus::Loading);

        state.finish(Ok(8));
        assert_eq!(state.status(), FetchStatus::Ready(&8));
    }
}
