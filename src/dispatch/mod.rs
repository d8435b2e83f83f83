//! Async action dispatcher.
//!
//! Every action is one HTTP call wrapped in three outcome events: pending
//! before the request, then fulfilled or rejected. A handful of actions
//! follow up with a hard-coded re-fetch of the list they just changed.

mod announcements;
mod auth;
mod directory;
mod media;
mod messages;
mod projects;
mod social;
pub mod tags;
mod updates;

use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::http::{ApiClient, ApiError, AuthHeader};
use crate::store::{Outcome, Phase, RootIntent, Store};
use crate::upload::ImageHostClient;

/// Runs async actions against the backend and feeds their outcomes to the store.
///
/// Futures returned by action methods are lazy: nothing is dispatched until
/// they are polled, and dropping one mid-flight abandons the request
/// without a rejection.
#[derive(Clone)]
pub struct Dispatcher {
    store: Store,
    api: ApiClient,
    images: ImageHostClient,
}

impl Dispatcher {
    /// Fresh store wired to a client that clears it on 401.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let store = Store::new();
        let api = ApiClient::new(&config.api)?.with_unauthorized_hook(Arc::new(store.clone()));
        let images = ImageHostClient::new(&config.upload)?;
        Ok(Self::with_parts(store, api, images))
    }

    pub fn with_parts(store: Store, api: ApiClient, images: ImageHostClient) -> Self {
        Self { store, api, images }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Credential chosen from the session as it is right now.
    fn auth(&self) -> AuthHeader {
        self.store.select(|s| s.auth.auth_header())
    }

    /// Drive one request through pending → fulfilled | rejected.
    async fn run<T, L, Fut>(&self, tag: &'static str, lift: L, request: Fut) -> Result<T, ApiError>
    where
        T: Clone,
        L: Fn(Outcome<T>) -> RootIntent,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let request_id = Uuid::new_v4();
        tracing::debug!(action = tag, %request_id, "pending");
        self.store
            .dispatch_outcome(tag, request_id, Phase::Pending, lift(Outcome::Pending));

        match request.await {
            Ok(payload) => {
                tracing::debug!(action = tag, %request_id, "fulfilled");
                self.store.dispatch_outcome(
                    tag,
                    request_id,
                    Phase::Fulfilled,
                    lift(Outcome::Fulfilled(payload.clone())),
                );
                Ok(payload)
            }
            Err(err) => {
                tracing::warn!(
                    action = tag,
                    %request_id,
                    error_type = err.error_type(),
                    error = %err,
                    "rejected"
                );
                self.store.dispatch_outcome(
                    tag,
                    request_id,
                    Phase::Rejected,
                    lift(Outcome::Rejected(err.payload())),
                );
                Err(err)
            }
        }
    }

    /// Follow-up fetch whose failure is recorded by its own store but does
    /// not fail the action that triggered it.
    async fn refetch<T, Fut>(&self, tag: &'static str, fetch: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Err(err) = fetch.await {
            tracing::warn!(action = tag, error = %err, "follow-up fetch failed");
        }
    }
}
