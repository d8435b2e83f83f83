//! Shared handle to the state tree.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::http::UnauthorizedHook;
use crate::mvi::Reducer;

use super::event::StoreEvent;
use super::outcome::Phase;
use super::root::{RootIntent, RootReducer, RootState};

const EVENT_CAPACITY: usize = 256;

/// Cloneable handle to the single state tree.
///
/// The lock is held only for one reduce step, never across an await, so
/// concurrent dispatches interleave between outcomes and never inside one.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<RootState>>,
    events: broadcast::Sender<StoreEvent>,
}

impl Store {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(RootState::default())),
            events,
        }
    }

    /// Reduce one intent, then publish whatever it produced.
    pub fn dispatch(&self, intent: impl Into<RootIntent>) {
        let intent = intent.into();
        let events = intent.published_events();
        self.reduce(intent);
        for event in events {
            self.publish(event);
        }
    }

    /// Dispatch an async action's outcome and announce its phase.
    pub(crate) fn dispatch_outcome(
        &self,
        tag: &'static str,
        request_id: Uuid,
        phase: Phase,
        intent: RootIntent,
    ) {
        self.dispatch(intent);
        self.publish(StoreEvent::Action {
            tag,
            request_id,
            phase,
        });
    }

    /// Clone of the whole tree.
    pub fn snapshot(&self) -> RootState {
        self.state.lock().clone()
    }

    /// Read part of the tree without cloning the rest.
    pub fn select<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        f(&self.state.lock())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn reduce(&self, intent: RootIntent) {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        *guard = RootReducer::reduce(current, intent);
    }

    fn publish(&self, event: StoreEvent) {
        // No receivers is fine; nobody is rendering.
        let _ = self.events.send(event);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl UnauthorizedHook for Store {
    fn on_unauthorized(&self) {
        tracing::info!("Session invalidated, clearing all stores");
        self.dispatch(RootIntent::SessionExpired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::auth::AuthIntent;
    use crate::store::projects::ProjectsIntent;

    #[test]
    fn dispatch_updates_snapshot() {
        let store = Store::new();
        store.dispatch(ProjectsIntent::ToggleAddModeUpdate);
        assert!(store.select(|s| s.projects.add_mode_project_update));
    }

    #[test]
    fn unauthorized_hook_clears_session() {
        let store = Store::new();
        let mut rx = store.subscribe();
        store.dispatch(AuthIntent::ContinueAsGuest);
        assert!(store.select(|s| s.auth.user.is_some()));

        store.on_unauthorized();

        assert!(store.select(|s| s.auth.user.is_none()));
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::SessionCleared);
    }
}
