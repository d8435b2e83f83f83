use uuid::Uuid;

use super::outcome::Phase;

/// Events published by stores after a reduce step.
///
/// Dependent stores react to them through [`Subscriber`]; UI code can
/// listen on [`Store::subscribe`](super::Store::subscribe).
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The full project list was replaced; per-project caches are stale.
    ProjectsReloaded,
    /// Logout or 401: every store was reset.
    SessionCleared,
    /// Lifecycle of a dispatched async action.
    Action {
        tag: &'static str,
        request_id: Uuid,
        phase: Phase,
    },
}

/// A store slice that reacts to events published by other slices.
pub trait Subscriber: Sized {
    fn on_event(self, event: &StoreEvent) -> Self;
}
