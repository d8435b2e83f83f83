//! Marker trait for store state.

/// Store snapshots are cloned out to readers, compared to detect changes,
/// and reset to `Default` when a session is torn down.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
