//! Marker trait for intents.

/// Anything a reducer can react to.
///
/// Intents are either outcome events of an async action (pending,
/// fulfilled, rejected) or synchronous setters that bypass the lifecycle.
pub trait Intent: Send + 'static {}
