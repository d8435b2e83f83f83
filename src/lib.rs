//! Client-side state synchronization for the municipal project tracker.
//!
//! Resource stores mirror server collections, the dispatcher drives their
//! request lifecycles, and the HTTP adapter normalizes everything the REST
//! backend can throw back at us.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod model;
pub mod mvi;
pub mod store;
pub mod telemetry;
pub mod ui;
pub mod upload;
pub mod util;
