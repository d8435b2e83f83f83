//! Resource stores.
//!
//! One state slice per server entity, each driven by the same three outcome
//! events, composed into a single [`RootState`] behind a [`Store`] handle.

pub mod announcements;
pub mod auth;
pub mod barangays;
pub mod comments;
pub mod contacts;
mod event;
mod filters;
mod handle;
pub mod media;
pub mod messages;
mod outcome;
pub mod projects;
pub mod reactions;
mod root;
mod status;
pub mod updates;
pub mod users;

pub use event::{StoreEvent, Subscriber};
pub use filters::FilterCriteria;
pub use handle::Store;
pub use outcome::{Outcome, Phase};
pub use root::{RootIntent, RootReducer, RootState};
pub use status::FetchStatus;
