//! Page-local state machines that sit on top of the shared stores.

pub mod messages_page;
