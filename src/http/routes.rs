//! Resource paths, relative to the configured base URL.
//!
//! A [`Route`] keeps its segments apart until the URL is built, so an id
//! holding `/`, `?` or `#` is percent-encoded as one segment instead of
//! reshaping the path.

use crate::model::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    collection: &'static str,
    tail: Vec<String>,
}

impl Route {
    pub const fn new(collection: &'static str) -> Self {
        Self {
            collection,
            tail: Vec::new(),
        }
    }

    fn id(mut self, id: &EntityId) -> Self {
        self.tail.push(id.to_string());
        self
    }

    fn then(mut self, segment: &str) -> Self {
        self.tail.push(segment.to_string());
        self
    }

    /// Raw path segments, unencoded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.collection
            .split('/')
            .filter(|s| !s.is_empty())
            .chain(self.tail.iter().map(String::as_str))
    }
}

pub const AUTH_LOGIN: Route = Route::new("/auth/login");
pub const PROJECTS: Route = Route::new("/projects");
pub const ANNOUNCEMENTS: Route = Route::new("/announcements");
pub const CONVERSATIONS: Route = Route::new("/messages/conversations");
pub const USERS: Route = Route::new("/users");
pub const BARANGAYS: Route = Route::new("/barangays");
pub const CONTACTS: Route = Route::new("/contacts");

pub fn project(id: &EntityId) -> Route {
    PROJECTS.id(id)
}

pub fn project_comments(id: &EntityId) -> Route {
    PROJECTS.id(id).then("comments")
}

pub fn project_reactions(id: &EntityId) -> Route {
    PROJECTS.id(id).then("reactions")
}

pub fn project_updates(id: &EntityId) -> Route {
    PROJECTS.id(id).then("updates")
}

pub fn project_update(project_id: &EntityId, update_id: &EntityId) -> Route {
    PROJECTS.id(project_id).then("updates").id(update_id)
}

pub fn announcement(id: &EntityId) -> Route {
    ANNOUNCEMENTS.id(id)
}

pub fn conversation(id: &EntityId) -> Route {
    CONVERSATIONS.id(id)
}

pub fn user(id: &EntityId) -> Route {
    USERS.id(id)
}
