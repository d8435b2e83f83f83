//! Server entities as the client sees them.
//!
//! Each entity names the fields the stores actually read and keeps every
//! other server field in a flattened map, so nothing is dropped when a
//! record is echoed back in an edit payload.

mod announcement;
mod comment;
mod id;
mod lenient;
mod media;
mod message;
mod project;
mod update;
mod user;

pub use announcement::{Announcement, AnnouncementDetail, AnnouncementList};
pub use comment::{Comment, CommentList, CommentPosted, Reaction, ReactionList};
pub use id::EntityId;
pub use media::UploadedImage;
pub use message::{Conversation, ConversationCreated, ConversationList, Message, MessageList};
pub use project::{Project, ProjectDetail, ProjectList, ProjectStatus};
pub use update::{ProjectUpdate, UpdateList};
pub use user::{Barangay, BarangayList, Contact, ContactList, LoginResponse, Role, SessionUser, User, UserList};

use chrono::{DateTime, Utc};

/// Opaque server fields carried alongside the typed ones.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Entities that carry a server `createdAt` timestamp.
pub trait Timestamped {
    fn created_at(&self) -> Option<DateTime<Utc>>;
}
