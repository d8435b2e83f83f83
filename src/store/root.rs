//! The whole state tree and the routing of intents to slices.

use crate::mvi::{Intent, Reducer, StoreState};

use super::announcements::{AnnouncementsIntent, AnnouncementsReducer, AnnouncementsState};
use super::auth::{AuthIntent, AuthReducer, AuthState};
use super::barangays::{BarangaysIntent, BarangaysReducer, BarangaysState};
use super::comments::{CommentsIntent, CommentsReducer, CommentsState};
use super::contacts::{ContactsIntent, ContactsReducer, ContactsState};
use super::event::{StoreEvent, Subscriber};
use super::media::{MediaIntent, MediaReducer, MediaState};
use super::messages::{MessagesIntent, MessagesReducer, MessagesState};
use super::projects::{ProjectsIntent, ProjectsReducer, ProjectsState};
use super::reactions::{ReactionsIntent, ReactionsReducer, ReactionsState};
use super::updates::{UpdatesIntent, UpdatesReducer, UpdatesState};
use super::users::{UsersIntent, UsersReducer, UsersState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub auth: AuthState,
    pub projects: ProjectsState,
    pub announcements: AnnouncementsState,
    pub comments: CommentsState,
    pub messages: MessagesState,
    pub barangays: BarangaysState,
    pub users: UsersState,
    pub reactions: ReactionsState,
    pub updates: UpdatesState,
    pub contacts: ContactsState,
    pub media: MediaState,
}

impl StoreState for RootState {}

#[derive(Debug, Clone)]
pub enum RootIntent {
    Auth(AuthIntent),
    Projects(ProjectsIntent),
    Announcements(AnnouncementsIntent),
    Comments(CommentsIntent),
    Messages(MessagesIntent),
    Barangays(BarangaysIntent),
    Users(UsersIntent),
    Reactions(ReactionsIntent),
    Updates(UpdatesIntent),
    Contacts(ContactsIntent),
    Media(MediaIntent),
    /// User signed out.
    Logout,
    /// Backend answered 401.
    SessionExpired,
}

impl Intent for RootIntent {}

impl RootIntent {
    /// Events published once this intent has been reduced.
    pub fn published_events(&self) -> Vec<StoreEvent> {
        match self {
            RootIntent::Projects(intent) => intent.published_event().into_iter().collect(),
            RootIntent::Logout | RootIntent::SessionExpired => vec![StoreEvent::SessionCleared],
            _ => Vec::new(),
        }
    }
}

pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = RootIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let events = intent.published_events();

        match intent {
            RootIntent::Auth(i) => state.auth = AuthReducer::reduce(state.auth, i),
            RootIntent::Projects(i) => state.projects = ProjectsReducer::reduce(state.projects, i),
            RootIntent::Announcements(i) => {
                state.announcements = AnnouncementsReducer::reduce(state.announcements, i)
            }
            RootIntent::Comments(i) => state.comments = CommentsReducer::reduce(state.comments, i),
            RootIntent::Messages(i) => state.messages = MessagesReducer::reduce(state.messages, i),
            RootIntent::Barangays(i) => {
                state.barangays = BarangaysReducer::reduce(state.barangays, i)
            }
            RootIntent::Users(i) => state.users = UsersReducer::reduce(state.users, i),
            RootIntent::Reactions(i) => {
                state.reactions = ReactionsReducer::reduce(state.reactions, i)
            }
            RootIntent::Updates(i) => state.updates = UpdatesReducer::reduce(state.updates, i),
            RootIntent::Contacts(i) => state.contacts = ContactsReducer::reduce(state.contacts, i),
            RootIntent::Media(i) => state.media = MediaReducer::reduce(state.media, i),
            RootIntent::Logout | RootIntent::SessionExpired => state = RootState::default(),
        }

        for event in &events {
            state = state.deliver(event);
        }
        state
    }
}

impl RootState {
    /// Fan an event out to the slices that subscribe to it.
    fn deliver(mut self, event: &StoreEvent) -> Self {
        self.comments = self.comments.on_event(event);
        self.reactions = self.reactions.on_event(event);
        self.updates = self.updates.on_event(event);
        self
    }
}

macro_rules! route {
    ($($variant:ident => $intent:ty),* $(,)?) => {
        $(
            impl From<$intent> for RootIntent {
                fn from(intent: $intent) -> Self {
                    RootIntent::$variant(intent)
                }
            }
        )*
    };
}

route! {
    Auth => AuthIntent,
    Projects => ProjectsIntent,
    Announcements => AnnouncementsIntent,
    Comments => CommentsIntent,
    Messages => MessagesIntent,
    Barangays => BarangaysIntent,
    Users => UsersIntent,
    Reactions => ReactionsIntent,
    Updates => UpdatesIntent,
    Contacts => ContactsIntent,
    Media => MediaIntent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommentList, EntityId, Project, ProjectList};
    use crate::store::Outcome;

    fn with_comments() -> RootState {
        let comment = serde_json::from_value(serde_json::json!({"id": 1, "content": "hi"})).unwrap();
        RootReducer::reduce(
            RootState::default(),
            CommentsIntent::GetAll(Outcome::Fulfilled(CommentList {
                project_comments: vec![comment],
                total_count: 1,
            }))
            .into(),
        )
    }

    fn projects() -> ProjectList {
        ProjectList {
            projects: Some(vec![Project {
                id: EntityId::Int(1),
                title: "Road".to_string(),
                description: String::new(),
                status: "planned".to_string(),
                created_at: None,
                extra: Default::default(),
            }]),
            total_count: 1,
        }
    }

    #[test]
    fn project_reload_clears_dependent_stores() {
        let state = with_comments();
        assert_eq!(state.comments.total_comments, 1);

        let state = RootReducer::reduce(
            state,
            ProjectsIntent::GetAll(Outcome::Fulfilled(projects())).into(),
        );
        assert_eq!(state.projects.total_projects, 1);
        assert!(state.comments.comments.is_empty());
        assert_eq!(state.comments.total_comments, 0);
    }

    #[test]
    fn failed_project_reload_leaves_comments() {
        let state = RootReducer::reduce(
            with_comments(),
            ProjectsIntent::GetAll(Outcome::Rejected("Network Error".to_string())).into(),
        );
        assert_eq!(state.comments.total_comments, 1);
    }

    #[test]
    fn session_expiry_resets_everything() {
        let state = RootReducer::reduce(with_comments(), AuthIntent::ContinueAsGuest.into());
        let state = RootReducer::reduce(state, RootIntent::SessionExpired);
        assert_eq!(state, RootState::default());
    }

    #[test]
    fn published_events() {
        let reload = RootIntent::from(ProjectsIntent::GetAll(Outcome::Fulfilled(projects())));
        assert_eq!(reload.published_events(), vec![StoreEvent::ProjectsReloaded]);

        let pending = RootIntent::from(ProjectsIntent::GetAll(Outcome::Pending));
        assert!(pending.published_events().is_empty());

        assert_eq!(RootIntent::Logout.published_events(), vec![StoreEvent::SessionCleared]);
    }
}
