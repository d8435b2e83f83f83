//! Comments on the currently open project.

use crate::model::{Comment, CommentList, CommentPosted};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, FilterCriteria, Outcome, StoreEvent, Subscriber};

pub const DEFAULT_FILTERS: &[(&str, &str)] = &[("search", ""), ("sort", ""), ("commented_by", "")];

#[derive(Debug, Clone, PartialEq)]
pub struct CommentsState {
    pub status: FetchStatus,
    pub comments: Vec<Comment>,
    pub total_comments: u64,
    pub filters: FilterCriteria,
}

impl Default for CommentsState {
    fn default() -> Self {
        Self {
            status: FetchStatus::default(),
            comments: Vec::new(),
            total_comments: 0,
            filters: FilterCriteria::with_defaults(DEFAULT_FILTERS),
        }
    }
}

impl StoreState for CommentsState {}

#[derive(Debug, Clone)]
pub enum CommentsIntent {
    GetAll(Outcome<CommentList>),
    Post(Outcome<CommentPosted>),
    SetFilter { key: String, value: String },
}

impl Intent for CommentsIntent {}

pub struct CommentsReducer;

impl Reducer for CommentsReducer {
    type State = CommentsState;
    type Intent = CommentsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommentsIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.comments = list.project_comments;
                    state.total_comments = list.total_count;
                }
            }
            CommentsIntent::Post(outcome) => {
                state.status = outcome.status();
                // The create response carries the authoritative count; the
                // list itself arrives with the follow-up fetch.
                if let Outcome::Fulfilled(posted) = outcome {
                    state.total_comments = posted.total_count;
                }
            }
            CommentsIntent::SetFilter { key, value } => state.filters.set(key, value),
        }
        state
    }
}

impl Subscriber for CommentsState {
    fn on_event(self, event: &StoreEvent) -> Self {
        match event {
            StoreEvent::ProjectsReloaded => Self::default(),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;

    fn comment(id: i64) -> Comment {
        Comment {
            id: EntityId::Int(id),
            content: format!("comment {}", id),
            commented_by: None,
            created_at: None,
            extra: Default::default(),
        }
    }

    fn loaded() -> CommentsState {
        CommentsReducer::reduce(
            CommentsState::default(),
            CommentsIntent::GetAll(Outcome::Fulfilled(CommentList {
                project_comments: vec![comment(1), comment(2)],
                total_count: 2,
            })),
        )
    }

    #[test]
    fn fetch_replaces_comments() {
        let state = loaded();
        assert_eq!(state.comments.len(), 2);
        assert_eq!(state.total_comments, 2);
        assert!(state.status.is_success());
    }

    #[test]
    fn post_takes_count_from_response() {
        let state = CommentsReducer::reduce(
            loaded(),
            CommentsIntent::Post(Outcome::Fulfilled(CommentPosted {
                total_count: 7,
                comment: None,
            })),
        );
        assert_eq!(state.total_comments, 7);
        assert_eq!(state.comments.len(), 2);
    }

    #[test]
    fn rejected_post_keeps_comments() {
        let state = CommentsReducer::reduce(
            loaded(),
            CommentsIntent::Post(Outcome::Rejected("Please provide comment".to_string())),
        );
        assert_eq!(state.status.error_message(), Some("Please provide comment"));
        assert_eq!(state.comments.len(), 2);
        assert_eq!(state.total_comments, 2);
    }

    #[test]
    fn projects_reload_resets() {
        let state = loaded().on_event(&StoreEvent::ProjectsReloaded);
        assert_eq!(state, CommentsState::default());
    }

    #[test]
    fn other_events_are_ignored() {
        let state = loaded().on_event(&StoreEvent::SessionCleared);
        assert_eq!(state.comments.len(), 2);
    }
}
