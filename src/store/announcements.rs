//! Announcements feed.

use crate::model::{Announcement, AnnouncementDetail, AnnouncementList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, FilterCriteria, Outcome};

pub const DEFAULT_FILTERS: &[(&str, &str)] = &[("search", ""), ("sort", "newest")];

#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementsState {
    pub status: FetchStatus,
    pub announcements: Vec<Announcement>,
    pub total_announcements: u64,
    pub single_announcement: Option<Announcement>,
    /// "Add announcement" modal.
    pub add_mode: bool,
    pub filters: FilterCriteria,
}

impl Default for AnnouncementsState {
    fn default() -> Self {
        Self {
            status: FetchStatus::default(),
            announcements: Vec::new(),
            total_announcements: 0,
            single_announcement: None,
            add_mode: false,
            filters: FilterCriteria::with_defaults(DEFAULT_FILTERS),
        }
    }
}

impl StoreState for AnnouncementsState {}

#[derive(Debug, Clone)]
pub enum AnnouncementsIntent {
    GetAll(Outcome<AnnouncementList>),
    GetOne(Outcome<AnnouncementDetail>),
    Create(Outcome<serde_json::Value>),
    Edit(Outcome<serde_json::Value>),
    Delete(Outcome<serde_json::Value>),
    ToggleAddMode,
    SetFilter { key: String, value: String },
}

impl Intent for AnnouncementsIntent {}

pub struct AnnouncementsReducer;

impl Reducer for AnnouncementsReducer {
    type State = AnnouncementsState;
    type Intent = AnnouncementsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AnnouncementsIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.announcements = list.announcements;
                    state.total_announcements = list.total_count;
                }
            }
            AnnouncementsIntent::GetOne(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(detail) = outcome {
                    state.single_announcement = detail.announcement;
                }
            }
            AnnouncementsIntent::Create(outcome)
            | AnnouncementsIntent::Edit(outcome)
            | AnnouncementsIntent::Delete(outcome) => state.status = outcome.status(),
            AnnouncementsIntent::ToggleAddMode => state.add_mode = !state.add_mode,
            AnnouncementsIntent::SetFilter { key, value } => state.filters.set(key, value),
        }
        state
    }
}
