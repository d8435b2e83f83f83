//! Reducer for the projects store.

use rand::Rng;

use crate::model::ProjectList;
use crate::mvi::Reducer;
use crate::store::{FilterCriteria, Outcome};
use crate::util::sort_newest_first;

use super::derive::DerivedViews;
use super::intent::ProjectsIntent;
use super::state::{ProjectsState, DEFAULT_FILTERS};

/// Reducer for project state transitions.
///
/// Pure apart from the random draw behind featured projects and feedback
/// summaries; [`ProjectsReducer::apply_list`] takes the RNG explicitly.
pub struct ProjectsReducer;

impl Reducer for ProjectsReducer {
    type State = ProjectsState;
    type Intent = ProjectsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProjectsIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state = Self::apply_list(state, list, &mut rand::thread_rng());
                }
            }
            ProjectsIntent::GetOne(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(detail) = outcome {
                    state.single_project = detail.project;
                }
            }
            ProjectsIntent::Create(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(ProjectList {
                    projects: Some(mut projects),
                    total_count,
                }) = outcome
                {
                    sort_newest_first(&mut projects);
                    state.projects = projects;
                    state.total_projects = total_count;
                }
            }
            ProjectsIntent::Edit(outcome) | ProjectsIntent::Delete(outcome) => {
                state.status = outcome.status();
            }

            ProjectsIntent::ResetSingleProject => state.single_project = None,
            ProjectsIntent::ToggleEditModeUpdate => {
                state.edit_mode_project_update = !state.edit_mode_project_update;
            }
            ProjectsIntent::SetEditModeUpdate(on) => state.edit_mode_project_update = on,
            ProjectsIntent::ToggleAddModeUpdate => {
                state.add_mode_project_update = !state.add_mode_project_update;
            }
            ProjectsIntent::SetAddModeUpdate(on) => state.add_mode_project_update = on,
            ProjectsIntent::SetUploadedImages(images) => state.uploaded_images = images,
            ProjectsIntent::ClearUploadedImages => state.uploaded_images.clear(),
            ProjectsIntent::SetFilter { key, value } => state.filters.set(key, value),
            ProjectsIntent::ResetFilters => {
                state.filters = FilterCriteria::with_defaults(DEFAULT_FILTERS);
            }
            ProjectsIntent::ClearStore => state = ProjectsState::default(),
        }
        state
    }
}

impl ProjectsReducer {
    /// Replace the list from a successful full fetch and recompute every
    /// derived view. A body without `projects` counts as an empty list.
    pub fn apply_list<R: Rng + ?Sized>(
        mut state: ProjectsState,
        list: ProjectList,
        rng: &mut R,
    ) -> ProjectsState {
        state.total_projects = match list.projects {
            Some(_) => list.total_count,
            None => 0,
        };
        let server_order = list.projects.unwrap_or_default();
        let views = DerivedViews::derive(&server_order, rng);

        state.single_project = None;
        state.counts = views.counts;
        state.featured_projects = views.featured;
        state.upcoming_projects = views.upcoming;
        state.feedback_summaries = views.feedback;

        let mut projects = server_order;
        sort_newest_first(&mut projects);
        state.projects = projects;
        state
    }
}
