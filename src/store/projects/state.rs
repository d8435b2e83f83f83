use crate::model::{Project, UploadedImage};
use crate::mvi::StoreState;
use crate::store::{FetchStatus, FilterCriteria};

use super::derive::StatusCounts;

/// Initial project filters; `sort` defaults to newest first.
pub const DEFAULT_FILTERS: &[(&str, &str)] = &[
    ("search", ""),
    ("tags", ""),
    ("barangays", ""),
    ("status", ""),
    ("sort", "newest"),
    ("budgetRange", ""),
    ("progressRange", ""),
    ("viewsRange", ""),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsState {
    pub status: FetchStatus,
    /// Server-reported total, which may exceed `projects.len()` when paged.
    pub total_projects: u64,
    /// Newest first.
    pub projects: Vec<Project>,
    pub single_project: Option<Project>,
    pub counts: StatusCounts,
    pub featured_projects: Vec<Project>,
    pub upcoming_projects: Vec<Project>,
    pub feedback_summaries: Vec<Project>,
    /// Images uploaded for the project form being edited.
    pub uploaded_images: Vec<UploadedImage>,
    pub edit_mode_project_update: bool,
    pub add_mode_project_update: bool,
    pub filters: FilterCriteria,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            status: FetchStatus::default(),
            total_projects: 0,
            projects: Vec::new(),
            single_project: None,
            counts: StatusCounts::default(),
            featured_projects: Vec::new(),
            upcoming_projects: Vec::new(),
            feedback_summaries: Vec::new(),
            uploaded_images: Vec::new(),
            edit_mode_project_update: false,
            add_mode_project_update: false,
            filters: FilterCriteria::with_defaults(DEFAULT_FILTERS),
        }
    }
}

impl StoreState for ProjectsState {}
