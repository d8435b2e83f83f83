//! Views computed from a fetched project list.
//!
//! Sampling never reorders the source list: featured projects and feedback
//! summaries are two independent draws over the same untouched slice.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Project, ProjectStatus};

/// Cap on every derived list.
pub const VIEW_LIMIT: usize = 3;

/// Per-status tallies. Projects with an unknown status are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub completed: usize,
    pub ongoing: usize,
    pub planned: usize,
    pub cancelled: usize,
    pub on_hold: usize,
}

impl StatusCounts {
    pub fn tally(projects: &[Project]) -> Self {
        let mut counts = Self::default();
        for status in projects.iter().filter_map(Project::status) {
            match status {
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::Ongoing => counts.ongoing += 1,
                ProjectStatus::Planned => counts.planned += 1,
                ProjectStatus::Cancelled => counts.cancelled += 1,
                ProjectStatus::OnHold => counts.on_hold += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.completed + self.ongoing + self.planned + self.cancelled + self.on_hold
    }

    pub fn get(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Completed => self.completed,
            ProjectStatus::Ongoing => self.ongoing,
            ProjectStatus::Planned => self.planned,
            ProjectStatus::Cancelled => self.cancelled,
            ProjectStatus::OnHold => self.on_hold,
        }
    }
}

/// Everything the dashboard shows besides the list itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedViews {
    pub counts: StatusCounts,
    pub featured: Vec<Project>,
    pub upcoming: Vec<Project>,
    pub feedback: Vec<Project>,
}

impl DerivedViews {
    pub fn derive<R: Rng + ?Sized>(projects: &[Project], rng: &mut R) -> Self {
        Self {
            counts: StatusCounts::tally(projects),
            featured: sample(projects, rng),
            upcoming: upcoming(projects),
            feedback: sample(projects, rng),
        }
    }
}

/// Uniform draw of up to [`VIEW_LIMIT`] projects without replacement.
pub fn sample<R: Rng + ?Sized>(projects: &[Project], rng: &mut R) -> Vec<Project> {
    projects
        .choose_multiple(rng, VIEW_LIMIT)
        .cloned()
        .collect()
}

/// First [`VIEW_LIMIT`] planned projects, in list order.
pub fn upcoming(projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.status() == Some(ProjectStatus::Planned))
        .take(VIEW_LIMIT)
        .cloned()
        .collect()
}
