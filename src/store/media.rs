//! Image uploads to the third-party host.

use crate::model::UploadedImage;
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaState {
    pub status: FetchStatus,
    /// Result of the last successful batch, minus destroyed images.
    pub images: Vec<UploadedImage>,
}

impl StoreState for MediaState {}

#[derive(Debug, Clone)]
pub enum MediaIntent {
    /// A whole batch; any failure rejects it and nothing is recorded.
    Upload(Outcome<Vec<UploadedImage>>),
    /// Carries the destroyed image's public id.
    Destroy(Outcome<String>),
    Clear,
}

impl Intent for MediaIntent {}

pub struct MediaReducer;

impl Reducer for MediaReducer {
    type State = MediaState;
    type Intent = MediaIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MediaIntent::Upload(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(images) = outcome {
                    state.images = images;
                }
            }
            MediaIntent::Destroy(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(public_id) = outcome {
                    state.images.retain(|img| img.public_id != public_id);
                }
            }
            MediaIntent::Clear => state.images.clear(),
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> UploadedImage {
        UploadedImage {
            public_id: id.to_string(),
            secure_url: format!("https://img.example/{}.jpg", id),
        }
    }

    #[test]
    fn failed_batch_records_nothing() {
        let state = MediaReducer::reduce(
            MediaState::default(),
            MediaIntent::Upload(Outcome::Fulfilled(vec![image("a")])),
        );
        let state = MediaReducer::reduce(
            state,
            MediaIntent::Upload(Outcome::Rejected("Invalid image file".to_string())),
        );
        assert_eq!(state.images, vec![image("a")]);
        assert!(state.status.is_error());
    }

    #[test]
    fn destroy_removes_by_public_id() {
        let state = MediaReducer::reduce(
            MediaState::default(),
            MediaIntent::Upload(Outcome::Fulfilled(vec![image("a"), image("b")])),
        );
        let state = MediaReducer::reduce(
            state,
            MediaIntent::Destroy(Outcome::Fulfilled("a".to_string())),
        );
        assert_eq!(state.images, vec![image("b")]);
    }
}
