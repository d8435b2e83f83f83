use crate::http::ApiError;
use crate::model::UploadedImage;
use crate::store::media::MediaIntent;
use crate::upload::ImageFile;

use super::{tags, Dispatcher};

impl Dispatcher {
    /// Upload a batch to the image host. One failure rejects the whole batch.
    pub async fn upload_images(&self, files: Vec<ImageFile>) -> Result<Vec<UploadedImage>, ApiError> {
        let count = files.len();
        tracing::info!(count, "uploading images");
        self.run(
            tags::UPLOAD_IMAGES,
            |o| MediaIntent::Upload(o).into(),
            self.images.upload_all(files),
        )
        .await
    }

    pub async fn destroy_image(&self, public_id: &str) -> Result<String, ApiError> {
        self.run(
            tags::DESTROY_IMAGE,
            |o| MediaIntent::Destroy(o).into(),
            self.images.destroy(public_id),
        )
        .await
    }

    pub fn clear_uploaded_images(&self) {
        self.store.dispatch(MediaIntent::Clear);
    }
}
