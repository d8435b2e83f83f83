use serde::{Deserialize, Serialize};

/// An image stored on the third-party host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub public_id: String,
    pub secure_url: String,
}
