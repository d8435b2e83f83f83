//! Client for the third-party image host.
//!
//! Uploads are multipart posts carrying an unsigned preset; cleanup is a
//! destroy-by-public-id call. Neither endpoint sees the session token.

use futures_util::future::try_join_all;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::UploadConfig;
use crate::http::{normalize_error_body, ApiError};
use crate::model::UploadedImage;

/// One file picked for upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// e.g. "image/jpeg"; left to the host to sniff when absent.
    pub mime: Option<String>,
}

#[derive(Clone)]
pub struct ImageHostClient {
    client: Client,
    config: UploadConfig,
}

impl ImageHostClient {
    pub fn new(config: &UploadConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build().map_err(|e| ApiError::Network {
            detail: format!("failed to build upload client: {}", e),
        })?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub async fn upload(&self, file: ImageFile) -> Result<UploadedImage, ApiError> {
        let url = self.config.upload_url.as_deref().ok_or_else(|| ApiError::Upload {
            message: "image upload endpoint is not configured".to_string(),
        })?;

        let name = file.file_name.clone();
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = &file.mime {
            part = part.mime_str(mime).map_err(|e| ApiError::Upload {
                message: format!("bad content type '{}': {}", mime, e),
            })?;
        }
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone());

        tracing::debug!(file = %name, "Uploading image");
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Network {
            detail: e.to_string(),
        })?;
        if !status.is_success() {
            return Err(ApiError::Upload {
                message: normalize_error_body(status.as_u16(), &body),
            });
        }

        crate::http::decode_body(&body)
    }

    /// Upload every file concurrently.
    ///
    /// All or nothing: the first failure rejects the batch and the images
    /// that did make it are not reported back.
    pub async fn upload_all(&self, files: Vec<ImageFile>) -> Result<Vec<UploadedImage>, ApiError> {
        try_join_all(files.into_iter().map(|file| self.upload(file))).await
    }

    /// Remove an image from the host. Returns the id on success.
    pub async fn destroy(&self, public_id: &str) -> Result<String, ApiError> {
        let url = self.config.destroy_url.as_deref().ok_or_else(|| ApiError::Upload {
            message: "image destroy endpoint is not configured".to_string(),
        })?;

        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "public_id": public_id }))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.map_err(|e| ApiError::Network {
                detail: format!("failed to read destroy response body: {}", e),
            })?;
            return Err(ApiError::Upload {
                message: normalize_error_body(status.as_u16(), &body),
            });
        }

        Ok(public_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_host_rejects_upload() {
        let client = ImageHostClient::new(&UploadConfig::default()).unwrap();
        let result = client
            .upload(ImageFile {
                file_name: "site.jpg".to_string(),
                bytes: vec![0xff, 0xd8],
                mime: Some("image/jpeg".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ApiError::Upload { .. })));
    }

    /// Serves one 500 whose body is cut short of its declared length.
    fn truncated_error_server() -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 64\r\n\r\n{\"msg\":",
            );
        });
        format!("http://{}/destroy", addr)
    }

    #[tokio::test]
    async fn unreadable_destroy_error_body_is_network_error() {
        let client = ImageHostClient::new(&UploadConfig {
            destroy_url: Some(truncated_error_server()),
            ..UploadConfig::default()
        })
        .unwrap();

        let result = client.destroy("a").await;
        assert!(
            matches!(result, Err(ApiError::Network { .. })),
            "got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn empty_batch_is_empty() {
        let client = ImageHostClient::new(&UploadConfig::default()).unwrap();
        assert!(client.upload_all(Vec::new()).await.unwrap().is_empty());
    }
}
