use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// REST backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is joined onto (e.g., "https://tracker.example.gov/api/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds. Unset means the HTTP layer's default.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
    /// Sent as `User-Agent` on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Third-party image host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UploadConfig {
    /// Multipart upload endpoint.
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Destroy-by-id endpoint.
    #[serde(default)]
    pub destroy_url: Option<String>,
    /// Unsigned upload preset name.
    #[serde(default)]
    pub upload_preset: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api/v1".to_string()
}

fn default_user_agent() -> String {
    concat!("civictrack/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl UploadConfig {
    /// Both endpoints are required before uploads can be attempted.
    pub fn is_configured(&self) -> bool {
        self.upload_url.is_some() && self.destroy_url.is_some()
    }
}
