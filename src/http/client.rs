use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::http::auth::AuthHeader;
use crate::http::error::{normalize_error_body, ApiError};
use crate::http::routes::Route;

/// Side effect run when the backend answers 401.
///
/// Invoked before the error reaches the dispatcher, so by the time a store
/// records the rejection the session is already gone.
pub trait UnauthorizedHook: Send + Sync {
    fn on_unauthorized(&self);
}

/// REST client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    on_unauthorized: Option<Arc<dyn UnauthorizedHook>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone());
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| ApiError::Network {
            detail: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            on_unauthorized: None,
        })
    }

    /// Register the session-invalidation side effect for 401 responses.
    pub fn with_unauthorized_hook(mut self, hook: Arc<dyn UnauthorizedHook>) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a route plus query pairs. Each route segment is
    /// percent-encoded on its own.
    pub fn url(&self, route: &Route, query: &[(String, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ApiError::InvalidRequest(format!("bad base URL '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(route.segments());
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        route: &Route,
        auth: &AuthHeader,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(route, query)?;
        self.send(self.request(Method::GET, url, auth)).await
    }

    pub async fn post<B, T>(
        &self,
        route: &Route,
        auth: &AuthHeader,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(route, &[])?;
        self.send(self.request(Method::POST, url, auth).json(body)).await
    }

    pub async fn patch<B, T>(
        &self,
        route: &Route,
        auth: &AuthHeader,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(route, &[])?;
        self.send(self.request(Method::PATCH, url, auth).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        route: &Route,
        auth: &AuthHeader,
    ) -> Result<T, ApiError> {
        let url = self.url(route, &[])?;
        self.send(self.request(Method::DELETE, url, auth)).await
    }

    fn request(&self, method: Method, url: Url, auth: &AuthHeader) -> RequestBuilder {
        tracing::debug!(%method, %url, "API request");
        self.client
            .request(method, url)
            .header(AUTHORIZATION, auth.header_value())
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "API request failed before a response");
            ApiError::Network {
                detail: e.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Network {
            detail: format!("failed to read response body: {}", e),
        })?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Backend returned 401, invalidating session");
            if let Some(hook) = &self.on_unauthorized {
                hook.on_unauthorized();
            }
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = normalize_error_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), %message, "API error response");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        decode_body(&body)
    }
}

/// Decode a success body. An empty body decodes as `{}` so that
/// delete/edit endpoints answering 204 still satisfy all-default payloads.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Response body did not match the expected shape");
        ApiError::Decode {
            detail: e.to_string(),
        }
    })
}
