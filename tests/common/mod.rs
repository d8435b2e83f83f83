//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use civictrack::config::{ApiConfig, Config, UploadConfig};
use civictrack::dispatch::Dispatcher;
use serde_json::{json, Value};
use std::net::TcpListener;

use mock_backend::MockBackend;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Config pointing both the API and the image host at `mock`.
pub fn config_for(mock: &MockBackend) -> Config {
    Config {
        api: ApiConfig {
            base_url: mock.api_url(),
            ..ApiConfig::default()
        },
        upload: UploadConfig {
            upload_url: Some(format!("{}/image/upload", mock.base_url())),
            destroy_url: Some(format!("{}/image/destroy", mock.base_url())),
            upload_preset: "civictrack".to_string(),
        },
    }
}

pub fn dispatcher_for(mock: &MockBackend) -> Dispatcher {
    Dispatcher::new(&config_for(mock)).expect("dispatcher")
}

/// A project record as the backend sends it.
pub fn project(id: i64, status: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Project {}", id),
        "description": "",
        "status": status,
        "createdAt": created_at,
        "budget": 1000 * id,
    })
}

/// `GET /projects` body with `count` projects, `planned` of them planned.
pub fn project_list(count: i64, planned: i64) -> Value {
    let projects: Vec<Value> = (1..=count)
        .map(|id| {
            let status = if id <= planned { "planned" } else { "ongoing" };
            project(id, status, &format!("2024-01-{:02}T00:00:00Z", id))
        })
        .collect();
    json!({ "projects": projects, "totalCount": count })
}

/// Signed-in resident with a bearer token.
pub fn login_body(token: &str) -> Value {
    json!({
        "user": {
            "id": 7,
            "username": "juan",
            "role": "resident",
            "accessToken": token,
        }
    })
}
