//! In-memory gateways and request helpers for driving the router.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use exercises_catalog::Catalog;
use exercises_core::models::exercise::{ExerciseRecord, SignedUrl};
use exercises_lambda::app;
use exercises_lambda::state::AppState;
use exercises_storage::error::StorageError;
use exercises_storage::objects::UrlSigner;
use exercises_storage::records::RecordStore;
use jiff::{SignedDuration, Timestamp};
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStore {
    pub records: Vec<ExerciseRecord>,
    pub unavailable: bool,
}

impl RecordStore for MemoryStore {
    async fn list_all(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<ExerciseRecord>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Scan("connection refused".to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter(|r| difficulty.is_none_or(|d| r.difficulty_level == d))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ExerciseRecord>, StorageError> {
        if self.unavailable {
            return Err(StorageError::GetItem("connection refused".to_string()));
        }
        Ok(self.records.iter().find(|r| r.exercise_id == id).cloned())
    }
}

pub struct FakeSigner {
    pub panic_on: Option<&'static str>,
}

impl UrlSigner for FakeSigner {
    async fn sign(&self, key: &str) -> Result<SignedUrl, StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::EmptyKey);
        }
        if self.panic_on == Some(key) {
            panic!("signer exploded on {key}");
        }
        Ok(SignedUrl {
            url: format!("https://signed.example/{key}"),
            expires_at: Timestamp::now() + SignedDuration::from_secs(3600),
        })
    }
}

pub fn record(id: &str, difficulty: &str) -> ExerciseRecord {
    ExerciseRecord {
        exercise_id: id.to_string(),
        name: format!("Exercise {id}"),
        description: format!("Description of {id}"),
        difficulty_level: difficulty.to_string(),
        image_key: Some(format!("images/{id}.jpg")),
        ..Default::default()
    }
}

pub fn router_with(records: Vec<ExerciseRecord>) -> Router {
    let store = MemoryStore {
        records,
        unavailable: false,
    };
    build(store, FakeSigner { panic_on: None })
}

pub fn unavailable_router() -> Router {
    let store = MemoryStore {
        records: Vec::new(),
        unavailable: true,
    };
    build(store, FakeSigner { panic_on: None })
}

pub fn build(store: MemoryStore, signer: FakeSigner) -> Router {
    app::router(AppState::new(Catalog::new(store, signer)))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-request-id", "req-test")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn assert_fixed_headers(headers: &HeaderMap) {
    let expected = [
        ("content-type", "application/json"),
        ("access-control-allow-origin", "*"),
        ("access-control-allow-methods", "GET, OPTIONS"),
        ("access-control-allow-headers", "Content-Type"),
    ];
    for (name, value) in expected {
        assert_eq!(
            headers.get(name).and_then(|v| v.to_str().ok()),
            Some(value),
            "header {name}"
        );
    }
}
