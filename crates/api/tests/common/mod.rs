#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use heritage_api::config::ServerConfig;
use heritage_api::router::build_app_router;
use heritage_api::state::AppState;
use heritage_core::error::CoreError;
use heritage_core::types::DbId;
use heritage_db::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use heritage_db::models::pillar::{CreateCulturalPillar, CulturalPillar, UpdateCulturalPillar};
use heritage_db::models::timeline_era::{CreateTimelineEra, TimelineEra, UpdateTimelineEra};
use heritage_db::seed::seed_if_empty;
use heritage_db::store::{HeritageStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        seed_on_startup: false,
    }
}

/// Build the full application router over an empty in-memory store.
///
/// The returned `Router` is cheap to clone and every clone shares the same
/// store, so a test can issue several requests against one dataset.
pub fn build_test_app() -> Router {
    build_app_with_store(Arc::new(MemoryStore::new()))
}

/// Like [`build_test_app`], with the reference dataset loaded.
pub async fn build_seeded_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    seed_if_empty(store.as_ref())
        .await
        .expect("seeding an empty store succeeds");
    build_app_with_store(store)
}

pub fn build_app_with_store(store: Arc<dyn HeritageStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PATCH, uri, body).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn pillar_body(slug: &str) -> serde_json::Value {
    serde_json::json!({
        "slug": slug,
        "title": "Indian Architecture",
        "subtitle": "Temples, Palaces & Sacred Spaces",
        "description": "Millennia of spiritual and artistic evolution.",
        "imageUrl": "https://images.example.test/architecture.jpg",
        "imageAlt": "A carved temple gateway",
        "sortOrder": 1
    })
}

pub fn era_body(slug: &str, sort_order: i32) -> serde_json::Value {
    serde_json::json!({
        "slug": slug,
        "era": "3300 BCE",
        "title": "Indus Valley Civilization",
        "period": "3300 - 1300 BCE",
        "description": "Planned cities with advanced drainage.",
        "imageUrl": "https://images.example.test/indus.jpg",
        "imageAlt": "Ruins of Mohenjo-daro",
        "sortOrder": sort_order
    })
}

pub fn gallery_body(slug: &str, category: &str, region: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "slug": slug,
        "title": format!("Item {slug}"),
        "category": category,
        "region": region,
        "description": "Short description.",
        "detailedDescription": "A much longer description.",
        "imageUrl": format!("https://images.example.test/{slug}.jpg"),
        "imageAlt": "Alt text",
        "aspectRatio": "square",
        "sortOrder": 1
    })
}

// ---------------------------------------------------------------------------
// Broken store
// ---------------------------------------------------------------------------

/// Text carried by every [`BrokenStore`] error; must never reach a client.
pub const STORAGE_FAILURE: &str = "connection refused: db.internal:5432";

/// How a [`BrokenStore`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// Every call returns `CoreError::Internal`.
    Error,
    /// Every call panics.
    Panic,
}

/// Store whose every operation fails the same way.
pub struct BrokenStore(pub Failure);

impl BrokenStore {
    fn fail<T>(&self) -> Result<T, CoreError> {
        match self.0 {
            Failure::Error => Err(CoreError::Internal(STORAGE_FAILURE.to_string())),
            Failure::Panic => panic!("{STORAGE_FAILURE}"),
        }
    }
}

#[async_trait]
impl HeritageStore for BrokenStore {
    async fn ping(&self) -> Result<(), CoreError> {
        self.fail()
    }

    async fn list_pillars(&self) -> Result<Vec<CulturalPillar>, CoreError> {
        self.fail()
    }

    async fn pillar_by_slug(&self, _slug: &str) -> Result<Option<CulturalPillar>, CoreError> {
        self.fail()
    }

    async fn create_pillar(
        &self,
        _input: &CreateCulturalPillar,
    ) -> Result<CulturalPillar, CoreError> {
        self.fail()
    }

    async fn update_pillar(
        &self,
        _id: DbId,
        _input: &UpdateCulturalPillar,
    ) -> Result<Option<CulturalPillar>, CoreError> {
        self.fail()
    }

    async fn delete_pillar(&self, _id: DbId) -> Result<bool, CoreError> {
        self.fail()
    }

    async fn list_timeline_eras(&self) -> Result<Vec<TimelineEra>, CoreError> {
        self.fail()
    }

    async fn timeline_era_by_slug(&self, _slug: &str) -> Result<Option<TimelineEra>, CoreError> {
        self.fail()
    }

    async fn create_timeline_era(
        &self,
        _input: &CreateTimelineEra,
    ) -> Result<TimelineEra, CoreError> {
        self.fail()
    }

    async fn update_timeline_era(
        &self,
        _id: DbId,
        _input: &UpdateTimelineEra,
    ) -> Result<Option<TimelineEra>, CoreError> {
        self.fail()
    }

    async fn delete_timeline_era(&self, _id: DbId) -> Result<bool, CoreError> {
        self.fail()
    }

    async fn list_gallery_items(&self) -> Result<Vec<GalleryItem>, CoreError> {
        self.fail()
    }

    async fn gallery_item_by_slug(&self, _slug: &str) -> Result<Option<GalleryItem>, CoreError> {
        self.fail()
    }

    async fn gallery_items_by_category(
        &self,
        _category: &str,
    ) -> Result<Vec<GalleryItem>, CoreError> {
        self.fail()
    }

    async fn gallery_items_by_region(&self, _region: &str) -> Result<Vec<GalleryItem>, CoreError> {
        self.fail()
    }

    async fn search_gallery_items(&self, _query: &str) -> Result<Vec<GalleryItem>, CoreError> {
        self.fail()
    }

    async fn create_gallery_item(
        &self,
        _input: &CreateGalleryItem,
    ) -> Result<GalleryItem, CoreError> {
        self.fail()
    }

    async fn update_gallery_item(
        &self,
        _id: DbId,
        _input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, CoreError> {
        self.fail()
    }

    async fn delete_gallery_item(&self, _id: DbId) -> Result<bool, CoreError> {
        self.fail()
    }
}

/// Full router over a [`BrokenStore`].
pub fn build_broken_app(failure: Failure) -> Router {
    build_app_with_store(Arc::new(BrokenStore(failure)))
}
