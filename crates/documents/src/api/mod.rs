pub mod documents;

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::DocumentStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub storage: String,
}

/// All HTTP routes of the service, backed by `store`.
pub fn router(store: DocumentStore) -> Router {
    Router::new().route("/health", get(health)).merge(documents::router(store))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "Healthy".to_owned(),
        service: "Documents Service".to_owned(),
        timestamp: Utc::now(),
        storage: "In-Memory".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_reports_in_memory_storage() {
        let resp = router(DocumentStore::new())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let health: HealthStatus = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "Healthy");
        assert_eq!(health.service, "Documents Service");
        assert_eq!(health.storage, "In-Memory");
    }

    #[tokio::test]
    async fn seeded_store_is_served() {
        let resp = router(DocumentStore::seeded())
            .oneshot(
                Request::builder()
                    .uri("/api/documents/workspace/workspace-example-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let docs: Vec<documents::DocumentView> = serde_json::from_slice(&bytes).unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Project Ideas", "Meeting Notes", "Welcome Document"]);
    }
}
