// Document endpoints.
//
// Routes:
//   GET    /api/documents                          — list every document
//   POST   /api/documents                          — create
//   GET    /api/documents/workspace/{workspace_id}  — list active documents of a workspace
//   GET    /api/documents/{id}                     — get single
//   PATCH  /api/documents/{id}                     — partial update
//   DELETE /api/documents/{id}                     — soft delete

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use insightflow_common::types::{Document, DocumentPatch, NewDocument};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::{ErrorCode, ServiceError},
    store::{DocumentStore, StoreError},
    validation::{check_title_length, ValidatedJson},
};

// ── Request / Response types ───────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub workspace_id: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_by_user_id: String,
}

impl From<CreateDocumentRequest> for NewDocument {
    fn from(request: CreateDocumentRequest) -> Self {
        Self {
            workspace_id: request.workspace_id,
            title: request.title,
            icon: request.icon,
            content: request.content,
            created_by_user_id: request.created_by_user_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub content: Option<String>,
}

impl From<UpdateDocumentRequest> for DocumentPatch {
    fn from(request: UpdateDocumentRequest) -> Self {
        Self { title: request.title, icon: request.icon, content: request.content }
    }
}

/// Wire shape of a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: String,
    pub workspace_id: String,
    pub title: String,
    pub icon: String,
    pub content: String,
    pub created_by_user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Document> for DocumentView {
    fn from(document: Document) -> Self {
        let is_active = document.is_active();
        let deleted_at = document.deleted_at();
        Self {
            id: document.id,
            workspace_id: document.workspace_id,
            title: document.title,
            icon: document.icon,
            content: document.content,
            created_by_user_id: document.created_by_user_id,
            created_at: document.created_at,
            updated_at: document.updated_at,
            is_active,
            deleted_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedEnvelope {
    pub message: String,
    pub id: String,
}

// ── Error ──────────────────────────────────────────────────────────

#[derive(Debug)]
enum DocApiError {
    BadRequest { message: String },
    NotFound,
}

impl DocApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }
}

impl From<StoreError> for DocApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(message) => Self::bad_request(message),
        }
    }
}

impl IntoResponse for DocApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message } => {
                warn!(%message, "document request rejected");
                ServiceError::new(ErrorCode::ValidationFailed, message).into_response()
            }
            Self::NotFound => {
                ServiceError::new(ErrorCode::NotFound, "Document not found").into_response()
            }
        }
    }
}

// ── Router ─────────────────────────────────────────────────────────

pub fn router(store: DocumentStore) -> Router {
    Router::new()
        .route("/api/documents", get(list_all_documents).post(create_document))
        .route("/api/documents/workspace/{workspace_id}", get(list_workspace_documents))
        .route(
            "/api/documents/{id}",
            get(get_document).patch(update_document).delete(delete_document),
        )
        .with_state(store)
}

// ── Handlers ───────────────────────────────────────────────────────

async fn create_document(
    State(store): State<DocumentStore>,
    ValidatedJson(payload): ValidatedJson<CreateDocumentRequest>,
) -> Result<impl IntoResponse, DocApiError> {
    check_title_length(&payload.title).map_err(DocApiError::bad_request)?;

    let document = store.create(payload.into())?;
    info!(
        document_id = %document.id,
        workspace_id = %document.workspace_id,
        "document created"
    );

    let location = format!("/api/documents/{}", document.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(DocumentView::from(document))))
}

async fn list_all_documents(State(store): State<DocumentStore>) -> Json<Vec<DocumentView>> {
    Json(store.list_all().into_iter().map(DocumentView::from).collect())
}

async fn list_workspace_documents(
    State(store): State<DocumentStore>,
    Path(workspace_id): Path<String>,
) -> Json<Vec<DocumentView>> {
    Json(store.list_by_workspace(&workspace_id).into_iter().map(DocumentView::from).collect())
}

async fn get_document(
    State(store): State<DocumentStore>,
    Path(id): Path<String>,
) -> Result<Json<DocumentView>, DocApiError> {
    let document = store.get(&id).ok_or(DocApiError::NotFound)?;
    Ok(Json(document.into()))
}

async fn update_document(
    State(store): State<DocumentStore>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateDocumentRequest>,
) -> Result<Json<DocumentView>, DocApiError> {
    let document = store.update(&id, payload.into())?.ok_or(DocApiError::NotFound)?;
    info!(document_id = %document.id, "document updated");

    Ok(Json(document.into()))
}

async fn delete_document(
    State(store): State<DocumentStore>,
    Path(id): Path<String>,
) -> Result<Json<DeletedEnvelope>, DocApiError> {
    if !store.delete(&id) {
        return Err(DocApiError::NotFound);
    }
    info!(document_id = %id, "document deleted");

    Ok(Json(DeletedEnvelope { message: "Document deleted successfully".to_owned(), id }))
}

// ── Tests ──────────────────────────────────────────────────────────
