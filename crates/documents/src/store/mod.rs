// In-memory document store.
//
// One collection guarded by one mutex. Every operation holds the lock for
// its whole duration and never awaits while holding it, so operations are
// linearizable. Records are never removed: delete flips the lifecycle to
// `Deleted`. Nothing survives a process restart.

mod seed;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use insightflow_common::{
    content::{canonicalize, empty_document_content, is_valid_json},
    types::{Document, DocumentPatch, Lifecycle, NewDocument},
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Caller input broke a required-field or content rule. Nothing was written.
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    fn validation(message: &str) -> Self {
        Self::Validation(message.to_owned())
    }
}

/// Shared handle to the document collection. Clones share the same data.
#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    /// Insertion order; sorts over it are stable.
    documents: Vec<Document>,
    last_stamp: Option<DateTime<Utc>>,
    seeded: bool,
}

impl StoreState {
    /// Current time, forced strictly past the previous stamp so successive
    /// mutations never share or reverse an `updated_at`.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn find_active_mut(&mut self, id: &str) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id && d.is_active())
    }
}

impl DocumentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the sample documents.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.seed_if_empty();
        store
    }

    /// Insert the sample documents if the collection is empty and has never
    /// been seeded. Returns `true` if this call inserted them.
    pub fn seed_if_empty(&self) -> bool {
        let mut state = self.lock();
        if state.seeded || !state.documents.is_empty() {
            return false;
        }
        let now = state.stamp();
        state.documents.extend(seed::sample_documents(now));
        state.seeded = true;
        true
    }

    pub fn create(&self, input: NewDocument) -> Result<Document, StoreError> {
        if input.workspace_id.trim().is_empty() {
            return Err(StoreError::validation("Workspace ID is required"));
        }
        if input.title.trim().is_empty() {
            return Err(StoreError::validation("Title is required"));
        }
        if input.created_by_user_id.trim().is_empty() {
            return Err(StoreError::validation("Created by user ID is required"));
        }

        let content = match input.content.as_deref() {
            None => empty_document_content(),
            Some(text) if text.trim().is_empty() => empty_document_content(),
            Some(text) if !is_valid_json(text) => {
                return Err(StoreError::validation("Invalid JSON content"));
            }
            Some(text) => canonicalize(text),
        };

        let mut state = self.lock();
        let now = state.stamp();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            workspace_id: input.workspace_id,
            title: input.title,
            icon: input.icon,
            content,
            created_by_user_id: input.created_by_user_id,
            created_at: now,
            updated_at: now,
            lifecycle: Lifecycle::Active,
        };
        state.documents.push(document.clone());

        Ok(document)
    }

    /// The active document with this id.
    pub fn get(&self, id: &str) -> Option<Document> {
        self.lock().documents.iter().find(|d| d.id == id && d.is_active()).cloned()
    }

    /// Every record, deleted ones included, most recently updated first.
    pub fn list_all(&self) -> Vec<Document> {
        let mut documents = self.lock().documents.clone();
        sort_by_recency(&mut documents);
        documents
    }

    /// Active records of one workspace, most recently updated first.
    pub fn list_by_workspace(&self, workspace_id: &str) -> Vec<Document> {
        let mut documents: Vec<Document> = self
            .lock()
            .documents
            .iter()
            .filter(|d| d.workspace_id == workspace_id && d.is_active())
            .cloned()
            .collect();
        sort_by_recency(&mut documents);
        documents
    }

    /// Apply the non-blank fields of `patch` to an active document.
    ///
    /// Returns `Ok(None)` if there is no active document with this id.
    /// Content is validated before any field is touched, so a rejected
    /// patch leaves the record as it was.
    pub fn update(&self, id: &str, patch: DocumentPatch) -> Result<Option<Document>, StoreError> {
        let mut state = self.lock();
        if state.find_active_mut(id).is_none() {
            return Ok(None);
        }

        let content = match patch.content() {
            Some(text) if !is_valid_json(text) => {
                return Err(StoreError::validation("Invalid JSON content"));
            }
            Some(text) => Some(canonicalize(text)),
            None => None,
        };

        let now = state.stamp();
        let Some(document) = state.find_active_mut(id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title() {
            document.title = title.to_owned();
        }
        if let Some(icon) = patch.icon() {
            document.icon = icon.to_owned();
        }
        if let Some(content) = content {
            document.content = content;
        }
        document.updated_at = now;

        Ok(Some(document.clone()))
    }

    /// Soft-delete an active document. Returns `false` if there was none.
    pub fn delete(&self, id: &str) -> bool {
        let mut state = self.lock();
        if state.find_active_mut(id).is_none() {
            return false;
        }

        let now = state.stamp();
        let Some(document) = state.find_active_mut(id) else {
            return false;
        };
        document.lifecycle = Lifecycle::Deleted { at: now };
        document.updated_at = now;
        true
    }

    /// Number of records, deleted ones included.
    pub fn len(&self) -> usize {
        self.lock().documents.len()
    }

    // Mutations validate before writing, so a poisoned lock never guards a
    // half-applied change.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sort_by_recency(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
