// Core domain types shared by the documents service and its clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Soft-delete state of a document.
///
/// A deleted document always carries its deletion time; there is no way
/// back to `Active`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Lifecycle {
    Active,
    Deleted { at: DateTime<Utc> },
}

/// A document record belonging to a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub workspace_id: String,
    pub title: String,
    /// May be empty.
    pub icon: String,
    /// Canonical compact JSON text.
    pub content: String,
    pub created_by_user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lifecycle: Lifecycle,
}

impl Document {
    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Active)
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self.lifecycle {
            Lifecycle::Active => None,
            Lifecycle::Deleted { at } => Some(at),
        }
    }
}

/// Caller-supplied fields for creating a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDocument {
    pub workspace_id: String,
    pub title: String,
    pub icon: String,
    /// `None` or blank selects the empty document content.
    pub content: Option<String>,
    pub created_by_user_id: String,
}

/// Partial update of a document's mutable fields.
///
/// A field that is `None` or blank leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub content: Option<String>,
}

impl DocumentPatch {
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    pub fn icon(&self) -> Option<&str> {
        non_blank(self.icon.as_deref())
    }

    pub fn content(&self) -> Option<&str> {
        non_blank(self.content.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lifecycle: Lifecycle) -> Document {
        let now = Utc::now();
        Document {
            id: "doc-1".into(),
            workspace_id: "ws-1".into(),
            title: "Notes".into(),
            icon: String::new(),
            content: "{}".into(),
            created_by_user_id: "user-1".into(),
            created_at: now,
            updated_at: now,
            lifecycle,
        }
    }

    #[test]
    fn active_document_has_no_deletion_time() {
        let doc = sample(Lifecycle::Active);
        assert!(doc.is_active());
        assert_eq!(doc.deleted_at(), None);
    }

    #[test]
    fn deleted_document_reports_deletion_time() {
        let at = Utc::now();
        let doc = sample(Lifecycle::Deleted { at });
        assert!(!doc.is_active());
        assert_eq!(doc.deleted_at(), Some(at));
    }

    #[test]
    fn patch_treats_blank_fields_as_absent() {
        let patch = DocumentPatch {
            title: Some("  ".into()),
            icon: Some(String::new()),
            content: Some("[]".into()),
        };
        assert_eq!(patch.title(), None);
        assert_eq!(patch.icon(), None);
        assert_eq!(patch.content(), Some("[]"));
    }

    #[test]
    fn lifecycle_serializes_with_state_tag() {
        let json = serde_json::to_value(Lifecycle::Active).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "active" }));
    }
}
