// Sample documents loaded into a fresh store for demos and local development.

use chrono::{DateTime, Duration, Utc};
use insightflow_common::{
    content::empty_document_content,
    types::{Document, Lifecycle},
};
use uuid::Uuid;

const WORKSPACE_1: &str = "workspace-example-1";
const WORKSPACE_2: &str = "workspace-example-2";
const USER_1: &str = "user-example-1";
const USER_2: &str = "user-example-2";

struct Sample {
    workspace_id: &'static str,
    title: &'static str,
    icon: &'static str,
    content: Option<&'static str>,
    created_by: &'static str,
    created_days_ago: i64,
    updated_days_ago: i64,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        workspace_id: WORKSPACE_1,
        title: "Welcome Document",
        icon: "👋",
        content: None,
        created_by: USER_1,
        created_days_ago: 10,
        updated_days_ago: 10,
    },
    Sample {
        workspace_id: WORKSPACE_1,
        title: "Meeting Notes",
        icon: "📝",
        content: Some(r#"{"blocks":[{"type":"paragraph","content":"Notes from the team meeting"}]}"#),
        created_by: USER_1,
        created_days_ago: 5,
        updated_days_ago: 2,
    },
    Sample {
        workspace_id: WORKSPACE_1,
        title: "Project Ideas",
        icon: "💡",
        content: Some(
            r#"{"blocks":[{"type":"heading","content":"Brainstorming"},{"type":"paragraph","content":"List of ideas..."}]}"#,
        ),
        created_by: USER_2,
        created_days_ago: 3,
        updated_days_ago: 1,
    },
    Sample {
        workspace_id: WORKSPACE_2,
        title: "Technical Documentation",
        icon: "📚",
        content: None,
        created_by: USER_1,
        created_days_ago: 7,
        updated_days_ago: 7,
    },
    Sample {
        workspace_id: WORKSPACE_2,
        title: "Marketing Plan",
        icon: "📊",
        content: Some(
            r#"{"blocks":[{"type":"heading","content":"Q1 Strategy"},{"type":"paragraph","content":"Goals and metrics..."}]}"#,
        ),
        created_by: USER_2,
        created_days_ago: 4,
        updated_days_ago: 0,
    },
];

/// Sample records with timestamps backdated from `now`.
pub(super) fn sample_documents(now: DateTime<Utc>) -> Vec<Document> {
    SAMPLES
        .iter()
        .map(|sample| Document {
            id: Uuid::new_v4().to_string(),
            workspace_id: sample.workspace_id.to_owned(),
            title: sample.title.to_owned(),
            icon: sample.icon.to_owned(),
            content: sample.content.map_or_else(empty_document_content, ToOwned::to_owned),
            created_by_user_id: sample.created_by.to_owned(),
            created_at: now - Duration::days(sample.created_days_ago),
            updated_at: now - Duration::days(sample.updated_days_ago),
            lifecycle: Lifecycle::Active,
        })
        .collect()
}
