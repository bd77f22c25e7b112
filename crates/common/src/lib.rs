// insightflow-common: document types and content helpers shared across InsightFlow crates

pub mod content;
pub mod types;
