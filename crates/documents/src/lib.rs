// insightflow-documents: in-memory workspace document store and its HTTP API

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod store;
pub mod validation;
