//! Domain models for content-service.

mod content;

pub use content::{Content, ContentCreated, ContentDeleted, ContentSummary, ContentUpdated};
