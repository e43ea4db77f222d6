use crate::models::{Content, ContentCreated, ContentDeleted, ContentSummary, ContentUpdated};
use serde::{Deserialize, Serialize};

/// Body for POST /api/upload and PUT /api/content/:id.
/// Fields are optional so that missing keys reach the handler and fail
/// validation with a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct UploadContentRequest {
    pub title: Option<String>,
    pub html: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedContentData {
    pub id: i64,
    pub title: String,
    pub created_at: String,
}

impl From<ContentCreated> for CreatedContentData {
    fn from(row: ContentCreated) -> Self {
        Self {
            id: row.id,
            title: row.title,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadContentResponse {
    pub success: bool,
    pub message: String,
    pub data: CreatedContentData,
}

#[derive(Debug, Serialize)]
pub struct ContentSummaryData {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub content_length: i32,
}

impl From<ContentSummary> for ContentSummaryData {
    fn from(row: ContentSummary) -> Self {
        Self {
            id: row.id,
            title: row.title,
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
            content_length: row.content_length,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub success: bool,
    pub data: Vec<ContentSummaryData>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ContentData {
    pub id: i64,
    pub title: String,
    pub html_content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Content> for ContentData {
    fn from(row: Content) -> Self {
        Self {
            id: row.id,
            title: row.title,
            html_content: row.html_content,
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContentDetailResponse {
    pub success: bool,
    pub data: ContentData,
}

#[derive(Debug, Serialize)]
pub struct UpdatedContentData {
    pub id: i64,
    pub title: String,
    pub updated_at: String,
}

impl From<ContentUpdated> for UpdatedContentData {
    fn from(row: ContentUpdated) -> Self {
        Self {
            id: row.id,
            title: row.title,
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateContentResponse {
    pub success: bool,
    pub message: String,
    pub data: UpdatedContentData,
}

#[derive(Debug, Serialize)]
pub struct DeletedContentData {
    pub id: i64,
    pub title: String,
}

impl From<ContentDeleted> for DeletedContentData {
    fn from(row: ContentDeleted) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteContentResponse {
    pub success: bool,
    pub message: String,
    pub data: DeletedContentData,
}
