pub mod content;

pub use content::{
    ContentData, ContentDetailResponse, ContentListResponse, ContentSummaryData,
    CreatedContentData, DeleteContentResponse, DeletedContentData, UpdateContentResponse,
    UpdatedContentData, UploadContentRequest, UploadContentResponse,
};
