use crate::dtos::{
    ContentDetailResponse, ContentListResponse, ContentSummaryData, DeleteContentResponse,
    UpdateContentResponse, UploadContentRequest, UploadContentResponse,
};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// Unwrap the JSON body, mapping malformed input to a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(body) = payload
        .map_err(|e| AppError::ValidationError(anyhow::anyhow!("Invalid JSON body: {}", e)))?;
    Ok(body)
}

/// Both fields must be present and non-empty after trimming.
fn validated_fields(payload: UploadContentRequest) -> Result<(String, String), AppError> {
    let title = payload.title.as_deref().map(str::trim).unwrap_or("");
    let html = payload.html.as_deref().map(str::trim).unwrap_or("");

    if title.is_empty() || html.is_empty() {
        return Err(AppError::ValidationError(anyhow::anyhow!(
            "Title and HTML content are required"
        )));
    }

    Ok((title.to_string(), html.to_string()))
}

fn parse_content_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::ValidationError(anyhow::anyhow!("Invalid content ID")))
}

pub async fn upload_content(
    State(state): State<AppState>,
    payload: Result<Json<UploadContentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (title, html) = validated_fields(json_body(payload)?)?;

    let created = state.db.insert_content(&title, &html).await?;

    tracing::info!(id = created.id, "Content uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadContentResponse {
            success: true,
            message: "Content uploaded successfully".to_string(),
            data: created.into(),
        }),
    ))
}

pub async fn list_content(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summaries = state.db.list_content().await?;

    let data: Vec<ContentSummaryData> = summaries.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ContentListResponse {
        success: true,
        data,
        count,
    }))
}

pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_content_id(&id)?;

    let content = state
        .db
        .get_content(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Content not found")))?;

    Ok(Json(ContentDetailResponse {
        success: true,
        data: content.into(),
    }))
}

pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UploadContentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_content_id(&id)?;
    let (title, html) = validated_fields(json_body(payload)?)?;

    let updated = state
        .db
        .update_content(id, &title, &html)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Content not found")))?;

    Ok(Json(UpdateContentResponse {
        success: true,
        message: "Content updated successfully".to_string(),
        data: updated.into(),
    }))
}

pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_content_id(&id)?;

    let deleted = state
        .db
        .delete_content(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Content not found")))?;

    Ok(Json(DeleteContentResponse {
        success: true,
        message: "Content deleted successfully".to_string(),
        data: deleted.into(),
    }))
}

pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}
