use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{
    DocumentKind, ParsedDocument, ParsedJobPosting, ParsedResume, RawDocument,
};
use crate::loader::{extract_from_bytes, LoadError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ParseTextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
pub struct UploadQuery {
    pub document_type: Option<String>,
}

fn require_text(text: &str) -> Result<&str, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("'text' must not be empty".to_string()));
    }
    Ok(text)
}

/// POST /api/v1/parse/job
pub async fn handle_parse_job(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParsedJobPosting>, AppError> {
    let text = require_text(&req.text)?;
    Ok(Json(state.parser.job.parse(text)))
}

/// POST /api/v1/parse/resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    let text = require_text(&req.text)?;
    Ok(Json(state.parser.resume.parse(text)))
}

/// POST /api/v1/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParsedDocument>, AppError> {
    let kind: DocumentKind = req.document_type.parse()?;
    let text = require_text(&req.text)?;
    Ok(Json(state.parser.parse_document(&RawDocument { text, kind })))
}

/// POST /api/v1/parse/upload?document_type=...
///
/// Expects a multipart `file` field. PDF/Word decoding and parsing run on the
/// blocking pool.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    Query(params): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<ParsedDocument>, AppError> {
    let kind: DocumentKind = params
        .document_type
        .as_deref()
        .ok_or_else(|| AppError::Validation("'document_type' query parameter is required".to_string()))?
        .parse()?;

    let (file_name, bytes) = read_file_field(&mut multipart).await?;
    info!("Received upload '{file_name}' ({} bytes) as {kind:?}", bytes.len());

    let parser = state.parser.clone();
    let parsed = tokio::task::spawn_blocking(move || -> Result<ParsedDocument, LoadError> {
        let text = extract_from_bytes(&file_name, &bytes)?;
        Ok(parser.parse_document(&RawDocument { text: &text, kind }))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in upload: {e}")))??;

    Ok(Json(parsed))
}

/// Finds the `file` field; other fields are ignored.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("'file' field must carry a file name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read 'file' field: {e}")))?;

        return Ok((file_name, bytes.to_vec()));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
