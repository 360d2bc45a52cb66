//! Contract endpoints: upload, listing, retrieval, deletion, CSV export.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Serialize;
use tracing::info;

use pactum_core::ContractRecord;
use pactum_extractors::DocumentKind;
use pactum_store::contracts_to_csv;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Upload a contract document, run extraction, and persist the result.
/// POST /api/contracts/upload
pub async fn upload_contract(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<ContractRecord>> {
    let mut file_name: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|n| n.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?;
            content = Some(bytes.to_vec());
        }
    }

    let file_name = file_name.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    let content = content.ok_or_else(|| ApiError::bad_request("No file provided"))?;

    let kind = DocumentKind::from_filename(&file_name).ok_or_else(|| {
        ApiError::bad_request("Invalid file type. Allowed types: pdf, docx, doc")
    })?;

    let text = state.pipeline().extract(&content, kind).await?;
    let fields = state.extractor().extract_details(&text).await;
    let record = state.store().create_contract(user.id, &file_name, &fields)?;

    info!(
        contract_id = record.id,
        user_id = user.id,
        file_name = %record.file_name,
        "Contract uploaded"
    );

    Ok(Json(record))
}

/// List the authenticated user's contracts, newest first.
/// GET /api/contracts
pub async fn list_contracts(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<ContractRecord>>> {
    let records = state.store().contracts_for_user(user.id)?;
    Ok(Json(records))
}

/// Get a single contract by id.
/// GET /api/contracts/:id
pub async fn get_contract(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(contract_id): Path<i64>,
) -> ApiResult<Json<ContractRecord>> {
    let record = state
        .store()
        .contract_by_id(user.id, contract_id)?
        .ok_or_else(|| ApiError::not_found("Contract not found"))?;
    Ok(Json(record))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Delete a contract by id.
/// DELETE /api/contracts/:id
pub async fn delete_contract(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(contract_id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    if !state.store().delete_contract(user.id, contract_id)? {
        return Err(ApiError::not_found("Contract not found"));
    }

    Ok(Json(DeleteResponse {
        message: "Contract deleted successfully".to_string(),
    }))
}

/// Export the user's contracts as a CSV attachment.
/// GET /api/contracts/export/csv
pub async fn export_csv(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<(HeaderMap, String)> {
    let records = state.store().contracts_for_user(user.id)?;
    let csv = contracts_to_csv(&records)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=contracts.csv"),
    );

    Ok((headers, csv))
}
