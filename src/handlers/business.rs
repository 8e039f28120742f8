// src/handlers/business.rs
//
// Business display settings live in a standalone JSON file, not the
// database; the frontend reads them for receipt headers and the footer.

use axum::Json;
use std::path::PathBuf;
use tracing::instrument;

use crate::dtos::business::BusinessSettings;
use crate::error::AppError;

fn settings_path() -> PathBuf {
    std::env::var("BUSINESS_CONFIG_PATH")
        .unwrap_or_else(|_| "business.json".to_string())
        .into()
}

// GET /admin/business
#[instrument]
pub async fn get_settings() -> Result<Json<BusinessSettings>, AppError> {
    let path = settings_path();
    let settings = match tokio::fs::read(&path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map_err(|e| AppError::internal(format!("Malformed business settings file: {e}")))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => BusinessSettings::default(),
        Err(e) => {
            return Err(AppError::internal(format!(
                "Failed to read business settings: {e}"
            )))
        }
    };

    Ok(Json(settings))
}

// PUT /admin/business
#[instrument(skip(payload))]
pub async fn update_settings(
    Json(payload): Json<BusinessSettings>,
) -> Result<Json<BusinessSettings>, AppError> {
    let path = settings_path();
    let bytes = serde_json::to_vec_pretty(&payload)
        .map_err(|e| AppError::internal(format!("Failed to encode business settings: {e}")))?;

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::internal(format!("Failed to write business settings: {e}")))?;

    Ok(Json(payload))
}
