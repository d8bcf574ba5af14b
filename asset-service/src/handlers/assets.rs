use crate::dtos::{AssetResponse, CreateAssetRequest, UpdateAssetRequest};
use crate::models::{Asset, ASSET_COLLECTION};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};
use service_core::error::AppError;
use validator::Validate;

const LIST_LIMIT: i64 = 100;
const SEED_LIMIT: i64 = 24;

fn parse_asset_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid asset id")))
}

pub async fn list_assets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let assets: Vec<Asset> = state.db.find(ASSET_COLLECTION, doc! {}, LIST_LIMIT).await?;
    Ok(Json(
        assets
            .into_iter()
            .map(AssetResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// Idempotent bootstrap: inserts the demo set only when the collection is
/// empty, then returns the first 24 records either way.
pub async fn seed_assets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let existing: Vec<Asset> = state.db.find(ASSET_COLLECTION, doc! {}, 1).await?;
    if existing.is_empty() {
        let demo = Asset::demo_set();
        for asset in &demo {
            state.db.create(ASSET_COLLECTION, asset).await?;
        }
        tracing::info!(count = demo.len(), "Seeded demo assets");
    }

    let assets: Vec<Asset> = state.db.find(ASSET_COLLECTION, doc! {}, SEED_LIMIT).await?;
    Ok(Json(
        assets
            .into_iter()
            .map(AssetResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn create_asset(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssetRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let asset = payload.into_asset();
    let id = state.db.create(ASSET_COLLECTION, &asset).await?;

    let stored: Asset = state
        .db
        .find_by_id(ASSET_COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Asset not found")))?;

    tracing::info!(asset_id = %id, title = %stored.title, "Asset created");

    Ok(Json(AssetResponse::from(stored)))
}

pub async fn update_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    Json(patch): Json<UpdateAssetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_asset_id(&asset_id)?;

    let fields = patch.to_set_document();
    if fields.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("No changes provided")));
    }

    state.db.update_one(ASSET_COLLECTION, id, fields).await?;

    let stored: Asset = state
        .db
        .find_by_id(ASSET_COLLECTION, id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Asset not found")))?;

    tracing::info!(asset_id = %id, "Asset updated");

    Ok(Json(AssetResponse::from(stored)))
}

/// Delete is unconditional: a missing record is not an error.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_asset_id(&asset_id)?;

    state.db.delete_one(ASSET_COLLECTION, id).await?;

    tracing::info!(asset_id = %id, "Asset deleted");

    Ok(Json(serde_json::json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::parse_asset_id;

    #[test]
    fn malformed_id_is_rejected() {
        assert!(parse_asset_id("not-an-id").is_err());
        assert!(parse_asset_id("").is_err());
        assert!(parse_asset_id("123").is_err());
    }

    #[test]
    fn well_formed_id_parses() {
        assert!(parse_asset_id("507f1f77bcf86cd799439011").is_ok());
    }
}
