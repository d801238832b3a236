use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::store::CatalogStore;

#[derive(Debug, Deserialize)]
pub struct PractitionerQueryParams {
    pub specialty_id: Option<Uuid>,
}

#[axum::debug_handler]
pub async fn list_specialties(
    State(catalog): State<Arc<CatalogStore>>,
) -> Result<Json<Value>, AppError> {
    let specialties = catalog.list_specialties();

    Ok(Json(json!({
        "specialties": specialties
    })))
}

#[axum::debug_handler]
pub async fn list_practitioners(
    State(catalog): State<Arc<CatalogStore>>,
    Query(params): Query<PractitionerQueryParams>,
) -> Result<Json<Value>, AppError> {
    let practitioners = match params.specialty_id {
        Some(specialty_id) => catalog.practitioners_by_specialty(specialty_id),
        None => catalog.list_practitioners(),
    };

    Ok(Json(json!({
        "practitioners": practitioners
    })))
}
