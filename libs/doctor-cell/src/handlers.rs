use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{DoctorFinderRequest, DoctorRecord};
use crate::services::catalog::DoctorCatalog;
use crate::services::recommendation::RecommendationService;

// Query parameters for the directory listing. `limit` stays a raw string so that
// non-numeric values degrade to "no limit" instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub city: Option<String>,
    pub limit: Option<String>,
}

#[axum::debug_handler]
pub async fn find_doctors(
    State(catalog): State<Arc<DoctorCatalog>>,
    Json(request): Json<DoctorFinderRequest>,
) -> Result<Json<Value>, AppError> {
    let (disease, city) = match (request.disease.as_deref(), request.city.as_deref()) {
        (Some(disease), Some(city)) if !disease.is_empty() && !city.is_empty() => (disease, city),
        _ => {
            return Err(AppError::BadRequest(
                "Disease and city are required parameters".to_string(),
            ))
        }
    };

    let service = RecommendationService::new(&catalog);
    let doctors = service
        .recommend(disease, city)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    debug!(
        "Recommending {} doctors for disease '{}' in {}",
        doctors.len(),
        disease.trim(),
        city.trim()
    );

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(catalog): State<Arc<DoctorCatalog>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    // Invalid or non-positive limit values mean "no limit".
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|n| *n > 0);

    let records: Vec<&DoctorRecord> = match query.city.as_deref() {
        Some(city) if !city.is_empty() => {
            let filtered = catalog.doctors_in_city(city);
            if filtered.is_empty() {
                return Err(AppError::NotFound(format!("No doctors found in {}", city)));
            }
            filtered
        }
        _ => catalog.doctors().iter().collect(),
    };

    let truncated = match limit {
        Some(n) => &records[..records.len().min(n)],
        None => &records[..],
    };

    let body: Vec<Value> = truncated
        .iter()
        .map(|doctor| Value::Object(doctor.fields.clone()))
        .collect();

    Ok(Json(json!(body)))
}

#[axum::debug_handler]
pub async fn list_specializations(
    State(catalog): State<Arc<DoctorCatalog>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "specializations": catalog.specializations()
    })))
}

#[axum::debug_handler]
pub async fn list_cities(
    State(catalog): State<Arc<DoctorCatalog>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "cities": catalog.cities()
    })))
}
