use std::sync::Arc;

use axum::{routing::get, Router};

use doctor_cell::router::doctor_routes;
use doctor_cell::services::catalog::DoctorCatalog;

pub fn create_router(state: Arc<DoctorCatalog>) -> Router {
    Router::new()
        .route("/", get(|| async { "MediFind API is running!" }))
        .merge(doctor_routes(state))
}
