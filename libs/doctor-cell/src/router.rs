use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::catalog::DoctorCatalog;

pub fn doctor_routes(state: Arc<DoctorCatalog>) -> Router {
    Router::new()
        .route("/doctorFinder", post(handlers::find_doctors))
        .route("/doctors", get(handlers::list_doctors))
        .route("/specializations", get(handlers::list_specializations))
        .route("/cities", get(handlers::list_cities))
        .with_state(state)
}
