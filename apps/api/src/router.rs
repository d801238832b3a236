use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::handlers::AppointmentState;
use booking_cell::router::appointment_routes;
use catalog_cell::router::catalog_routes;
use catalog_cell::store::CatalogStore;

pub fn create_router(catalog: Arc<CatalogStore>, appointments: AppointmentState) -> Router {
    Router::new()
        .route("/", get(|| async { "Salud Clinic API is running!" }))
        .nest("/catalog", catalog_routes(catalog))
        .nest("/appointments", appointment_routes(appointments))
}
