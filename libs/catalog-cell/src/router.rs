use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::store::CatalogStore;

pub fn catalog_routes(catalog: Arc<CatalogStore>) -> Router {
    Router::new()
        .route("/specialties", get(handlers::list_specialties))
        .route("/practitioners", get(handlers::list_practitioners))
        .with_state(catalog)
}
