use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::account_middleware;

use crate::handlers::{self, AppointmentState};

pub fn appointment_routes(state: AppointmentState) -> Router {
    // All appointment operations act on behalf of a resolved account
    let protected_routes = Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/slots", get(handlers::get_available_slots))
        .route("/upcoming", get(handlers::get_upcoming_appointments))
        .route("/past", get(handlers::get_past_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route("/{appointment_id}/complete", post(handlers::complete_appointment))
        .layer(middleware::from_fn(account_middleware));

    Router::new().merge(protected_routes).with_state(state)
}
