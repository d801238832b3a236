use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use catalog_cell::store::CatalogStore;
use shared_models::auth::Account;
use shared_models::error::AppError;

use crate::models::{BookAppointmentRequest, BookingError};
use crate::services::availability::AvailabilityService;
use crate::services::booking::BookingService;
use crate::services::queries::AppointmentQueryService;

/// Shared state for the appointment routes.
#[derive(Clone)]
pub struct AppointmentState {
    pub booking: Arc<BookingService>,
    pub availability: Arc<AvailabilityService>,
    pub queries: Arc<AppointmentQueryService>,
    pub catalog: Arc<CatalogStore>,
}

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct SlotsQueryParams {
    pub practitioner_id: Uuid,
    pub date: NaiveDate,
}

// ==============================================================================
// HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<AppointmentState>,
    Query(params): Query<SlotsQueryParams>,
) -> Result<Json<Value>, AppError> {
    if state.catalog.practitioner(params.practitioner_id).is_none() {
        return Err(AppError::NotFound("Practitioner not found".to_string()));
    }

    let slots = state
        .availability
        .available_slots(params.practitioner_id, params.date)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "practitioner_id": params.practitioner_id,
        "date": params.date,
        "slots": slots
    })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Extension(account): Extension<Account>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .booking
        .book(account.id, request)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment booked successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<Uuid>,
    Extension(account): Extension<Account>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .booking
        .appointment(account.id, appointment_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<Uuid>,
    Extension(account): Extension<Account>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .booking
        .cancel(account.id, appointment_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment cancelled successfully"
    })))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<Uuid>,
    Extension(account): Extension<Account>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .booking
        .complete(account.id, appointment_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment marked as completed"
    })))
}

#[axum::debug_handler]
pub async fn get_upcoming_appointments(
    State(state): State<AppointmentState>,
    Extension(account): Extension<Account>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.queries.upcoming(account.id).await;

    Ok(Json(json!({
        "appointments": appointments
    })))
}

#[axum::debug_handler]
pub async fn get_past_appointments(
    State(state): State<AppointmentState>,
    Extension(account): Extension<Account>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.queries.past(account.id).await;

    Ok(Json(json!({
        "appointments": appointments
    })))
}

// ==============================================================================
// ERROR MAPPING
// ==============================================================================

fn map_booking_error(e: BookingError) -> AppError {
    match e {
        BookingError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        BookingError::PractitionerNotFound => {
            AppError::NotFound("Practitioner not found".to_string())
        }
        BookingError::SpecialtyNotFound => AppError::NotFound("Specialty not found".to_string()),
        BookingError::Conflict => {
            AppError::Conflict("Appointment slot no longer available".to_string())
        }
        BookingError::Unauthorized => {
            AppError::Auth("Not authorized to access this appointment".to_string())
        }
        BookingError::Validation(msg) => AppError::BadRequest(msg),
        BookingError::InvalidStatusTransition(status) => AppError::BadRequest(format!(
            "Appointment cannot be modified in current status: {}",
            status
        )),
        BookingError::InvalidTime(msg) => AppError::BadRequest(msg),
        BookingError::Dependency(msg) => AppError::Dependency(msg),
    }
}
