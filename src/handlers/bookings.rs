use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking};
use crate::state::AppState;

const REQUIRED_FIELDS: [&str; 5] = [
    "turf_id",
    "customer_name",
    "customer_phone",
    "date",
    "time_slot",
];

// GET /api/bookings
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    let engine = state.engine.lock().unwrap();
    Json(engine.bookings().to_vec())
}

// POST /api/book
//
// Validation is done on the raw payload so a missing field surfaces as its
// own error rather than a generic deserialization failure.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    for field in REQUIRED_FIELDS {
        let present = payload
            .get(field)
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.trim().is_empty());
        if !present {
            return Err(AppError::Validation(format!(
                "Missing required field: {field}"
            )));
        }
    }

    let mut details: NewBooking = serde_json::from_value(payload)
        .map_err(|e| AppError::Validation(format!("Invalid booking payload: {e}")))?;

    // Check-then-create runs under one engine lock so two requests cannot
    // both see the slot as free.
    let booking = {
        let mut engine = state.engine.lock().unwrap();

        let price_per_hour = engine
            .turf(&details.turf_id)
            .ok_or_else(|| AppError::NotFound(format!("turf {}", details.turf_id)))?
            .price_per_hour;

        if !engine.is_available(&details.turf_id, &details.date, &details.time_slot) {
            return Err(AppError::SlotConflict);
        }

        let duration = details.duration.unwrap_or(1);
        details.total_amount = Some(price_per_hour * f64::from(duration));
        engine.create_booking(details)?
    };

    Ok(Json(json!({
        "success": true,
        "booking": booking,
        "message": "Booking confirmed successfully!",
    })))
}

// POST /api/cancel/:booking_id
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cancelled = {
        let mut engine = state.engine.lock().unwrap();
        engine.cancel_booking(&booking_id)?
    };

    if cancelled {
        Ok(Json(json!({
            "success": true,
            "message": "Booking cancelled successfully",
        })))
    } else {
        Err(AppError::NotFound(format!("booking {booking_id}")))
    }
}

// GET /api/availability/:turf_id/:date
pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Path((turf_id, date)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let engine = state.engine.lock().unwrap();

    let price_per_hour = engine
        .turf(&turf_id)
        .ok_or_else(|| AppError::NotFound(format!("turf {turf_id}")))?
        .price_per_hour;

    let booked_slots: Vec<String> = engine
        .bookings_on(&turf_id, &date)
        .into_iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| b.time_slot.clone())
        .collect();
    let available_slots = engine.available_slots(&turf_id, &date);

    Ok(Json(json!({
        "available_slots": available_slots,
        "booked_slots": booked_slots,
        "price_per_hour": price_per_hour,
    })))
}
