use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub turf_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    /// Calendar date, YYYY-MM-DD.
    pub date: String,
    /// One of the turf's `available_hours` labels, e.g. "18:00".
    pub time_slot: String,
    pub duration: u32,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Details supplied by the caller when creating a booking. The engine
/// fills in the id, status and creation timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub turf_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub date: String,
    pub time_slot: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}
