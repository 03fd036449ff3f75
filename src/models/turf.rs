use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turf {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub size: String,
    pub surface_type: String,
    pub price_per_hour: f64,
    /// Canonical universe of bookable slot labels, fixed per turf.
    /// Does not vary by date; availability is this list minus the
    /// confirmed bookings for a given date.
    pub available_hours: Vec<String>,
    pub images: Vec<String>,
    pub rating: f64,
    pub total_reviews: u32,
}
