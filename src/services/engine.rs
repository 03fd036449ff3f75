use chrono::Utc;

use crate::models::{Booking, BookingStatus, NewBooking, Turf};
use crate::store::{RecordStore, StoreError};

/// Pure domain logic over the record store: availability queries and
/// booking creation/cancellation. Every mutation writes through to the
/// durable document before returning.
pub struct BookingEngine {
    store: RecordStore,
}

impl BookingEngine {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn turfs(&self) -> &[Turf] {
        &self.store.records.turfs
    }

    pub fn turf(&self, turf_id: &str) -> Option<&Turf> {
        self.store.records.turfs.iter().find(|t| t.id == turf_id)
    }

    /// All bookings for a turf/date, any status, creation order.
    pub fn bookings_on(&self, turf_id: &str, date: &str) -> Vec<&Booking> {
        self.store
            .records
            .bookings
            .iter()
            .filter(|b| b.turf_id == turf_id && b.date == date)
            .collect()
    }

    /// True iff no confirmed booking exists for this exact triple. Does
    /// not check that the slot belongs to the turf's hours; that is the
    /// creation boundary's job.
    pub fn is_available(&self, turf_id: &str, date: &str, time_slot: &str) -> bool {
        !self.store.records.bookings.iter().any(|b| {
            b.turf_id == turf_id
                && b.date == date
                && b.time_slot == time_slot
                && b.status == BookingStatus::Confirmed
        })
    }

    /// The turf's `available_hours` minus the confirmed-booked slots for
    /// `date`, in the turf's slot order. Empty for an unknown turf.
    pub fn available_slots(&self, turf_id: &str, date: &str) -> Vec<String> {
        let Some(turf) = self.turf(turf_id) else {
            return Vec::new();
        };
        turf.available_hours
            .iter()
            .filter(|slot| self.is_available(turf_id, date, slot))
            .cloned()
            .collect()
    }

    /// Creates the booking it is given, unconditionally. Availability and
    /// turf existence are the caller's preconditions. The id is the
    /// 1-based count of all bookings ever created, cancelled included, so
    /// sequence numbers are never reused.
    pub fn create_booking(&mut self, details: NewBooking) -> Result<Booking, StoreError> {
        let booking = Booking {
            booking_id: format!("BK{:04}", self.store.records.bookings.len() + 1),
            turf_id: details.turf_id,
            customer_name: details.customer_name,
            customer_phone: details.customer_phone,
            customer_email: details.customer_email.unwrap_or_default(),
            date: details.date,
            time_slot: details.time_slot,
            duration: details.duration.unwrap_or(1),
            status: BookingStatus::Confirmed,
            created_at: Utc::now().naive_utc(),
            total_amount: details.total_amount.unwrap_or(0.0),
        };
        self.store.records.bookings.push(booking.clone());
        self.store.persist()?;

        tracing::info!(
            booking_id = %booking.booking_id,
            turf_id = %booking.turf_id,
            date = %booking.date,
            time_slot = %booking.time_slot,
            "booking created"
        );
        Ok(booking)
    }

    /// Flips the booking to cancelled and persists. Returns false for an
    /// unknown id; cancellation is terminal but idempotent.
    pub fn cancel_booking(&mut self, booking_id: &str) -> Result<bool, StoreError> {
        let Some(booking) = self
            .store
            .records
            .bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
        else {
            return Ok(false);
        };

        booking.status = BookingStatus::Cancelled;
        self.store.persist()?;

        tracing::info!(booking_id = %booking_id, "booking cancelled");
        Ok(true)
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.store
            .records
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.store.records.bookings
    }
}
