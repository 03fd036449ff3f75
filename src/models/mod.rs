pub mod booking;
pub mod turf;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use turf::Turf;
