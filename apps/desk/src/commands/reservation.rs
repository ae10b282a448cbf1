//! # Reservation Commands
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  New reservation form                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_reservation(form)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  nights = |check_out - check_in|, total = nights × rate(room type)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  status: confirmed ──► set_reservation_status(id, "checked-in") ──► … │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use hotel_core::{NewReservation, Reservation, ReservationStatus};

use crate::error::ApiResult;
use crate::state::StoreState;

pub fn list_reservations(stores: &StoreState) -> Vec<Reservation> {
    debug!("list_reservations command");
    stores.with_stores(|s| s.reservations().list().to_vec())
}

/// Books a stay priced with the configured rate card.
pub fn add_reservation(stores: &StoreState, form: NewReservation) -> ApiResult<Reservation> {
    debug!(
        guest_name = %form.guest_name,
        room_number = %form.room_number,
        "add_reservation command"
    );
    Ok(stores.with_stores_mut(|s| s.reservations_mut().add(&form))?)
}

/// Sets a reservation's status from its label. Any status may follow any other.
pub fn set_reservation_status(
    stores: &StoreState,
    reservation_id: u32,
    status: &str,
) -> ApiResult<Reservation> {
    debug!(reservation_id, status = %status, "set_reservation_status command");
    let status: ReservationStatus = status.parse()?;
    Ok(stores.with_stores_mut(|s| s.reservations_mut().set_status(reservation_id, status))?)
}
