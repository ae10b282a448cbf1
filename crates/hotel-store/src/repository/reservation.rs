//! # Reservation Repository
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewReservation (raw form)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_new_reservation  ── missing name/room/dates? → Err, no-op    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StayQuote (nights × rate card)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Reservation { status: confirmed, nights, total_amount }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use hotel_core::validation::validate_new_reservation;
use hotel_core::{NewReservation, RateCard, Reservation, ReservationStatus, Status};

use super::Collection;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct ReservationRepository {
    reservations: Collection<Reservation>,
    rates: RateCard,
}

impl ReservationRepository {
    pub fn new(reservations: Vec<Reservation>, rates: RateCard) -> Self {
        ReservationRepository {
            reservations: Collection::new(reservations),
            rates,
        }
    }

    /// The rate card new bookings are priced with.
    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Books a stay. Nights and total are derived here and never recomputed.
    pub fn add(&mut self, form: &NewReservation) -> StoreResult<Reservation> {
        let valid = validate_new_reservation(form)?;
        let id = self.reservations.allocate_id();
        let reservation = self
            .reservations
            .push(Reservation::create(id, valid, &self.rates))
            .clone();

        debug!(
            reservation_id = reservation.id,
            nights = reservation.nights,
            total = %reservation.total_amount,
            "Reservation booked"
        );
        Ok(reservation)
    }

    /// Replaces the reservation's status, including out of cancelled or
    /// checked-out.
    pub fn set_status(&mut self, id: u32, status: ReservationStatus) -> StoreResult<Reservation> {
        let current = self.reservations.require(id)?.status;
        let status = current.transition_to(status)?;

        let reservation = self.reservations.update(id, |r| r.status = status)?;
        debug!(
            reservation_id = id,
            from = %current,
            to = %status,
            "Reservation status changed"
        );
        Ok(reservation.clone())
    }

    pub fn get(&self, id: u32) -> StoreResult<&Reservation> {
        self.reservations.require(id)
    }

    pub fn list(&self) -> &[Reservation] {
        self.reservations.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use hotel_core::Money;

    fn form(room_type: &str, check_in: &str, check_out: &str) -> NewReservation {
        NewReservation {
            guest_name: "Ana Lima".into(),
            guest_email: "ana.lima@email.com".into(),
            room_number: "201".into(),
            room_type: room_type.into(),
            check_in_date: check_in.into(),
            check_out_date: check_out.into(),
        }
    }

    fn repo() -> ReservationRepository {
        ReservationRepository::new(seed::reservations(), RateCard::default())
    }

    #[test]
    fn test_add_prices_by_room_type() {
        let mut repo = repo();
        let cases = [
            ("Suite", 1050),
            ("Double", 540),
            ("Single", 360),
            ("Unknown", 360),
        ];

        for (room_type, total) in cases {
            let r = repo.add(&form(room_type, "2024-01-15", "2024-01-18")).unwrap();
            assert_eq!(r.nights, 3);
            assert_eq!(r.total_amount, Money::from_dollars(total), "{room_type}");
            assert_eq!(r.status, ReservationStatus::Confirmed);
        }
        assert_eq!(repo.list().len(), 3 + cases.len());
    }

    #[test]
    fn test_add_inverted_dates_still_books() {
        let mut repo = repo();
        let r = repo.add(&form("Suite", "2024-01-18", "2024-01-15")).unwrap();
        assert_eq!(r.nights, 3);
        assert_eq!(r.total_amount, Money::from_dollars(1050));
    }

    #[test]
    fn test_add_missing_required_is_noop() {
        let mut repo = repo();

        let mut no_name = form("Suite", "2024-01-15", "2024-01-18");
        no_name.guest_name.clear();
        let mut no_room = form("Suite", "2024-01-15", "2024-01-18");
        no_room.room_number.clear();
        let no_check_out = form("Suite", "2024-01-15", "");

        for bad in [no_name, no_room, no_check_out] {
            assert!(repo.add(&bad).unwrap_err().is_validation());
        }
        assert_eq!(repo.list().len(), 3);
    }

    #[test]
    fn test_padded_room_type_is_standard_rate() {
        let mut repo = repo();
        let r = repo.add(&form(" Suite", "2024-01-15", "2024-01-18")).unwrap();

        assert_eq!(r.room_type, " Suite");
        assert_eq!(r.total_amount, Money::from_dollars(360));
    }

    #[test]
    fn test_email_and_type_are_optional() {
        let mut repo = repo();
        let mut f = form("", "2024-02-01", "2024-02-03");
        f.guest_email.clear();

        let r = repo.add(&f).unwrap();
        assert_eq!(r.total_amount, Money::from_dollars(240));
    }

    #[test]
    fn test_any_status_reachable_from_any_other() {
        let mut repo = repo();

        for from in ReservationStatus::all() {
            for to in ReservationStatus::all() {
                repo.set_status(2, *from).unwrap();
                let r = repo.set_status(2, *to).unwrap();
                assert_eq!(r.status, *to);
            }
        }

        // Untouched neighbours
        assert_eq!(repo.get(1).unwrap().status, ReservationStatus::CheckedIn);
        assert_eq!(repo.get(3).unwrap().status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_custom_rates() {
        let rates = RateCard {
            standard: Money::from_dollars(90),
            ..RateCard::default()
        };
        let mut repo = ReservationRepository::new(Vec::new(), rates);
        let r = repo.add(&form("Single", "2024-01-15", "2024-01-16")).unwrap();

        assert_eq!(r.id, 1);
        assert_eq!(r.total_amount, Money::from_dollars(90));
    }
}
