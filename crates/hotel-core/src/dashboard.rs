//! # Dashboard Figures
//!
//! Headline numbers for the landing view, derived from the four collections.
//! The caller supplies "today" so the computation stays pure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::billing::BillingTotals;
use crate::money::Money;
use crate::status::{GuestStatus, ReservationStatus, RoomStatus};
use crate::types::{Guest, Invoice, Reservation, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusCounts {
    pub available: u32,
    pub occupied: u32,
    pub maintenance: u32,
    pub reserved: u32,
}

impl RoomStatusCounts {
    fn record(&mut self, status: RoomStatus) {
        match status {
            RoomStatus::Available => self.available += 1,
            RoomStatus::Occupied => self.occupied += 1,
            RoomStatus::Maintenance => self.maintenance += 1,
            RoomStatus::Reserved => self.reserved += 1,
        }
    }
}

/// Arrivals scheduled for one day. Cancelled reservations are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSummary {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub total: u32,
    /// Already checked in (or since checked out).
    pub completed: u32,
    /// Still confirmed, guest not yet arrived.
    pub pending: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rooms: u32,
    pub rooms_by_status: RoomStatusCounts,
    pub active_guests: u32,
    pub check_ins: CheckInSummary,
    pub revenue: Money,
}

impl DashboardStats {
    pub fn compute(
        rooms: &[Room],
        guests: &[Guest],
        reservations: &[Reservation],
        invoices: &[Invoice],
        today: NaiveDate,
    ) -> Self {
        let mut rooms_by_status = RoomStatusCounts::default();
        for room in rooms {
            rooms_by_status.record(room.status);
        }

        let active_guests = guests
            .iter()
            .filter(|g| g.status == GuestStatus::Active)
            .count() as u32;

        let mut check_ins = CheckInSummary {
            date: today,
            total: 0,
            completed: 0,
            pending: 0,
        };
        for reservation in reservations.iter().filter(|r| r.check_in_date == today) {
            match reservation.status {
                ReservationStatus::CheckedIn | ReservationStatus::CheckedOut => {
                    check_ins.completed += 1
                }
                ReservationStatus::Confirmed => check_ins.pending += 1,
                ReservationStatus::Cancelled => continue,
            }
            check_ins.total += 1;
        }

        DashboardStats {
            total_rooms: rooms.len() as u32,
            rooms_by_status,
            active_guests,
            check_ins,
            revenue: BillingTotals::from_invoices(invoices).total_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn room(id: u32, status: RoomStatus) -> Room {
        Room {
            id,
            number: format!("{}", 100 + id),
            room_type: "Single".into(),
            price: Money::from_dollars(120),
            status,
            amenities: vec![],
        }
    }

    fn reservation(id: u32, check_in: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            id,
            guest_name: format!("Guest {}", id),
            guest_email: String::new(),
            room_number: "101".into(),
            room_type: "Single".into(),
            check_in_date: date(check_in),
            check_out_date: date("2024-02-01"),
            status,
            total_amount: Money::zero(),
            nights: 0,
        }
    }

    #[test]
    fn test_room_counts() {
        let rooms = vec![
            room(1, RoomStatus::Available),
            room(2, RoomStatus::Occupied),
            room(3, RoomStatus::Available),
            room(4, RoomStatus::Maintenance),
        ];
        let stats = DashboardStats::compute(&rooms, &[], &[], &[], date("2024-01-20"));

        assert_eq!(stats.total_rooms, 4);
        assert_eq!(stats.rooms_by_status.available, 2);
        assert_eq!(stats.rooms_by_status.occupied, 1);
        assert_eq!(stats.rooms_by_status.maintenance, 1);
        assert_eq!(stats.rooms_by_status.reserved, 0);
        assert!(stats.revenue.is_zero());
    }

    #[test]
    fn test_check_ins_for_day() {
        let reservations = vec![
            reservation(1, "2024-01-20", ReservationStatus::CheckedIn),
            reservation(2, "2024-01-20", ReservationStatus::Confirmed),
            reservation(3, "2024-01-20", ReservationStatus::Cancelled),
            reservation(4, "2024-01-21", ReservationStatus::Confirmed),
        ];
        let stats = DashboardStats::compute(&[], &[], &reservations, &[], date("2024-01-20"));

        assert_eq!(stats.check_ins.total, 2);
        assert_eq!(stats.check_ins.completed, 1);
        assert_eq!(stats.check_ins.pending, 1);
    }
}
