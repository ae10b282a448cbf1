//! # Status Types
//!
//! The four status sets staff can assign, one per record kind.
//!
//! ## Transition Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every status is reachable from every other status.                     │
//! │                                                                         │
//! │  confirmed ──► checked-in ──► checked-out                              │
//! │      ▲  ╲          │  ▲            │                                    │
//! │      │   ╲         ▼  │            ▼                                    │
//! │      └──── cancelled ◄─────────────┘   (and back again)                │
//! │                                                                         │
//! │  Staff fix mistakes by re-selecting a status, so a "terminal" state   │
//! │  like cancelled or checked-out can be left again.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Status::can_transition_to` is the transition table and answers `true`
//! for every pair. Repositories go through `Status::transition_to`, which
//! turns a forbidden edge into `CoreError::InvalidTransition`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// Behaviour shared by every status enum.
pub trait Status: Copy + Eq + fmt::Display + FromStr<Err = CoreError> + 'static {
    /// Record kind used in error messages ("room", "invoice", ...).
    const KIND: &'static str;

    /// Every value, in the order the presentation layer lists them.
    fn all() -> &'static [Self];

    /// The kebab-case label used on the wire.
    fn label(&self) -> &'static str;

    /// Whether staff may move a record from `self` to `next`.
    fn can_transition_to(&self, _next: Self) -> bool {
        true
    }

    /// Returns `next` if the table allows the move.
    fn transition_to(&self, next: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                kind: Self::KIND,
                from: self.label(),
                to: next.label(),
            })
        }
    }
}

fn parse_label<S: Status>(value: &str) -> Result<S, CoreError> {
    let wanted = value.trim();
    S::all()
        .iter()
        .copied()
        .find(|s| s.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::InvalidStatus {
            kind: S::KIND,
            value: value.to_string(),
        })
}

// =============================================================================
// Room Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    /// Ready to be let.
    #[default]
    Available,
    Occupied,
    /// Out of service.
    Maintenance,
    /// Held for an upcoming reservation.
    Reserved,
}

impl Status for RoomStatus {
    const KIND: &'static str = "room";

    fn all() -> &'static [Self] {
        &[
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Reserved,
            RoomStatus::Maintenance,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Reserved => "reserved",
        }
    }
}

// =============================================================================
// Guest Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    /// Currently staying.
    Active,
    CheckedOut,
    /// Registered but not yet arrived. Every new guest starts here.
    #[default]
    Upcoming,
}

impl Status for GuestStatus {
    const KIND: &'static str = "guest";

    fn all() -> &'static [Self] {
        &[GuestStatus::Active, GuestStatus::CheckedOut, GuestStatus::Upcoming]
    }

    fn label(&self) -> &'static str {
        match self {
            GuestStatus::Active => "active",
            GuestStatus::CheckedOut => "checked-out",
            GuestStatus::Upcoming => "upcoming",
        }
    }
}

// =============================================================================
// Reservation Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl Status for ReservationStatus {
    const KIND: &'static str = "reservation";

    fn all() -> &'static [Self] {
        &[
            ReservationStatus::Confirmed,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked-in",
            ReservationStatus::CheckedOut => "checked-out",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

// =============================================================================
// Payment Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    /// Counted in total revenue only; see `BillingTotals`.
    PartiallyPaid,
}

impl Status for PaymentStatus {
    const KIND: &'static str = "payment";

    fn all() -> &'static [Self] {
        &[
            PaymentStatus::Paid,
            PaymentStatus::Unpaid,
            PaymentStatus::PartiallyPaid,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::PartiallyPaid => "partially-paid",
        }
    }
}

// =============================================================================
// Display / FromStr
// =============================================================================

macro_rules! label_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = CoreError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_label(s)
                }
            }
        )+
    };
}

label_conversions!(RoomStatus, GuestStatus, ReservationStatus, PaymentStatus);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fully_connected<S: Status + fmt::Debug>() {
        for from in S::all() {
            for to in S::all() {
                assert!(from.can_transition_to(*to), "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_every_transition_is_allowed() {
        assert_fully_connected::<RoomStatus>();
        assert_fully_connected::<GuestStatus>();
        assert_fully_connected::<ReservationStatus>();
        assert_fully_connected::<PaymentStatus>();
    }

    /// A status set with one forbidden edge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Open,
        Locked,
    }

    impl Status for Door {
        const KIND: &'static str = "door";

        fn all() -> &'static [Self] {
            &[Door::Open, Door::Locked]
        }

        fn label(&self) -> &'static str {
            match self {
                Door::Open => "open",
                Door::Locked => "locked",
            }
        }

        fn can_transition_to(&self, next: Self) -> bool {
            !(*self == Door::Locked && next == Door::Open)
        }
    }

    label_conversions!(Door);

    #[test]
    fn test_transition_to_consults_table() {
        assert_eq!(Door::Open.transition_to(Door::Locked).unwrap(), Door::Locked);

        let err = Door::Locked.transition_to(Door::Open).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                kind: "door",
                from: "locked",
                to: "open"
            }
        ));
        assert_eq!(err.to_string(), "Cannot move door from 'locked' to 'open'");

        assert_eq!(
            ReservationStatus::Cancelled
                .transition_to(ReservationStatus::Confirmed)
                .unwrap(),
            ReservationStatus::Confirmed
        );
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(
            "checked-in".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::CheckedIn
        );
        assert_eq!(
            " Partially-Paid ".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(
            "maintenance".parse::<RoomStatus>().unwrap(),
            RoomStatus::Maintenance
        );

        let err = "checkedin".parse::<ReservationStatus>().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidStatus { kind: "reservation", .. }
        ));
    }

    #[test]
    fn test_display_matches_serde() {
        for status in PaymentStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
        for status in ReservationStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_defaults_for_new_records() {
        assert_eq!(RoomStatus::default(), RoomStatus::Available);
        assert_eq!(GuestStatus::default(), GuestStatus::Upcoming);
        assert_eq!(ReservationStatus::default(), ReservationStatus::Confirmed);
    }
}
