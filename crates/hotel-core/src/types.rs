//! # Domain Types
//!
//! The four record kinds the desk manages, plus the form inputs staff fill in.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────┐  ┌────────────┐ │
//! │  │    Room      │  │    Guest     │  │  Reservation  │  │  Invoice   │ │
//! │  │ ──────────── │  │ ──────────── │  │ ───────────── │  │ ────────── │ │
//! │  │ id           │  │ id           │  │ id            │  │ id         │ │
//! │  │ number       │  │ name, email  │  │ guest_name    │  │ room_rate  │ │
//! │  │ room_type    │  │ phone        │  │ room_number   │  │ nights     │ │
//! │  │ price        │  │ id_number    │  │ check-in/out  │  │ subtotal   │ │
//! │  │ status       │  │ status       │  │ nights   (D)  │  │ taxes      │ │
//! │  │ amenities    │  │ total_stays  │  │ total    (D)  │  │ total      │ │
//! │  └──────────────┘  └──────────────┘  └───────────────┘  └────────────┘ │
//! │                                                                         │
//! │  (D) = derived once at creation, stored thereafter                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records reference each other only by display values (guest name, room
//! number). No cross-record integrity is enforced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::stay::{RateCard, StayQuote};
use crate::status::{GuestStatus, PaymentStatus, ReservationStatus, RoomStatus};
use crate::validation::{ValidGuest, ValidReservation, ValidRoom};
use crate::DEFAULT_AMENITIES;

// =============================================================================
// Room Type
// =============================================================================

/// The room categories offered on the add-room and add-reservation forms.
///
/// Records keep the entered label as a `String`; this enum only recognises
/// the three known labels. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub fn all() -> &'static [RoomType] {
        &[RoomType::Single, RoomType::Double, RoomType::Suite]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }

    /// ```rust
    /// use hotel_core::RoomType;
    ///
    /// assert_eq!(RoomType::from_label("Suite"), Some(RoomType::Suite));
    /// assert_eq!(RoomType::from_label("suite"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<RoomType> {
        RoomType::all().iter().copied().find(|t| t.label() == label)
    }
}

// =============================================================================
// Room
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,

    /// Door number, e.g. "101". Not checked for uniqueness.
    pub number: String,

    /// Entered room type label ("Single", "Double", "Suite", or anything else).
    #[serde(rename = "type")]
    pub room_type: String,

    /// Nightly price.
    pub price: Money,

    pub status: RoomStatus,

    pub amenities: Vec<String>,
}

impl Room {
    /// Builds a new room: available, with the default amenity set.
    pub fn create(id: u32, valid: ValidRoom) -> Self {
        Room {
            id,
            number: valid.number,
            room_type: valid.room_type,
            price: valid.price,
            status: RoomStatus::Available,
            amenities: DEFAULT_AMENITIES.iter().map(|a| a.to_string()).collect(),
        }
    }
}

// =============================================================================
// Guest
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Passport or national ID as shown at the desk.
    pub id_number: String,
    pub status: GuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub check_out_date: Option<NaiveDate>,
    pub total_stays: u32,
}

impl Guest {
    /// Builds a new guest: upcoming, no stays, no room assigned.
    pub fn create(id: u32, valid: ValidGuest) -> Self {
        Guest {
            id,
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            id_number: valid.id_number,
            status: GuestStatus::Upcoming,
            room_number: None,
            check_in_date: None,
            check_out_date: None,
            total_stays: 0,
        }
    }
}

// =============================================================================
// Reservation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u32,
    pub guest_name: String,
    /// May be empty; the booking form does not require it.
    pub guest_email: String,
    pub room_number: String,
    /// May be empty; priced at the standard rate then.
    pub room_type: String,
    #[ts(as = "String")]
    pub check_in_date: NaiveDate,
    #[ts(as = "String")]
    pub check_out_date: NaiveDate,
    pub status: ReservationStatus,
    pub total_amount: Money,
    pub nights: u32,
}

impl Reservation {
    /// Builds a confirmed reservation, pricing the stay with `rates`.
    ///
    /// ```rust
    /// use hotel_core::validation::validate_new_reservation;
    /// use hotel_core::{Money, NewReservation, RateCard, Reservation, ReservationStatus};
    ///
    /// let form = NewReservation {
    ///     guest_name: "Ana Lima".into(),
    ///     guest_email: String::new(),
    ///     room_number: "201".into(),
    ///     room_type: "Suite".into(),
    ///     check_in_date: "2024-01-15".into(),
    ///     check_out_date: "2024-01-18".into(),
    /// };
    /// let valid = validate_new_reservation(&form).unwrap();
    /// let reservation = Reservation::create(7, valid, &RateCard::default());
    ///
    /// assert_eq!(reservation.nights, 3);
    /// assert_eq!(reservation.total_amount, Money::from_dollars(1050));
    /// assert_eq!(reservation.status, ReservationStatus::Confirmed);
    /// ```
    pub fn create(id: u32, valid: ValidReservation, rates: &RateCard) -> Self {
        let quote = StayQuote::new(
            valid.check_in_date,
            valid.check_out_date,
            &valid.room_type,
            rates,
        );

        Reservation {
            id,
            guest_name: valid.guest_name,
            guest_email: valid.guest_email,
            room_number: valid.room_number,
            room_type: valid.room_type,
            check_in_date: valid.check_in_date,
            check_out_date: valid.check_out_date,
            status: ReservationStatus::Confirmed,
            total_amount: quote.total,
            nights: quote.nights,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A guest folio.
///
/// Seeded invoices carry authored amounts; nothing recomputes `subtotal`,
/// `taxes` or `total_amount` after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: u32,
    pub guest_name: String,
    pub room_number: String,
    #[ts(as = "String")]
    pub check_in_date: NaiveDate,
    #[ts(as = "String")]
    pub check_out_date: NaiveDate,
    pub room_rate: Money,
    pub nights: u32,
    pub subtotal: Money,
    pub taxes: Money,
    pub total_amount: Money,
    pub payment_status: PaymentStatus,
    #[ts(as = "String")]
    pub invoice_date: NaiveDate,
}

// =============================================================================
// Form Inputs
// =============================================================================
// Raw field values as typed by staff. Empty strings mean "not filled in".

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    /// Nightly price in dollars, e.g. "120" or "99.50".
    pub price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    pub room_number: String,
    #[serde(default)]
    pub room_type: String,
    /// YYYY-MM-DD
    pub check_in_date: String,
    /// YYYY-MM-DD
    pub check_out_date: String,
}
