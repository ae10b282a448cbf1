//! # Seed Records
//!
//! The sample hotel the desk opens with: five rooms, three guests, three
//! reservations and four invoices. Every call returns a fresh copy.
//!
//! ## Seeded Ledger
//! ```text
//! ┌──────┬───────────────┬──────┬────────┬────────┬────────┬────────────────┐
//! │  #   │ Guest         │ Room │ Nights │ Sub    │ Total  │ Status         │
//! ├──────┼───────────────┼──────┼────────┼────────┼────────┼────────────────┤
//! │ 1001 │ John Smith    │ 205  │   3    │  540   │  594   │ paid           │
//! │ 1002 │ Maria Garcia  │ 315  │   4    │ 1400   │ 1540   │ paid           │
//! │ 1003 │ David Wilson  │ 301  │   3    │ 1050   │ 1155   │ unpaid         │
//! │ 1004 │ Sarah Johnson │ 102  │   3    │  540   │  594   │ partially-paid │
//! └──────┴───────────────┴──────┴────────┴────────┴────────┴────────────────┘
//! ```

use chrono::NaiveDate;

use hotel_core::{
    Guest, GuestStatus, Invoice, Money, PaymentStatus, Reservation, ReservationStatus, Room,
    RoomStatus,
};

/// Calendar date for seed records. Seed dates are all valid literals.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn amenities(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

// =============================================================================
// Rooms
// =============================================================================

pub fn rooms() -> Vec<Room> {
    let room = |id, number: &str, room_type: &str, price, status, names: &[&str]| Room {
        id,
        number: number.to_string(),
        room_type: room_type.to_string(),
        price: Money::from_dollars(price),
        status,
        amenities: amenities(names),
    };

    vec![
        room(1, "101", "Single", 120, RoomStatus::Available, &["wifi", "coffee"]),
        room(
            2,
            "102",
            "Double",
            180,
            RoomStatus::Occupied,
            &["wifi", "coffee", "parking"],
        ),
        room(
            3,
            "201",
            "Suite",
            350,
            RoomStatus::Available,
            &["wifi", "coffee", "parking", "room-service"],
        ),
        room(4, "202", "Double", 180, RoomStatus::Maintenance, &["wifi", "coffee"]),
        room(
            5,
            "301",
            "Suite",
            350,
            RoomStatus::Reserved,
            &["wifi", "coffee", "parking", "room-service"],
        ),
    ]
}

// =============================================================================
// Guests
// =============================================================================

pub fn guests() -> Vec<Guest> {
    vec![
        Guest {
            id: 1,
            name: "John Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            id_number: "ID123456789".to_string(),
            status: GuestStatus::Active,
            room_number: Some("205".to_string()),
            check_in_date: Some(date(2024, 1, 15)),
            check_out_date: Some(date(2024, 1, 18)),
            total_stays: 3,
        },
        Guest {
            id: 2,
            name: "Maria Garcia".to_string(),
            email: "maria.garcia@email.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            id_number: "ID987654321".to_string(),
            status: GuestStatus::CheckedOut,
            room_number: Some("315".to_string()),
            check_in_date: Some(date(2024, 1, 10)),
            check_out_date: Some(date(2024, 1, 14)),
            total_stays: 1,
        },
        Guest {
            id: 3,
            name: "David Wilson".to_string(),
            email: "david.wilson@email.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            id_number: "ID456789123".to_string(),
            status: GuestStatus::Upcoming,
            room_number: None,
            check_in_date: Some(date(2024, 1, 20)),
            check_out_date: Some(date(2024, 1, 23)),
            total_stays: 2,
        },
    ]
}

// =============================================================================
// Reservations
// =============================================================================

pub fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: 1,
            guest_name: "John Smith".to_string(),
            guest_email: "john.smith@email.com".to_string(),
            room_number: "205".to_string(),
            room_type: "Double".to_string(),
            check_in_date: date(2024, 1, 15),
            check_out_date: date(2024, 1, 18),
            status: ReservationStatus::CheckedIn,
            total_amount: Money::from_dollars(540),
            nights: 3,
        },
        Reservation {
            id: 2,
            guest_name: "Maria Garcia".to_string(),
            guest_email: "maria.garcia@email.com".to_string(),
            room_number: "315".to_string(),
            room_type: "Suite".to_string(),
            check_in_date: date(2024, 1, 10),
            check_out_date: date(2024, 1, 14),
            status: ReservationStatus::CheckedOut,
            total_amount: Money::from_dollars(1400),
            nights: 4,
        },
        Reservation {
            id: 3,
            guest_name: "David Wilson".to_string(),
            guest_email: "david.wilson@email.com".to_string(),
            room_number: "301".to_string(),
            room_type: "Suite".to_string(),
            check_in_date: date(2024, 1, 20),
            check_out_date: date(2024, 1, 23),
            status: ReservationStatus::Confirmed,
            total_amount: Money::from_dollars(1050),
            nights: 3,
        },
    ]
}

// =============================================================================
// Invoices
// =============================================================================

pub fn invoices() -> Vec<Invoice> {
    let invoice = |id, guest: &str, room: &str, stay: (NaiveDate, NaiveDate), rate, nights| {
        let room_rate = Money::from_dollars(rate);
        let subtotal = room_rate.times_nights(nights);
        let taxes = Money::from_cents(subtotal.cents() / 10);
        Invoice {
            id,
            guest_name: guest.to_string(),
            room_number: room.to_string(),
            check_in_date: stay.0,
            check_out_date: stay.1,
            room_rate,
            nights,
            subtotal,
            taxes,
            total_amount: subtotal + taxes,
            payment_status: PaymentStatus::Unpaid,
            invoice_date: stay.1,
        }
    };

    vec![
        Invoice {
            payment_status: PaymentStatus::Paid,
            ..invoice(1001, "John Smith", "205", (date(2024, 1, 15), date(2024, 1, 18)), 180, 3)
        },
        Invoice {
            payment_status: PaymentStatus::Paid,
            ..invoice(1002, "Maria Garcia", "315", (date(2024, 1, 10), date(2024, 1, 14)), 350, 4)
        },
        invoice(1003, "David Wilson", "301", (date(2024, 1, 20), date(2024, 1, 23)), 350, 3),
        Invoice {
            payment_status: PaymentStatus::PartiallyPaid,
            ..invoice(1004, "Sarah Johnson", "102", (date(2024, 1, 18), date(2024, 1, 21)), 180, 3)
        },
    ]
}
