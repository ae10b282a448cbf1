//! # hotel-core: Pure Business Logic for Hotel Desk
//!
//! Records, money, statuses, validation and the derived figures (night
//! counts, stay prices, revenue aggregates) with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (external)                      │   │
//! │  │   Dashboard ─ Rooms ─ Guests ─ Reservations ─ Billing           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    desk commands                                │   │
//! │  │    add_room, set_reservation_status, list_invoices, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               hotel-store (repositories)                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   types · money · status · validation · stay · billing          │   │
//! │  │   dashboard                                                     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Room, Guest, Reservation, Invoice and their form inputs
//! - [`money`] - Integer-cent `Money` and `TaxRate`
//! - [`status`] - The four status sets and the `Status` trait
//! - [`validation`] - Form validation
//! - [`stay`] - Night counts and the nightly rate card
//! - [`billing`] - Revenue totals, invoice search, invoice generation
//! - [`dashboard`] - Landing-view figures
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hotel_core::stay::StayQuote;
//! use hotel_core::{Money, RateCard};
//!
//! let check_in = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
//!
//! let quote = StayQuote::new(check_in, check_out, "Double", &RateCard::default());
//! assert_eq!(quote.nights, 3);
//! assert_eq!(quote.total, Money::from_dollars(540));
//! ```

pub mod billing;
pub mod dashboard;
pub mod error;
pub mod money;
pub mod status;
pub mod stay;
pub mod types;
pub mod validation;

pub use billing::BillingTotals;
pub use dashboard::DashboardStats;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use status::{GuestStatus, PaymentStatus, ReservationStatus, RoomStatus, Status};
pub use stay::RateCard;
pub use types::*;

/// Amenities every newly added room starts with.
pub const DEFAULT_AMENITIES: &[&str] = &["wifi", "coffee"];

/// Default lodging tax applied to generated invoices (10%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;
