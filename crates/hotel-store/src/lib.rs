//! # hotel-store: Record Stores for Hotel Desk
//!
//! In-memory repositories for rooms, guests, reservations and invoices,
//! plus the seed records the desk starts from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Data Flow                             │
//! │                                                                         │
//! │  desk command (set_room_status)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   hotel-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐   ┌───────────┐  │   │
//! │  │   │  HotelStores  │    │    Repositories    │   │   Seed    │  │   │
//! │  │   │               │    │                    │   │           │  │   │
//! │  │   │ rooms()       │◄───│ RoomRepository     │◄──│ rooms()   │  │   │
//! │  │   │ guests()      │    │ GuestRepository    │   │ guests()  │  │   │
//! │  │   │ reservations()│    │ ReservationRepo    │   │ ...       │  │   │
//! │  │   │ invoices()    │    │ InvoiceRepository  │   │           │  │   │
//! │  │   └───────────────┘    └────────────────────┘   └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Process memory only. Nothing survives a restart.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - One repository per record kind
//! - [`seed`] - The sample hotel
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use hotel_core::{RateCard, RoomStatus};
//! use hotel_store::HotelStores;
//!
//! let mut stores = HotelStores::seeded(RateCard::default());
//! stores.rooms_mut().set_status(4, RoomStatus::Available).unwrap();
//!
//! assert_eq!(stores.rooms().list().len(), 5);
//! assert_eq!(stores.invoices().totals().total_revenue.dollars(), 3883);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::{GuestRepository, InvoiceRepository, ReservationRepository, RoomRepository};

use chrono::NaiveDate;
use tracing::info;

use hotel_core::{DashboardStats, Invoice, RateCard, TaxRate};

// =============================================================================
// Store Aggregate
// =============================================================================

/// All four record stores, owned together.
#[derive(Debug, Clone)]
pub struct HotelStores {
    rooms: RoomRepository,
    guests: GuestRepository,
    reservations: ReservationRepository,
    invoices: InvoiceRepository,
}

impl HotelStores {
    /// Stores loaded with the seed records.
    pub fn seeded(rates: RateCard) -> Self {
        let stores = HotelStores {
            rooms: RoomRepository::new(seed::rooms()),
            guests: GuestRepository::new(seed::guests()),
            reservations: ReservationRepository::new(seed::reservations(), rates),
            invoices: InvoiceRepository::new(seed::invoices()),
        };

        info!(
            rooms = stores.rooms.list().len(),
            guests = stores.guests.list().len(),
            reservations = stores.reservations.list().len(),
            invoices = stores.invoices.list().len(),
            "Stores seeded"
        );
        stores
    }

    /// Stores with no records at all.
    pub fn empty(rates: RateCard) -> Self {
        HotelStores {
            rooms: RoomRepository::new(Vec::new()),
            guests: GuestRepository::new(Vec::new()),
            reservations: ReservationRepository::new(Vec::new(), rates),
            invoices: InvoiceRepository::new(Vec::new()),
        }
    }

    pub fn rooms(&self) -> &RoomRepository {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut RoomRepository {
        &mut self.rooms
    }

    pub fn guests(&self) -> &GuestRepository {
        &self.guests
    }

    pub fn guests_mut(&mut self) -> &mut GuestRepository {
        &mut self.guests
    }

    pub fn reservations(&self) -> &ReservationRepository {
        &self.reservations
    }

    pub fn reservations_mut(&mut self) -> &mut ReservationRepository {
        &mut self.reservations
    }

    pub fn invoices(&self) -> &InvoiceRepository {
        &self.invoices
    }

    pub fn invoices_mut(&mut self) -> &mut InvoiceRepository {
        &mut self.invoices
    }

    /// Issues an unpaid invoice for a reservation, priced with the same
    /// rate card bookings use.
    ///
    /// ## Errors
    /// * `StoreError::NotFound` - no reservation with `reservation_id`
    pub fn generate_invoice(
        &mut self,
        reservation_id: u32,
        tax_rate: TaxRate,
        invoice_date: NaiveDate,
    ) -> StoreResult<Invoice> {
        let reservation = self.reservations.get(reservation_id)?;
        let rates = self.reservations.rates();
        Ok(self
            .invoices
            .issue_for(reservation, rates, tax_rate, invoice_date))
    }

    /// Landing-view figures as of `today`.
    pub fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats::compute(
            self.rooms.list(),
            self.guests.list(),
            self.reservations.list(),
            self.invoices.list(),
            today,
        )
    }
}
