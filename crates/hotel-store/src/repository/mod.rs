//! # Repository Module
//!
//! One repository per record kind, each owning its collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  desk command                                                          │
//! │       │                                                                 │
//! │       │  stores.rooms_mut().set_status(3, RoomStatus::Maintenance)      │
//! │       ▼                                                                 │
//! │  RoomRepository                                                        │
//! │  ├── add(&mut self, form)          validate → allocate id → append     │
//! │  ├── set_status(&mut self, id, s)  replace one field                   │
//! │  ├── get(&self, id)                                                    │
//! │  └── list(&self)                   insertion order                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Collection<Room> + IdSequence                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RoomRepository`] - Room add and status changes
//! - [`GuestRepository`] - Guest registration
//! - [`ReservationRepository`] - Priced bookings and status changes
//! - [`InvoiceRepository`] - Folios, payment status, totals and search

pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;

pub use guest::GuestRepository;
pub use invoice::InvoiceRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;

use hotel_core::{Guest, Invoice, Reservation, Room};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Id Sequence
// =============================================================================

/// Monotonic id allocator.
///
/// Starts one past the highest id already present and never hands out the
/// same id twice, even if records were ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn starting_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let highest = ids.into_iter().max().unwrap_or(0);
        IdSequence { next: highest + 1 }
    }

    /// The id the next allocation will return.
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

// =============================================================================
// Collection
// =============================================================================

/// A record that lives in a [`Collection`].
pub trait Record {
    /// Name used in not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> u32;
}

impl Record for Room {
    const ENTITY: &'static str = "Room";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Guest {
    const ENTITY: &'static str = "Guest";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Reservation {
    const ENTITY: &'static str = "Reservation";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Invoice {
    const ENTITY: &'static str = "Invoice";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Insertion-ordered records plus their id sequence.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T> {
    records: Vec<T>,
    ids: IdSequence,
}

impl<T: Record> Collection<T> {
    pub(crate) fn new(records: Vec<T>) -> Self {
        let ids = IdSequence::starting_after(records.iter().map(Record::id));
        Collection { records, ids }
    }

    pub(crate) fn allocate_id(&mut self) -> u32 {
        self.ids.allocate()
    }

    pub(crate) fn next_id(&self) -> u32 {
        self.ids.peek()
    }

    pub(crate) fn push(&mut self, record: T) -> &T {
        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    pub(crate) fn get(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub(crate) fn require(&self, id: u32) -> StoreResult<&T> {
        self.get(id).ok_or(StoreError::NotFound {
            entity: T::ENTITY,
            id,
        })
    }

    /// Applies `change` to the record with `id`; other records are untouched.
    pub(crate) fn update<F>(&mut self, id: u32, change: F) -> StoreResult<&T>
    where
        F: FnOnce(&mut T),
    {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        change(record);
        Ok(&*record)
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_after_highest() {
        let mut seq = IdSequence::starting_after([1001, 1003, 1002]);
        assert_eq!(seq.peek(), 1004);
        assert_eq!(seq.allocate(), 1004);
        assert_eq!(seq.allocate(), 1005);
    }

    #[test]
    fn test_sequence_empty_starts_at_one() {
        let mut seq = IdSequence::starting_after(std::iter::empty::<u32>());
        assert_eq!(seq.allocate(), 1);
    }
}
