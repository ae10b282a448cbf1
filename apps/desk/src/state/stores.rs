//! # Store State
//!
//! Shared handle to the four record stores.
//!
//! ## Thread Safety
//! One `Arc<Mutex<HotelStores>>` guards every store. Commands take the lock
//! through [`StoreState::with_stores`] / [`StoreState::with_stores_mut`]
//! and release it when the closure returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                Lock held for                                  │
//! │  ───────                ─────────────                                  │
//! │  list_rooms ──────────► stores.rooms().list().to_vec()                 │
//! │  add_guest ───────────► stores.guests_mut().add(&form)                 │
//! │  generate_invoice ────► stores.generate_invoice(id, tax, today)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use hotel_core::RateCard;
use hotel_store::HotelStores;

#[derive(Debug, Clone)]
pub struct StoreState {
    stores: Arc<Mutex<HotelStores>>,
}

impl StoreState {
    pub fn new(stores: HotelStores) -> Self {
        StoreState {
            stores: Arc::new(Mutex::new(stores)),
        }
    }

    /// Stores loaded with the sample hotel.
    pub fn seeded(rates: RateCard) -> Self {
        Self::new(HotelStores::seeded(rates))
    }

    /// Executes a function with read access to the stores.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let rooms = store_state.with_stores(|s| s.rooms().list().to_vec());
    /// ```
    pub fn with_stores<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&HotelStores) -> R,
    {
        // Every store mutation completes or fails before touching data,
        // so a poisoned lock still guards consistent stores.
        let stores = self.stores.lock().unwrap_or_else(PoisonError::into_inner);
        f(&stores)
    }

    /// Executes a function with write access to the stores.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_stores_mut(|s| s.rooms_mut().set_status(3, status))?;
    /// ```
    pub fn with_stores_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HotelStores) -> R,
    {
        let mut stores = self.stores.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut stores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::RoomStatus;

    #[test]
    fn test_mutation_visible_through_clone() {
        let state = StoreState::seeded(RateCard::default());
        let other = state.clone();

        state
            .with_stores_mut(|s| s.rooms_mut().set_status(1, RoomStatus::Maintenance))
            .unwrap();

        let status = other.with_stores(|s| s.rooms().get(1).map(|r| r.status));
        assert_eq!(status.unwrap(), RoomStatus::Maintenance);
    }
}
