//! # Guest Commands

use tracing::debug;

use hotel_core::{Guest, NewGuest};

use crate::error::ApiResult;
use crate::state::StoreState;

pub fn list_guests(stores: &StoreState) -> Vec<Guest> {
    debug!("list_guests command");
    stores.with_stores(|s| s.guests().list().to_vec())
}

/// Registers a guest. Name, email, phone and ID number are all required.
pub fn add_guest(stores: &StoreState, form: NewGuest) -> ApiResult<Guest> {
    debug!(name = %form.name, "add_guest command");
    Ok(stores.with_stores_mut(|s| s.guests_mut().add(&form))?)
}
