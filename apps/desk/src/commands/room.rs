//! # Room Commands
//!
//! Room listing, the add-room form and status changes.

use tracing::debug;

use hotel_core::{NewRoom, Room, RoomStatus};

use crate::error::ApiResult;
use crate::state::StoreState;

/// All rooms in insertion order.
pub fn list_rooms(stores: &StoreState) -> Vec<Room> {
    debug!("list_rooms command");
    stores.with_stores(|s| s.rooms().list().to_vec())
}

/// Adds a room from the add-room form.
///
/// ## Returns
/// The stored room (status `available`, default amenities), or
/// `VALIDATION_ERROR` if number, type or price is missing.
pub fn add_room(stores: &StoreState, form: NewRoom) -> ApiResult<Room> {
    debug!(number = %form.number, room_type = %form.room_type, "add_room command");
    Ok(stores.with_stores_mut(|s| s.rooms_mut().add(&form))?)
}

/// Sets a room's status from its label (`"available"`, `"occupied"`, ...).
pub fn set_room_status(stores: &StoreState, room_id: u32, status: &str) -> ApiResult<Room> {
    debug!(room_id, status = %status, "set_room_status command");
    let status: RoomStatus = status.parse()?;
    Ok(stores.with_stores_mut(|s| s.rooms_mut().set_status(room_id, status))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use hotel_core::RateCard;

    fn stores() -> StoreState {
        StoreState::seeded(RateCard::default())
    }

    #[test]
    fn test_add_room() {
        let stores = stores();
        let room = add_room(
            &stores,
            NewRoom {
                number: "401".into(),
                room_type: "Double".into(),
                price: "180".into(),
            },
        )
        .unwrap();

        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(list_rooms(&stores).len(), 6);
    }

    #[test]
    fn test_add_room_rejected() {
        let stores = stores();
        let err = add_room(&stores, NewRoom::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_rooms(&stores).len(), 5);
    }

    #[test]
    fn test_set_room_status() {
        let stores = stores();
        let room = set_room_status(&stores, 4, "available").unwrap();
        assert_eq!(room.status, RoomStatus::Available);

        let err = set_room_status(&stores, 4, "flooded").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = set_room_status(&stores, 99, "occupied").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
