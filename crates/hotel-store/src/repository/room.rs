//! # Room Repository
//!
//! ## Key Operations
//! - Add a room from the add-room form (starts available, wifi + coffee)
//! - Set any room to any status

use tracing::debug;

use hotel_core::validation::validate_new_room;
use hotel_core::{NewRoom, Room, RoomStatus, Status};

use super::Collection;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct RoomRepository {
    rooms: Collection<Room>,
}

impl RoomRepository {
    pub fn new(rooms: Vec<Room>) -> Self {
        RoomRepository {
            rooms: Collection::new(rooms),
        }
    }

    /// Adds a room.
    ///
    /// ## Returns
    /// * `Ok(Room)` - the stored record
    /// * `Err(..)` - a field was missing or malformed; nothing was added
    pub fn add(&mut self, form: &NewRoom) -> StoreResult<Room> {
        let valid = validate_new_room(form)?;
        let id = self.rooms.allocate_id();
        let room = self.rooms.push(Room::create(id, valid)).clone();

        debug!(room_id = room.id, number = %room.number, "Room added");
        Ok(room)
    }

    /// Replaces the room's status if the status table allows the move.
    pub fn set_status(&mut self, id: u32, status: RoomStatus) -> StoreResult<Room> {
        let current = self.rooms.require(id)?.status;
        let status = current.transition_to(status)?;

        let room = self.rooms.update(id, |room| room.status = status)?;
        debug!(room_id = id, from = %current, to = %status, "Room status changed");
        Ok(room.clone())
    }

    pub fn get(&self, id: u32) -> StoreResult<&Room> {
        self.rooms.require(id)
    }

    /// Rooms in insertion order.
    pub fn list(&self) -> &[Room] {
        self.rooms.as_slice()
    }

    pub fn next_id(&self) -> u32 {
        self.rooms.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::StoreError;

    fn form(number: &str, room_type: &str, price: &str) -> NewRoom {
        NewRoom {
            number: number.into(),
            room_type: room_type.into(),
            price: price.into(),
        }
    }

    #[test]
    fn test_add_room() {
        let mut repo = RoomRepository::new(seed::rooms());
        let before = repo.list().len();

        let room = repo.add(&form("401", "Suite", "350")).unwrap();

        assert_eq!(repo.list().len(), before + 1);
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.amenities, vec!["wifi", "coffee"]);
        assert_eq!(repo.list().last(), Some(&room));
    }

    #[test]
    fn test_add_room_missing_field_is_noop() {
        let mut repo = RoomRepository::new(seed::rooms());
        let snapshot = repo.list().to_vec();
        let next = repo.next_id();

        for bad in [
            form("", "Suite", "350"),
            form("401", "", "350"),
            form("401", "Suite", ""),
        ] {
            let err = repo.add(&bad).unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(repo.list(), snapshot.as_slice());
        // Rejected adds do not burn ids
        assert_eq!(repo.next_id(), next);
    }

    #[test]
    fn test_ids_are_unique_after_adds() {
        let mut repo = RoomRepository::new(seed::rooms());
        let a = repo.add(&form("401", "Single", "120")).unwrap();
        let b = repo.add(&form("402", "Single", "120")).unwrap();

        assert_eq!(a.id, 6);
        assert_eq!(b.id, 7);

        let mut ids: Vec<u32> = repo.list().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), repo.list().len());
    }

    #[test]
    fn test_set_status_touches_only_target() {
        let mut repo = RoomRepository::new(seed::rooms());
        let before = repo.list().to_vec();

        for status in [
            RoomStatus::Maintenance,
            RoomStatus::Reserved,
            RoomStatus::Occupied,
            RoomStatus::Available,
        ] {
            let updated = repo.set_status(3, status).unwrap();
            assert_eq!(updated.status, status);

            for (old, new) in before.iter().zip(repo.list()) {
                if old.id == 3 {
                    assert_eq!(new.number, old.number);
                    assert_eq!(new.price, old.price);
                    assert_eq!(new.amenities, old.amenities);
                } else {
                    assert_eq!(new, old);
                }
            }
        }
        assert_eq!(repo.list().len(), before.len());
    }

    #[test]
    fn test_set_status_unknown_id() {
        let mut repo = RoomRepository::new(seed::rooms());
        let err = repo.set_status(99, RoomStatus::Occupied).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "Room", id: 99 }));
    }
}
