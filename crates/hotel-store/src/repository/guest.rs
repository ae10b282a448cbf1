//! # Guest Repository
//!
//! Guests are registered and listed. Their status is not changed from the
//! desk; it comes from the seed records or stays `upcoming`.

use tracing::debug;

use hotel_core::validation::validate_new_guest;
use hotel_core::{Guest, NewGuest};

use super::Collection;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct GuestRepository {
    guests: Collection<Guest>,
}

impl GuestRepository {
    pub fn new(guests: Vec<Guest>) -> Self {
        GuestRepository {
            guests: Collection::new(guests),
        }
    }

    /// Registers a guest. All four fields are required.
    pub fn add(&mut self, form: &NewGuest) -> StoreResult<Guest> {
        let valid = validate_new_guest(form)?;
        let id = self.guests.allocate_id();
        let guest = self.guests.push(Guest::create(id, valid)).clone();

        debug!(guest_id = guest.id, "Guest registered");
        Ok(guest)
    }

    pub fn get(&self, id: u32) -> StoreResult<&Guest> {
        self.guests.require(id)
    }

    pub fn list(&self) -> &[Guest] {
        self.guests.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use hotel_core::GuestStatus;

    fn form() -> NewGuest {
        NewGuest {
            name: "Lena Fischer".into(),
            email: "lena.fischer@email.com".into(),
            phone: "+49 30 555 0101".into(),
            id_number: "ID555000111".into(),
        }
    }

    #[test]
    fn test_add_guest() {
        let mut repo = GuestRepository::new(seed::guests());
        let guest = repo.add(&form()).unwrap();

        assert_eq!(guest.id, 4);
        assert_eq!(guest.status, GuestStatus::Upcoming);
        assert_eq!(guest.total_stays, 0);
        assert_eq!(repo.list().len(), 4);
        assert_eq!(repo.get(4).unwrap(), &guest);
    }

    #[test]
    fn test_add_guest_missing_field_is_noop() {
        let mut repo = GuestRepository::new(seed::guests());

        let mut no_email = form();
        no_email.email.clear();
        let mut no_id = form();
        no_id.id_number.clear();

        assert!(repo.add(&no_email).unwrap_err().is_validation());
        assert!(repo.add(&no_id).unwrap_err().is_validation());
        assert_eq!(repo.list().len(), 3);
    }

    #[test]
    fn test_whitespace_fields_are_added_as_entered() {
        let mut repo = GuestRepository::new(seed::guests());
        let blank = NewGuest {
            name: " ".into(),
            email: " ".into(),
            phone: " ".into(),
            id_number: " ".into(),
        };

        let guest = repo.add(&blank).unwrap();
        assert_eq!(guest.name, " ");
        assert_eq!(repo.list().len(), 4);
    }
}
