//! # Validation Module
//!
//! Turns raw form input into checked values before a record is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Form fields, immediate feedback                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields non-empty (stored exactly as entered)             │
//! │  ├── Price is a positive dollar amount                                 │
//! │  └── Dates are YYYY-MM-DD                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository                                                   │
//! │  └── Assigns the id and appends; never sees unchecked input            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Check-in / check-out ordering is deliberately not validated: an inverted
//! stay is priced on its absolute length.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewGuest, NewReservation, NewRoom};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Field Validators
// =============================================================================

/// Returns the value unchanged, or `Required` if it is empty.
///
/// Whitespace counts as a value: a field holding `" "` is present.
///
/// ```rust
/// use hotel_core::validation::require;
///
/// assert_eq!(require("room number", " 101 ").unwrap(), " 101 ");
/// assert!(require("room number", " ").is_ok());
/// assert!(require("room number", "").is_err());
/// ```
pub fn require<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Parses a dollar amount such as `"120"` or `"99.50"` into a positive price.
///
/// Surrounding whitespace is ignored when parsing.
pub fn parse_price(field: &str, raw: &str) -> ValidationResult<Money> {
    let raw = require(field, raw)?.trim();

    let invalid = || ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected a dollar amount like 120 or 99.50".to_string(),
    };

    let (major, minor) = match raw.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (raw, ""),
    };

    if major.is_empty()
        || minor.len() > 2
        || !major.chars().all(|c| c.is_ascii_digit())
        || !minor.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let dollars: i64 = major.parse().map_err(|_| invalid())?;
    let cents: i64 = match minor.len() {
        0 => 0,
        1 => minor.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => minor.parse().map_err(|_| invalid())?,
    };

    let price = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .map(Money::from_cents)
        .ok_or_else(invalid)?;

    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(price)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    let raw = require(field, raw)?.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected a date like 2024-01-15".to_string(),
    })
}

// =============================================================================
// Form Validators
// =============================================================================

/// A room form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRoom {
    pub number: String,
    pub room_type: String,
    pub price: Money,
}

/// A guest form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGuest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
}

/// A reservation form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReservation {
    pub guest_name: String,
    pub guest_email: String,
    pub room_number: String,
    pub room_type: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

/// Room number, type and price are all required.
pub fn validate_new_room(form: &NewRoom) -> ValidationResult<ValidRoom> {
    let number = require("room number", &form.number)?;
    let room_type = require("room type", &form.room_type)?;
    let price = parse_price("price", &form.price)?;

    Ok(ValidRoom {
        number: number.to_string(),
        room_type: room_type.to_string(),
        price,
    })
}

/// Every guest field is required.
pub fn validate_new_guest(form: &NewGuest) -> ValidationResult<ValidGuest> {
    Ok(ValidGuest {
        name: require("name", &form.name)?.to_string(),
        email: require("email", &form.email)?.to_string(),
        phone: require("phone", &form.phone)?.to_string(),
        id_number: require("ID number", &form.id_number)?.to_string(),
    })
}

/// Guest name, room number and both dates are required.
/// Email and room type may be left blank.
pub fn validate_new_reservation(form: &NewReservation) -> ValidationResult<ValidReservation> {
    let guest_name = require("guest name", &form.guest_name)?;
    let room_number = require("room number", &form.room_number)?;
    let check_in_date = parse_date("check-in date", &form.check_in_date)?;
    let check_out_date = parse_date("check-out date", &form.check_out_date)?;

    Ok(ValidReservation {
        guest_name: guest_name.to_string(),
        guest_email: form.guest_email.clone(),
        room_number: room_number.to_string(),
        room_type: form.room_type.clone(),
        check_in_date,
        check_out_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_form(number: &str, room_type: &str, price: &str) -> NewRoom {
        NewRoom {
            number: number.into(),
            room_type: room_type.into(),
            price: price.into(),
        }
    }

    fn reservation_form(check_in: &str, check_out: &str) -> NewReservation {
        NewReservation {
            guest_name: "John Smith".into(),
            guest_email: String::new(),
            room_number: "205".into(),
            room_type: String::new(),
            check_in_date: check_in.into(),
            check_out_date: check_out.into(),
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("price", "120").unwrap(), Money::from_dollars(120));
        assert_eq!(parse_price("price", "99.5").unwrap(), Money::from_cents(9950));
        assert_eq!(parse_price("price", "99.05").unwrap(), Money::from_cents(9905));

        assert!(matches!(
            parse_price("price", "0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_price("price", ""),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["-5", "12abc", "1.234", ".50", "1,200"] {
            assert!(
                matches!(
                    parse_price("price", bad),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_room_form_requires_every_field() {
        assert!(validate_new_room(&room_form("101", "Single", "120")).is_ok());

        let missing = [
            room_form("", "Single", "120"),
            room_form("101", "", "120"),
            room_form("101", "Single", ""),
        ];
        for form in &missing {
            assert!(matches!(
                validate_new_room(form),
                Err(ValidationError::Required { .. })
            ));
        }
    }

    #[test]
    fn test_guest_form_requires_every_field() {
        let full = NewGuest {
            name: "Maria Garcia".into(),
            email: "maria.garcia@email.com".into(),
            phone: "+1 (555) 987-6543".into(),
            id_number: "ID987654321".into(),
        };
        assert!(validate_new_guest(&full).is_ok());

        let mut no_phone = full.clone();
        no_phone.phone.clear();
        assert_eq!(
            validate_new_guest(&no_phone).unwrap_err(),
            ValidationError::Required {
                field: "phone".into()
            }
        );
    }

    #[test]
    fn test_reservation_form_optional_fields() {
        let form = reservation_form("2024-01-15", "2024-01-18");
        let valid = validate_new_reservation(&form).unwrap();
        assert_eq!(valid.guest_email, "");
        assert_eq!(valid.room_type, "");
        assert_eq!(
            valid.check_in_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_reservation_form_dates() {
        assert!(matches!(
            validate_new_reservation(&reservation_form("", "2024-01-18")),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_new_reservation(&reservation_form("01/15/2024", "2024-01-18")),
            Err(ValidationError::InvalidFormat { .. })
        ));
        // Inverted dates are accepted
        let inverted = reservation_form("2024-01-18", "2024-01-15");
        assert!(validate_new_reservation(&inverted).is_ok());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let blank = NewGuest {
            name: " ".into(),
            email: " ".into(),
            phone: " ".into(),
            id_number: " ".into(),
        };
        assert_eq!(validate_new_guest(&blank).unwrap().name, " ");

        let room = validate_new_room(&room_form(" ", "\t", "120")).unwrap();
        assert_eq!(room.number, " ");
        assert_eq!(room.room_type, "\t");
    }

    #[test]
    fn test_padded_values_kept_as_entered() {
        let mut form = reservation_form("2024-01-15", "2024-01-18");
        form.guest_name = " John Smith ".into();
        form.room_type = " Suite".into();
        form.guest_email = "john@email.com ".into();

        let valid = validate_new_reservation(&form).unwrap();
        assert_eq!(valid.guest_name, " John Smith ");
        assert_eq!(valid.room_type, " Suite");
        assert_eq!(valid.guest_email, "john@email.com ");

        assert_eq!(
            parse_price("price", " 120 ").unwrap(),
            Money::from_dollars(120)
        );
    }
}
