//! # Stay Pricing
//!
//! Night counts and the nightly rate card used to price reservations and
//! invoices.
//!
//! ```text
//!   check-in 2024-01-15 ─┐
//!                        ├─► nights = |out − in| = 3
//!   check-out 2024-01-18 ┘
//!
//!   room type "Suite" ──► rate card ──► $350
//!
//!   total = 3 × $350 = $1,050
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::RoomType;

/// Number of nights between two dates, ignoring their order.
///
/// ```rust
/// use chrono::NaiveDate;
/// use hotel_core::stay::night_count;
///
/// let a = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
/// assert_eq!(night_count(a, b), 3);
/// assert_eq!(night_count(b, a), 3);
/// ```
pub fn night_count(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = check_out.signed_duration_since(check_in).num_days();
    u32::try_from(days.unsigned_abs()).unwrap_or(u32::MAX)
}

// =============================================================================
// Rate Card
// =============================================================================

/// Nightly rate per room type.
///
/// Anything that is not exactly "Suite" or "Double" (including "Single",
/// an empty type, or an unknown label) is charged the standard rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub standard: Money,
    pub double: Money,
    pub suite: Money,
}

impl Default for RateCard {
    fn default() -> Self {
        RateCard {
            standard: Money::from_dollars(120),
            double: Money::from_dollars(180),
            suite: Money::from_dollars(350),
        }
    }
}

impl RateCard {
    pub fn rate_for(&self, room_type: &str) -> Money {
        match RoomType::from_label(room_type) {
            Some(RoomType::Suite) => self.suite,
            Some(RoomType::Double) => self.double,
            Some(RoomType::Single) | None => self.standard,
        }
    }
}

// =============================================================================
// Stay Quote
// =============================================================================

/// The priced result of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights: u32,
    pub rate: Money,
    pub total: Money,
}

impl StayQuote {
    pub fn new(
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: &str,
        rates: &RateCard,
    ) -> Self {
        let nights = night_count(check_in, check_out);
        let rate = rates.rate_for(room_type);
        StayQuote {
            nights,
            rate,
            total: rate.times_nights(nights),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn quote(room_type: &str) -> StayQuote {
        StayQuote::new(
            date("2024-01-15"),
            date("2024-01-18"),
            room_type,
            &RateCard::default(),
        )
    }

    #[test]
    fn test_quote_by_room_type() {
        assert_eq!(quote("Suite").total, Money::from_dollars(1050));
        assert_eq!(quote("Double").total, Money::from_dollars(540));
        assert_eq!(quote("Single").total, Money::from_dollars(360));
        assert_eq!(quote("Unknown").total, Money::from_dollars(360));
        assert_eq!(quote("").total, Money::from_dollars(360));
        assert_eq!(quote("suite").total, Money::from_dollars(360));
    }

    #[test]
    fn test_inverted_dates_use_absolute_length() {
        let q = StayQuote::new(
            date("2024-01-18"),
            date("2024-01-15"),
            "Double",
            &RateCard::default(),
        );
        assert_eq!(q.nights, 3);
        assert_eq!(q.total, Money::from_dollars(540));
    }

    #[test]
    fn test_same_day_and_month_boundaries() {
        assert_eq!(night_count(date("2024-03-01"), date("2024-03-01")), 0);
        // 2024 is a leap year
        assert_eq!(night_count(date("2024-02-28"), date("2024-03-01")), 2);
        assert_eq!(night_count(date("2023-12-30"), date("2024-01-02")), 3);
    }

    #[test]
    fn test_custom_rate_card() {
        let rates = RateCard {
            standard: Money::from_dollars(100),
            double: Money::from_dollars(150),
            suite: Money::from_dollars(400),
        };
        let q = StayQuote::new(date("2024-01-15"), date("2024-01-17"), "Suite", &rates);
        assert_eq!(q.rate, Money::from_dollars(400));
        assert_eq!(q.total, Money::from_dollars(800));
    }
}
