//! # Billing
//!
//! Revenue aggregates, the invoice search filter, and invoice generation
//! from a reservation.
//!
//! ## Aggregate Buckets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Invoice status      total_revenue   paid_amount   outstanding         │
//! │  ──────────────      ─────────────   ───────────   ───────────         │
//! │  paid                     ✔               ✔                            │
//! │  unpaid                   ✔                             ✔              │
//! │  partially-paid           ✔                                            │
//! │                                                                         │
//! │  Partially-paid folios sit in neither paid nor outstanding. They are  │
//! │  reported on their own in `partially_paid_amount`.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, TaxRate};
use crate::stay::RateCard;
use crate::status::PaymentStatus;
use crate::types::{Invoice, Reservation};

// =============================================================================
// Totals
// =============================================================================

/// Summary figures shown above the invoice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillingTotals {
    pub invoice_count: u32,
    pub total_revenue: Money,
    pub paid_amount: Money,
    pub outstanding: Money,
    pub partially_paid_amount: Money,
}

impl BillingTotals {
    /// Aggregates every invoice given, regardless of any active filter.
    ///
    /// ```rust
    /// use hotel_core::{BillingTotals, Invoice};
    ///
    /// let none: Vec<Invoice> = Vec::new();
    /// let totals = BillingTotals::from_invoices(&none);
    /// assert!(totals.total_revenue.is_zero());
    /// ```
    pub fn from_invoices<'a, I>(invoices: I) -> Self
    where
        I: IntoIterator<Item = &'a Invoice>,
    {
        let mut totals = BillingTotals::default();

        for invoice in invoices {
            totals.invoice_count += 1;
            totals.total_revenue += invoice.total_amount;
            match invoice.payment_status {
                PaymentStatus::Paid => totals.paid_amount += invoice.total_amount,
                PaymentStatus::Unpaid => totals.outstanding += invoice.total_amount,
                PaymentStatus::PartiallyPaid => {
                    totals.partially_paid_amount += invoice.total_amount
                }
            }
        }

        totals
    }
}

// =============================================================================
// Search
// =============================================================================

/// Whether `invoice` matches a search query, used exactly as given.
///
/// Guest name matches case-insensitively; room number and the invoice id's
/// decimal text match as plain substrings. An empty query matches everything.
pub fn invoice_matches(invoice: &Invoice, query: &str) -> bool {
    invoice
        .guest_name
        .to_lowercase()
        .contains(&query.to_lowercase())
        || invoice.room_number.contains(query)
        || invoice.id.to_string().contains(query)
}

/// Filters invoices, keeping ledger order.
pub fn filter_invoices<'a>(invoices: &'a [Invoice], query: &str) -> Vec<&'a Invoice> {
    invoices
        .iter()
        .filter(|invoice| invoice_matches(invoice, query))
        .collect()
}

// =============================================================================
// Invoice Generation
// =============================================================================

/// Builds an unpaid invoice for a reservation.
///
/// The nightly rate comes from `rates` for the reservation's room type;
/// taxes are `tax_rate` of the subtotal.
pub fn invoice_for_reservation(
    id: u32,
    reservation: &Reservation,
    rates: &RateCard,
    tax_rate: TaxRate,
    invoice_date: NaiveDate,
) -> Invoice {
    let room_rate = rates.rate_for(&reservation.room_type);
    let subtotal = room_rate.times_nights(reservation.nights);
    let taxes = subtotal.calculate_tax(tax_rate);

    Invoice {
        id,
        guest_name: reservation.guest_name.clone(),
        room_number: reservation.room_number.clone(),
        check_in_date: reservation.check_in_date,
        check_out_date: reservation.check_out_date,
        room_rate,
        nights: reservation.nights,
        subtotal,
        taxes,
        total_amount: subtotal + taxes,
        payment_status: PaymentStatus::Unpaid,
        invoice_date,
    }
}
