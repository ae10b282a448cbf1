//! # Billing Commands
//!
//! ## Billing View
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Total Revenue $3883.00   Paid $2134.00   Outstanding $1155.00         │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  🔍 "205"                                                               │
//! │  #1001  John Smith   Room 205   3 nights   $594.00   paid              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The totals always cover the whole ledger; the search only narrows the
//! invoice list.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use hotel_core::{BillingTotals, Invoice, PaymentStatus};

use crate::error::ApiResult;
use crate::state::{ConfigState, StoreState};

/// Totals as display strings, formatted with the configured currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDisplay {
    pub total_revenue: String,
    pub paid_amount: String,
    pub outstanding: String,
    pub partially_paid_amount: String,
}

impl TotalsDisplay {
    pub fn new(totals: &BillingTotals, config: &ConfigState) -> Self {
        TotalsDisplay {
            total_revenue: config.format_currency(totals.total_revenue),
            paid_amount: config.format_currency(totals.paid_amount),
            outstanding: config.format_currency(totals.outstanding),
            partially_paid_amount: config.format_currency(totals.partially_paid_amount),
        }
    }
}

/// Billing view payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListResponse {
    /// The query the list was filtered by, as given ("" for none)
    pub query: String,
    pub invoices: Vec<Invoice>,
    pub totals: BillingTotals,
    pub display: TotalsDisplay,
}

/// Lists invoices, optionally filtered by guest name, room number or
/// invoice number. Any query is accepted.
pub fn list_invoices(
    stores: &StoreState,
    config: &ConfigState,
    query: Option<&str>,
) -> InvoiceListResponse {
    let query = query.unwrap_or_default();
    debug!(query = %query, "list_invoices command");

    let (invoices, totals) = stores.with_stores(|s| {
        let invoices: Vec<Invoice> = s.invoices().search(query).into_iter().cloned().collect();
        (invoices, s.invoices().totals())
    });

    InvoiceListResponse {
        query: query.to_string(),
        display: TotalsDisplay::new(&totals, config),
        invoices,
        totals,
    }
}

/// Sets an invoice's payment status from its label.
pub fn set_invoice_status(
    stores: &StoreState,
    invoice_id: u32,
    status: &str,
) -> ApiResult<Invoice> {
    debug!(invoice_id, status = %status, "set_invoice_status command");
    let status: PaymentStatus = status.parse()?;
    Ok(stores.with_stores_mut(|s| s.invoices_mut().set_status(invoice_id, status))?)
}

/// Issues an unpaid invoice for a reservation at the configured tax rate.
pub fn generate_invoice(
    stores: &StoreState,
    config: &ConfigState,
    reservation_id: u32,
    invoice_date: NaiveDate,
) -> ApiResult<Invoice> {
    debug!(reservation_id, %invoice_date, "generate_invoice command");
    let tax_rate = config.tax_rate();
    Ok(stores.with_stores_mut(|s| s.generate_invoice(reservation_id, tax_rate, invoice_date))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use hotel_core::Money;

    fn setup() -> (StoreState, ConfigState) {
        let config = ConfigState::default();
        (StoreState::seeded(config.rates), config)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_list_all_with_totals() {
        let (stores, config) = setup();
        let response = list_invoices(&stores, &config, None);

        assert_eq!(response.invoices.len(), 4);
        assert_eq!(response.totals.total_revenue, Money::from_dollars(3883));
        assert_eq!(response.display.paid_amount, "$2134.00");
        assert_eq!(response.display.outstanding, "$1155.00");
        assert_eq!(response.display.partially_paid_amount, "$594.00");
    }

    #[test]
    fn test_query_narrows_list_not_totals() {
        let (stores, config) = setup();
        let response = list_invoices(&stores, &config, Some("maria"));

        assert_eq!(response.query, "maria");
        assert_eq!(response.invoices.len(), 1);
        assert_eq!(response.invoices[0].id, 1002);
        assert_eq!(response.totals.invoice_count, 4);
    }

    #[test]
    fn test_any_query_is_accepted() {
        let (stores, config) = setup();

        let long = "x".repeat(101);
        let response = list_invoices(&stores, &config, Some(&long));
        assert!(response.invoices.is_empty());
        assert_eq!(response.totals.invoice_count, 4);

        let padded = list_invoices(&stores, &config, Some(" maria "));
        assert_eq!(padded.query, " maria ");
        assert!(padded.invoices.is_empty());
    }

    #[test]
    fn test_mark_paid() {
        let (stores, config) = setup();
        set_invoice_status(&stores, 1003, "paid").unwrap();

        let response = list_invoices(&stores, &config, None);
        assert!(response.totals.outstanding.is_zero());
        assert_eq!(response.display.outstanding, "$0.00");
    }

    #[test]
    fn test_generate_invoice_with_configured_tax() {
        let (stores, mut config) = setup();
        config.tax_rate_bps = 500;

        let invoice = generate_invoice(&stores, &config, 1, date("2024-01-18")).unwrap();
        assert_eq!(invoice.id, 1005);
        assert_eq!(invoice.subtotal, Money::from_dollars(540));
        assert_eq!(invoice.taxes, Money::from_dollars(27));
        assert_eq!(invoice.total_amount, Money::from_dollars(567));

        let err = generate_invoice(&stores, &config, 9, date("2024-01-18")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
