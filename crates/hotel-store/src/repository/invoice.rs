//! # Invoice Repository
//!
//! ## Key Operations
//! - Payment status changes (paid / unpaid / partially-paid, any order)
//! - Revenue totals over the whole ledger
//! - Search by guest name, room number or invoice number
//! - Issue a new invoice for a reservation

use chrono::NaiveDate;
use tracing::debug;

use hotel_core::billing::{filter_invoices, invoice_for_reservation};
use hotel_core::{BillingTotals, Invoice, PaymentStatus, RateCard, Reservation, Status, TaxRate};

use super::Collection;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    invoices: Collection<Invoice>,
}

impl InvoiceRepository {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        InvoiceRepository {
            invoices: Collection::new(invoices),
        }
    }

    pub fn set_status(&mut self, id: u32, status: PaymentStatus) -> StoreResult<Invoice> {
        let current = self.invoices.require(id)?.payment_status;
        let status = current.transition_to(status)?;

        let invoice = self.invoices.update(id, |invoice| {
            invoice.payment_status = status;
        })?;
        debug!(invoice_id = id, from = %current, to = %status, "Payment status changed");
        Ok(invoice.clone())
    }

    /// Totals across every invoice, independent of any search.
    pub fn totals(&self) -> BillingTotals {
        BillingTotals::from_invoices(self.invoices.as_slice())
    }

    /// Invoices matching `query`, in ledger order. An empty query returns all.
    ///
    /// Any string is accepted and used as given.
    pub fn search(&self, query: &str) -> Vec<&Invoice> {
        let hits = filter_invoices(self.invoices.as_slice(), query);
        debug!(query_len = query.len(), count = hits.len(), "Invoice search");
        hits
    }

    /// Issues an unpaid invoice for `reservation` under the next invoice number.
    pub fn issue_for(
        &mut self,
        reservation: &Reservation,
        rates: &RateCard,
        tax_rate: TaxRate,
        invoice_date: NaiveDate,
    ) -> Invoice {
        let id = self.invoices.allocate_id();
        let invoice = invoice_for_reservation(id, reservation, rates, tax_rate, invoice_date);
        let invoice = self.invoices.push(invoice).clone();

        debug!(
            invoice_id = invoice.id,
            reservation_id = reservation.id,
            total = %invoice.total_amount,
            "Invoice issued"
        );
        invoice
    }

    pub fn get(&self, id: u32) -> StoreResult<&Invoice> {
        self.invoices.require(id)
    }

    pub fn list(&self) -> &[Invoice] {
        self.invoices.as_slice()
    }
}
