//! # Dashboard Commands
//!
//! The landing view: room occupancy, active guests, today's check-ins and
//! revenue, all derived from the stores at call time.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use hotel_core::DashboardStats;

use crate::state::{ConfigState, StoreState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub hotel_name: String,
    pub stats: DashboardStats,
    pub revenue_display: String,
}

/// Landing-view figures for `today`.
pub fn get_dashboard(
    stores: &StoreState,
    config: &ConfigState,
    today: NaiveDate,
) -> DashboardResponse {
    debug!(%today, "get_dashboard command");
    let stats = stores.with_stores(|s| s.dashboard(today));

    DashboardResponse {
        hotel_name: config.hotel_name.clone(),
        revenue_display: config.format_currency(stats.revenue),
        stats,
    }
}
