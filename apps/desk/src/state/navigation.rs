//! # Navigation State
//!
//! Which view the desk is showing.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────────────────────────────┐
//! │  Sidebar         │                                                      │
//! │  ──────────      │                                                      │
//! │  ▶ Dashboard     │   current() == View::Dashboard                       │
//! │    Rooms         │                                                      │
//! │    Guests        │   select("billing")  → View::Billing                 │
//! │    Reservations  │   select("lobby")    → View::Dashboard               │
//! │    Billing       │                                                      │
//! └──────────────────┴──────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// =============================================================================
// View
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Rooms,
    Guests,
    Reservations,
    Billing,
}

impl View {
    /// Sidebar order.
    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Rooms,
            View::Guests,
            View::Reservations,
            View::Billing,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Rooms => "rooms",
            View::Guests => "guests",
            View::Reservations => "reservations",
            View::Billing => "billing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Rooms => "Rooms",
            View::Guests => "Guests",
            View::Reservations => "Reservations",
            View::Billing => "Billing",
        }
    }

    /// Exact id match.
    pub fn from_id(id: &str) -> Option<View> {
        View::all().iter().copied().find(|view| view.id() == id)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub active: bool,
}

// =============================================================================
// Navigation State
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Arc<Mutex<View>>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switches to the view with `id`. Unknown ids land on the dashboard.
    pub fn select(&self, id: &str) -> View {
        let view = View::from_id(id).unwrap_or_else(|| {
            warn!(view_id = %id, "Unknown view, showing dashboard");
            View::Dashboard
        });

        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *current, view);
        debug!(from = %previous, to = %view, "View selected");
        view
    }

    /// Sidebar entries with the current view marked active.
    pub fn items(&self) -> Vec<NavItem> {
        let current = self.current();
        View::all()
            .iter()
            .map(|view| NavItem {
                id: view.id().to_string(),
                label: view.label().to_string(),
                active: *view == current,
            })
            .collect()
    }
}
