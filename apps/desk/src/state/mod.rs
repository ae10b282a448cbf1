//! # State Module
//!
//! Application state for the desk, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │   StoreState     │  │ NavigationState  │  │   ConfigState    │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<      │  │  hotel_name      │      │
//! │  │   HotelStores    │  │    View          │  │  tax_rate_bps    │      │
//! │  │  >>              │  │  >>              │  │  rates           │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  ConfigState is read-only after startup.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod navigation;
mod stores;

pub use config::{ConfigError, ConfigResult, ConfigState};
pub use navigation::{NavItem, NavigationState, View};
pub use stores::StoreState;
