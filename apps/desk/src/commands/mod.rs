//! # Commands Module
//!
//! Every operation the presentation layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── dashboard.rs    ◄─── Landing-view figures
//! ├── room.rs         ◄─── Room list, add, status
//! ├── guest.rs        ◄─── Guest list, add
//! ├── reservation.rs  ◄─── Reservation list, add, status
//! ├── billing.rs      ◄─── Invoice list/search, payment status, generation
//! ├── navigation.rs   ◄─── Sidebar and view selection
//! └── config.rs       ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fn set_room_status(                                                    │
//! │      stores: &StoreState,     ◄── Only the state it needs              │
//! │      room_id: u32,            ◄── From the caller                      │
//! │      status: &str,            ◄── Label, parsed here                   │
//! │  ) -> Result<Room, ApiError>                                            │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  { "id": 3, "number": "201", "status": "maintenance", ... }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod billing;
pub mod config;
pub mod dashboard;
pub mod guest;
pub mod navigation;
pub mod reservation;
pub mod room;
