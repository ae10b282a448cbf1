//! # Hotel Desk Entry Point
//!
//! ## Usage
//! ```bash
//! # Dashboard
//! hotel-desk
//!
//! # Billing view filtered by room number
//! hotel-desk billing --query 205
//!
//! # Custom config file
//! hotel-desk rooms --config ./hotel.toml
//! ```
//!
//! The selected view's data is printed as JSON on stdout; logs go to stderr.

fn main() -> std::process::ExitCode {
    // Setup lives in lib.rs for testability
    hotel_desk_lib::run()
}
