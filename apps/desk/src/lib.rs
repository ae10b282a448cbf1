//! # Hotel Desk Library
//!
//! Core library for the hotel desk application: state, commands and startup.
//!
//! ## Module Organization
//! ```text
//! hotel_desk_lib/
//! ├── lib.rs            ◄─── You are here (startup, view rendering)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── stores.rs     ◄─── Shared record stores
//! │   ├── navigation.rs ◄─── Current view and sidebar
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── dashboard.rs  ◄─── Landing view
//! │   ├── room.rs       ◄─── Room commands
//! │   ├── guest.rs      ◄─── Guest commands
//! │   ├── reservation.rs◄─── Reservation commands
//! │   ├── billing.rs    ◄─── Invoice commands
//! │   ├── navigation.rs ◄─── View selection
//! │   └── config.rs     ◄─── Config retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::navigation::NavigationResponse;
use error::{ApiError, ApiResult};
use state::{ConfigState, NavigationState, StoreState, View};

// =============================================================================
// Command Line
// =============================================================================

const USAGE: &str = "\
Usage: hotel-desk [VIEW] [OPTIONS]

Views: dashboard (default), rooms, guests, reservations, billing

Options:
  -c, --config <PATH>   Config file (default: hotel.toml in the user config dir)
  -q, --query <TEXT>    Invoice search for the billing view
  -h, --help            Show this help message";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub view: Option<String>,
    pub config: Option<PathBuf>,
    pub query: Option<String>,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// Unrecognized flags are ignored; the first bare word is the view.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => parsed.config = args.next().map(PathBuf::from),
                "--query" | "-q" => parsed.query = args.next(),
                "--help" | "-h" => parsed.help = true,
                flag if flag.starts_with('-') => {}
                _ => {
                    if parsed.view.is_none() {
                        parsed.view = Some(arg);
                    }
                }
            }
        }

        parsed
    }
}

// =============================================================================
// Desk
// =============================================================================

/// The desk's state, one value per concern.
#[derive(Debug, Clone)]
pub struct Desk {
    pub config: ConfigState,
    pub stores: StoreState,
    pub navigation: NavigationState,
}

/// What the binary prints: the shell around one view's content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskResponse {
    pub hotel_name: String,
    pub navigation: NavigationResponse,
    pub content: serde_json::Value,
}

impl Desk {
    /// Seeded stores priced with the configured rate card.
    pub fn new(config: ConfigState) -> Self {
        Desk {
            stores: StoreState::seeded(config.rates),
            navigation: NavigationState::new(),
            config,
        }
    }

    /// Renders the current view's command response.
    pub fn render(&self, query: Option<&str>, today: NaiveDate) -> ApiResult<DeskResponse> {
        let content = match self.navigation.current() {
            View::Dashboard => serde_json::to_value(commands::dashboard::get_dashboard(
                &self.stores,
                &self.config,
                today,
            ))?,
            View::Rooms => serde_json::to_value(commands::room::list_rooms(&self.stores))?,
            View::Guests => serde_json::to_value(commands::guest::list_guests(&self.stores))?,
            View::Reservations => serde_json::to_value(
                commands::reservation::list_reservations(&self.stores),
            )?,
            View::Billing => serde_json::to_value(commands::billing::list_invoices(
                &self.stores,
                &self.config,
                query,
            ))?,
        };

        Ok(DeskResponse {
            hotel_name: self.config.hotel_name.clone(),
            navigation: commands::navigation::get_navigation(&self.navigation),
            content,
        })
    }
}

// =============================================================================
// Startup
// =============================================================================

/// Runs the desk.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (stderr, RUST_LOG or info,hotel=debug)          │
/// │  2. Parse arguments                                                    │
/// │  3. Load config (env > file > defaults), validate                      │
/// │  4. Seed the stores with the configured rate card                      │
/// │  5. Select the requested view (unknown → dashboard)                    │
/// │  6. Print the view as pretty JSON on stdout                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse(std::env::args().skip(1));
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    info!("Starting Hotel Desk");

    let config = match ConfigState::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(hotel_name = %config.hotel_name, tax_rate_bps = config.tax_rate_bps, "Config loaded");

    let desk = Desk::new(config);
    let view_id = args.view.as_deref().unwrap_or(View::Dashboard.id());
    commands::navigation::select_view(&desk.navigation, view_id);

    let today = chrono::Local::now().date_naive();
    let rendered = desk
        .render(args.query.as_deref(), today)
        .and_then(|response| serde_json::to_string_pretty(&response).map_err(ApiError::from));

    match rendered {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hotel_store=trace` - Trace one crate only
/// - Default: INFO, DEBUG for the hotel crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hotel=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(args(&[]), CliArgs::default());

        let parsed = args(&["billing", "--query", "205", "-c", "/tmp/hotel.toml"]);
        assert_eq!(parsed.view.as_deref(), Some("billing"));
        assert_eq!(parsed.query.as_deref(), Some("205"));
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/hotel.toml")));
        assert!(!parsed.help);

        assert!(args(&["--help"]).help);
        assert_eq!(args(&["rooms", "guests"]).view.as_deref(), Some("rooms"));
    }

    #[test]
    fn test_render_dashboard_by_default() {
        let desk = Desk::new(ConfigState::default());
        let response = desk.render(None, today()).unwrap();

        assert_eq!(response.navigation.current, View::Dashboard);
        assert_eq!(response.content["stats"]["totalRooms"], 5);
        assert_eq!(response.content["revenueDisplay"], "$3883.00");
    }

    #[test]
    fn test_render_billing_with_query() {
        let desk = Desk::new(ConfigState::default());
        commands::navigation::select_view(&desk.navigation, "billing");

        let response = desk.render(Some("205"), today()).unwrap();
        let invoices = response.content["invoices"].as_array().unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0]["roomNumber"], "205");
        assert_eq!(response.content["totals"]["invoiceCount"], 4);
    }

    #[test]
    fn test_render_unknown_view_is_dashboard() {
        let desk = Desk::new(ConfigState::default());
        commands::navigation::select_view(&desk.navigation, "spa");

        let response = desk.render(None, today()).unwrap();
        assert_eq!(response.navigation.current, View::Dashboard);
        assert!(response.content.get("stats").is_some());
    }

    #[test]
    fn test_render_rooms_reflects_mutation() {
        let desk = Desk::new(ConfigState::default());
        commands::room::set_room_status(&desk.stores, 1, "occupied").unwrap();
        commands::navigation::select_view(&desk.navigation, "rooms");

        let response = desk.render(None, today()).unwrap();
        assert_eq!(response.content[0]["status"], "occupied");
    }
}
