//! # Configuration State
//!
//! Desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HOTEL_*`)
//! 2. Config file (`hotel.toml`)
//! 3. Defaults (this file)
//!
//! ## Example Config File
//! ```toml
//! hotelName = "Harbor View Inn"
//! currencySymbol = "€"
//! currencyDecimals = 2
//! taxRateBps = 700
//!
//! [rates]
//! standard = 9500
//! double = 14000
//! suite = 29000
//! ```
//!
//! Read-only after startup, so no mutex is needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use hotel_core::{Money, RateCard, TaxRate, DEFAULT_TAX_RATE_BPS};

/// File name looked up in the platform config directory.
const CONFIG_FILE_NAME: &str = "hotel.toml";

/// 100% in basis points.
const MAX_TAX_RATE_BPS: u32 = 10_000;

/// Highest nightly rate a config may set ($1,000,000).
const MAX_NIGHTLY_RATE: Money = Money::from_dollars(1_000_000);

// =============================================================================
// Config Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Config State
// =============================================================================

/// Desk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the shell header
    pub hotel_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Tax applied to generated invoices, in basis points
    /// e.g., 1000 = 10%
    pub tax_rate_bps: u32,

    /// Nightly rates used to price bookings and invoices
    pub rates: RateCard,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            hotel_name: "Hotel Management System".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            rates: RateCard::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`path`, or `hotel.toml` in the platform config dir)
    /// 3. Environment variables
    pub fn load(path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`ConfigState::load`], reading overrides through `lookup`.
    pub fn load_with<F>(path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::read_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration as TOML.
    pub fn save(&self, path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Rejects tax rates above 100% and room rates outside $0.01 to $1,000,000.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tax_rate_bps > MAX_TAX_RATE_BPS {
            return Err(ConfigError::Invalid(format!(
                "tax rate {} bps exceeds 100%",
                self.tax_rate_bps
            )));
        }

        let rates = [
            ("standard", self.rates.standard),
            ("double", self.rates.double),
            ("suite", self.rates.suite),
        ];
        for (name, rate) in rates {
            if !rate.is_positive() {
                return Err(ConfigError::Invalid(format!(
                    "{} rate must be positive, got {}",
                    name,
                    rate.cents()
                )));
            }
            if rate > MAX_NIGHTLY_RATE {
                return Err(ConfigError::Invalid(format!(
                    "{} rate {} exceeds {}",
                    name, rate, MAX_NIGHTLY_RATE
                )));
            }
        }

        Ok(())
    }

    /// Applies `HOTEL_*` overrides. Unparseable values are ignored.
    ///
    /// ## Environment Variables
    /// - `HOTEL_NAME`: hotel name
    /// - `HOTEL_TAX_RATE`: tax as a percentage (e.g., "8.25")
    /// - `HOTEL_CURRENCY_SYMBOL`: currency symbol
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("HOTEL_NAME") {
            debug!(hotel_name = %name, "Overriding hotel name from environment");
            self.hotel_name = name;
        }

        if let Some(raw) = lookup("HOTEL_TAX_RATE") {
            match raw.trim().parse::<f64>() {
                Ok(pct) if pct >= 0.0 => {
                    self.tax_rate_bps = TaxRate::from_percentage(pct).bps();
                    debug!(
                        tax_rate_bps = self.tax_rate_bps,
                        "Overriding tax rate from environment"
                    );
                }
                _ => warn!(value = %raw, "Ignoring unparseable HOTEL_TAX_RATE"),
            }
        }

        if let Some(symbol) = lookup("HOTEL_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }
    }

    /// Returns `hotel.toml` in the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "hotel", "desk")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use hotel_core::Money;
    /// use hotel_desk_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(388_300)), "$3883.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();

        // Stored amounts always carry two decimals
        match self.currency_decimals {
            0 => format!("{}{}{}", sign, self.currency_symbol, (cents + 50) / 100),
            1 => format!(
                "{}{}{}.{}",
                sign,
                self.currency_symbol,
                cents / 100,
                (cents % 100) / 10
            ),
            _ => format!(
                "{}{}{}.{:02}",
                sign,
                self.currency_symbol,
                cents / 100,
                cents % 100
            ),
        }
    }
}
