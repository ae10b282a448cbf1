//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current desk configuration.
///
/// ## When Used
/// - Startup (hotel name in the header)
/// - Currency formatting on the presentation side
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_loaded_values() {
        let config = ConfigState {
            hotel_name: "Harbor View Inn".to_string(),
            tax_rate_bps: 700,
            ..ConfigState::default()
        };

        let returned = get_config(&config);
        assert_eq!(returned, config);
        assert_eq!(returned.tax_rate().bps(), 700);
    }
}
