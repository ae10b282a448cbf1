//! # Navigation Commands

use serde::Serialize;
use tracing::debug;

use crate::state::{NavItem, NavigationState, View};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub current: View,
    pub items: Vec<NavItem>,
}

impl From<&NavigationState> for NavigationResponse {
    fn from(nav: &NavigationState) -> Self {
        NavigationResponse {
            current: nav.current(),
            items: nav.items(),
        }
    }
}

pub fn get_navigation(nav: &NavigationState) -> NavigationResponse {
    debug!("get_navigation command");
    NavigationResponse::from(nav)
}

/// Switches the active view. Unknown ids show the dashboard.
pub fn select_view(nav: &NavigationState, view_id: &str) -> NavigationResponse {
    debug!(view_id = %view_id, "select_view command");
    nav.select(view_id);
    NavigationResponse::from(nav)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_view_response() {
        let nav = NavigationState::new();
        assert_eq!(get_navigation(&nav).current, View::Dashboard);

        let response = select_view(&nav, "guests");
        assert_eq!(response.current, View::Guests);
        assert!(response.items.iter().any(|i| i.id == "guests" && i.active));

        let json = serde_json::to_value(select_view(&nav, "nowhere")).unwrap();
        assert_eq!(json["current"], "dashboard");
    }
}
