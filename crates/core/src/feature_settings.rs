//! Process-wide feature toggles served by `GET /settings/features`.

use serde::{Deserialize, Serialize};

/// Message shown while maintenance mode is on and no custom text is set.
pub const DEFAULT_MAINTENANCE_MESSAGE: &str =
    "We are performing scheduled maintenance. Please check back soon.";

/// Snapshot of the marketplace feature toggles.
///
/// Every field is optional on the wire: a response missing a field is
/// adopted as-is and the field reads as `None` downstream. Use the
/// accessor methods to fall back to the safe defaults per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_listings_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_prediction_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_message: Option<String>,
}

impl Default for FeatureSettings {
    /// The hardcoded safe configuration used whenever live settings are
    /// unavailable: the marketplace stays usable and maintenance is off.
    fn default() -> Self {
        Self {
            vehicle_listings_enabled: Some(true),
            subscriptions_enabled: Some(true),
            price_prediction_enabled: Some(true),
            maintenance_mode: Some(false),
            maintenance_message: Some(String::new()),
        }
    }
}

impl FeatureSettings {
    pub fn vehicle_listings_enabled(&self) -> bool {
        self.vehicle_listings_enabled.unwrap_or(true)
    }

    pub fn subscriptions_enabled(&self) -> bool {
        self.subscriptions_enabled.unwrap_or(true)
    }

    pub fn price_prediction_enabled(&self) -> bool {
        self.price_prediction_enabled.unwrap_or(true)
    }

    pub fn maintenance_mode(&self) -> bool {
        self.maintenance_mode.unwrap_or(false)
    }

    /// The banner text to show, or `None` when maintenance is off.
    pub fn maintenance_banner(&self) -> Option<&str> {
        if !self.maintenance_mode() {
            return None;
        }
        match self.maintenance_message.as_deref() {
            Some(msg) if !msg.trim().is_empty() => Some(msg),
            _ => Some(DEFAULT_MAINTENANCE_MESSAGE),
        }
    }
}
