//! Feature settings row model and DTO.

use motorhub_core::feature_settings::FeatureSettings;
use motorhub_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// The singleton row from the `feature_settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct FeatureSettingsRow {
    pub vehicle_listings_enabled: bool,
    pub subscriptions_enabled: bool,
    pub price_prediction_enabled: bool,
    pub maintenance_mode: bool,
    pub maintenance_message: String,
    pub updated_by: Option<DbId>,
    pub updated_at: Timestamp,
}

impl From<FeatureSettingsRow> for FeatureSettings {
    fn from(row: FeatureSettingsRow) -> Self {
        Self {
            vehicle_listings_enabled: Some(row.vehicle_listings_enabled),
            subscriptions_enabled: Some(row.subscriptions_enabled),
            price_prediction_enabled: Some(row.price_prediction_enabled),
            maintenance_mode: Some(row.maintenance_mode),
            maintenance_message: Some(row.maintenance_message),
        }
    }
}

/// DTO for updating the feature settings. Omitted fields keep their
/// current value (or the column default when the row is first created).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeatureSettings {
    pub vehicle_listings_enabled: Option<bool>,
    pub subscriptions_enabled: Option<bool>,
    pub price_prediction_enabled: Option<bool>,
    pub maintenance_mode: Option<bool>,
    pub maintenance_message: Option<String>,
}
