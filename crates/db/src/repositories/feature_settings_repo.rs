//! Repository for the singleton `feature_settings` table.

use motorhub_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::feature_settings::{FeatureSettingsRow, UpdateFeatureSettings};

const COLUMNS: &str = "vehicle_listings_enabled, subscriptions_enabled, price_prediction_enabled, \
                       maintenance_mode, maintenance_message, updated_by, updated_at";

/// Provides access to the process-wide feature settings row.
pub struct FeatureSettingsRepo;

impl FeatureSettingsRepo {
    /// Load the settings row, or `None` if it has never been written.
    pub async fn get<'e, E>(executor: E) -> Result<Option<FeatureSettingsRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM feature_settings WHERE id = 1");
        sqlx::query_as::<_, FeatureSettingsRow>(&query)
            .fetch_optional(executor)
            .await
    }

    /// Create or update the settings row. Only non-`None` fields are applied.
    pub async fn upsert<'e, E>(
        executor: E,
        input: &UpdateFeatureSettings,
        updated_by: DbId,
    ) -> Result<FeatureSettingsRow, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO feature_settings (
                id, vehicle_listings_enabled, subscriptions_enabled,
                price_prediction_enabled, maintenance_mode, maintenance_message, updated_by
             ) VALUES (
                1,
                COALESCE($1, TRUE),
                COALESCE($2, TRUE),
                COALESCE($3, TRUE),
                COALESCE($4, FALSE),
                COALESCE($5, ''),
                $6
             )
             ON CONFLICT (id) DO UPDATE SET
                vehicle_listings_enabled = COALESCE($1, feature_settings.vehicle_listings_enabled),
                subscriptions_enabled = COALESCE($2, feature_settings.subscriptions_enabled),
                price_prediction_enabled = COALESCE($3, feature_settings.price_prediction_enabled),
                maintenance_mode = COALESCE($4, feature_settings.maintenance_mode),
                maintenance_message = COALESCE($5, feature_settings.maintenance_message),
                updated_by = $6,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeatureSettingsRow>(&query)
            .bind(input.vehicle_listings_enabled)
            .bind(input.subscriptions_enabled)
            .bind(input.price_prediction_enabled)
            .bind(input.maintenance_mode)
            .bind(&input.maintenance_message)
            .bind(updated_by)
            .fetch_one(executor)
            .await
    }
}
