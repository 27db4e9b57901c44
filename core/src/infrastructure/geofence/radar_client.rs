use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::domain::{
    common::{GeofenceConfig, entities::app_errors::CoreError},
    geofence::{ports::GeofenceClient, value_objects::CircularGeofence},
};

/// Radar-style geofence API: geofences live under `/geofences/{tag}/{externalId}`.
#[derive(Debug, Clone)]
pub struct RadarGeofenceClient {
    api_url: String,
    secret_key: String,
    tag: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct UpsertGeofenceRequest<'a> {
    description: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    /// `[longitude, latitude]`
    coordinates: [f64; 2],
    radius: u32,
}

impl RadarGeofenceClient {
    pub fn new(api_url: String, secret_key: String, tag: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            secret_key,
            tag,
            client: Client::new(),
        }
    }

    fn geofence_url(&self, external_id: &str) -> String {
        format!("{}/geofences/{}/{}", self.api_url, self.tag, external_id)
    }

    async fn failure(response: reqwest::Response, action: &str) -> CoreError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        error!("Geofence API error while {}: {} - {}", action, status, error_text);
        CoreError::ExternalServiceError(format!(
            "Geofence API returned error while {}: {}",
            action, status
        ))
    }
}

impl GeofenceClient for RadarGeofenceClient {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn upsert_geofence(&self, geofence: CircularGeofence) -> Result<(), CoreError> {
        let request = UpsertGeofenceRequest {
            description: &geofence.description,
            kind: "circle",
            coordinates: [geofence.longitude, geofence.latitude],
            radius: geofence.radius_meters,
        };

        let response = self
            .client
            .put(self.geofence_url(&geofence.external_id))
            .header(reqwest::header::AUTHORIZATION, &self.secret_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Geofence API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Geofence API error: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(Self::failure(response, "creating geofence").await);
        }

        info!(external_id = %geofence.external_id, "geofence upserted");
        Ok(())
    }

    async fn delete_geofence(&self, external_id: String) -> Result<(), CoreError> {
        let response = self
            .client
            .delete(self.geofence_url(&external_id))
            .header(reqwest::header::AUTHORIZATION, &self.secret_key)
            .send()
            .await
            .map_err(|e| {
                error!("Geofence API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Geofence API error: {}", e))
            })?;

        match response.status() {
            status if status.is_success() => {
                info!(%external_id, "geofence deleted");
                Ok(())
            }
            StatusCode::NOT_FOUND => {
                debug!(%external_id, "geofence already absent");
                Ok(())
            }
            _ => Err(Self::failure(response, "deleting geofence").await),
        }
    }
}

/// The configured provider, or a no-op when no secret key is set.
#[derive(Debug, Clone)]
pub enum GeofenceProvider {
    Radar(RadarGeofenceClient),
    Disabled,
}

impl From<&GeofenceConfig> for GeofenceProvider {
    fn from(config: &GeofenceConfig) -> Self {
        match config.secret_key.as_deref().map(str::trim) {
            Some(secret_key) if !secret_key.is_empty() => GeofenceProvider::Radar(
                RadarGeofenceClient::new(
                    config.api_url.clone(),
                    secret_key.to_string(),
                    config.tag.clone(),
                ),
            ),
            _ => GeofenceProvider::Disabled,
        }
    }
}

impl GeofenceClient for GeofenceProvider {
    fn is_enabled(&self) -> bool {
        matches!(self, GeofenceProvider::Radar(_))
    }

    async fn upsert_geofence(&self, geofence: CircularGeofence) -> Result<(), CoreError> {
        match self {
            GeofenceProvider::Radar(client) => client.upsert_geofence(geofence).await,
            GeofenceProvider::Disabled => Ok(()),
        }
    }

    async fn delete_geofence(&self, external_id: String) -> Result<(), CoreError> {
        match self {
            GeofenceProvider::Radar(client) => client.delete_geofence(external_id).await,
            GeofenceProvider::Disabled => Ok(()),
        }
    }
}
