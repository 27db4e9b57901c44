use chrono::{DateTime, FixedOffset, Utc};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct FieldForceConfig {
    pub database: DatabaseConfig,
    pub geofence: GeofenceConfig,
    pub schema: SchemaConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Settings of the third-party geofence provider.
///
/// A missing `secret_key` disables the provider: dealer mutations then skip
/// every remote call.
#[derive(Clone, Debug)]
pub struct GeofenceConfig {
    pub api_url: String,
    pub secret_key: Option<String>,
    pub tag: String,
    pub radius_meters: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CapabilityMode {
    #[default]
    Auto,
    Enabled,
    Disabled,
}

#[derive(Clone, Debug, Default)]
pub struct SchemaConfig {
    pub master_connected_table: CapabilityMode,
}

/// Optional tables detected once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SchemaCapabilities {
    pub master_connected_table: bool,
}

pub fn generate_timestamp() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
