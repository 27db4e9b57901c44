use clap::{ArgAction, Args as ClapArgs, Parser, ValueEnum};
use fieldforce_core::domain::common::{
    CapabilityMode, DatabaseConfig, FieldForceConfig, GeofenceConfig, SchemaConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "fieldforce-api",
    version,
    about = "Field-force operations REST API"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub geofence: GeofenceArgs,

    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["fieldforce-api"])
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(
        id = "server-host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server-port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    /// Prefix of every route, without trailing slash.
    #[arg(
        id = "server-root-path",
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = "/api"
    )]
    pub root_path: String,

    #[arg(
        id = "server-allowed-origins",
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Echo internal error text in the `details` of 500 responses.
    #[arg(
        id = "expose-error-details", long = "expose-error-details",
        env = "EXPOSE_ERROR_DETAILS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub expose_error_details: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database-host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database-port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        id = "database-user",
        long = "database-user",
        env = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub user: String,

    #[arg(
        id = "database-password",
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(
        id = "database-name",
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "fieldforce"
    )]
    pub name: String,

    #[arg(
        id = "database-max-connections",
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct GeofenceArgs {
    #[arg(
        id = "geofence-api-url",
        long = "geofence-api-url",
        env = "GEOFENCE_API_URL",
        default_value = "https://api.radar.io/v1"
    )]
    pub api_url: String,

    /// Without a key the provider is disabled and dealers are stored without
    /// a remote geofence.
    #[arg(
        id = "geofence-secret-key",
        long = "geofence-secret-key",
        env = "GEOFENCE_SECRET_KEY"
    )]
    pub secret_key: Option<String>,

    #[arg(
        id = "geofence-tag",
        long = "geofence-tag",
        env = "GEOFENCE_TAG",
        default_value = "dealer"
    )]
    pub tag: String,

    #[arg(
        id = "geofence-radius-meters",
        long = "geofence-radius-meters",
        env = "GEOFENCE_RADIUS_METERS",
        default_value_t = 25
    )]
    pub radius_meters: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableMode {
    /// Look up `information_schema` at startup.
    Auto,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SchemaArgs {
    #[arg(
        id = "master-connected-table", long = "master-connected-table",
        env = "MASTER_CONNECTED_TABLE",
        value_enum,
        default_value_t = TableMode::Auto
    )]
    pub master_connected_table: TableMode,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(
        id = "log-filter",
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "info,sqlx=warn"
    )]
    pub filter: String,

    #[arg(
        id = "log-json",
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false
    )]
    pub json: bool,
}

impl From<TableMode> for CapabilityMode {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Auto => CapabilityMode::Auto,
            TableMode::Enabled => CapabilityMode::Enabled,
            TableMode::Disabled => CapabilityMode::Disabled,
        }
    }
}

impl From<Args> for FieldForceConfig {
    fn from(args: Args) -> Self {
        FieldForceConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                max_connections: args.db.max_connections,
            },
            geofence: GeofenceConfig {
                api_url: args.geofence.api_url,
                secret_key: args.geofence.secret_key,
                tag: args.geofence.tag,
                radius_meters: args.geofence.radius_meters,
            },
            schema: SchemaConfig {
                master_connected_table: args.schema.master_connected_table.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_convert_into_core_config() {
        let args = Args::parse_from([
            "fieldforce-api",
            "--database-host",
            "db.internal",
            "--database-user",
            "ops",
            "--geofence-secret-key",
            "prj_live_sk",
            "--geofence-radius-meters",
            "40",
            "--master-connected-table",
            "disabled",
        ]);

        let config = FieldForceConfig::from(args);

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.username, "ops");
        assert_eq!(config.geofence.secret_key.as_deref(), Some("prj_live_sk"));
        assert_eq!(config.geofence.radius_meters, 40);
        assert_eq!(
            config.schema.master_connected_table,
            CapabilityMode::Disabled
        );
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "fieldforce-api",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_error_details_can_be_switched_off() {
        let args = Args::parse_from(["fieldforce-api", "--expose-error-details", "false"]);
        assert!(!args.server.expose_error_details);
    }
}
