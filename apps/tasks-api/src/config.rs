use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sql::SqlConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqlConfig::from_env()?; // DATABASE_URL falls back to a local SQLite file
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_reports_this_crate() {
        let config = Config {
            app: app_info!(),
            database: SqlConfig::default(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        };

        assert_eq!(config.app.name, "tasks_api");
        assert!(config.database.is_sqlite());
    }
}
