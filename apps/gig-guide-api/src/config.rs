use core_config::{AppInfo, FromEnv, admin::AdminConfig, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_events::VisibilityPolicy;
use std::path::PathBuf;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub admin: AdminConfig,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub visibility: VisibilityPolicy,
    pub environment: Environment,
    /// Where admin database exports are written (EXPORT_DIR, default ".")
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let admin = AdminConfig::from_env()?;
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let visibility = VisibilityPolicy::from_env()?;
        let export_dir = PathBuf::from(env_or_default("EXPORT_DIR", "."));

        Ok(Self {
            app: app_info!(),
            admin,
            mongodb,
            server,
            visibility,
            environment,
            export_dir,
        })
    }
}
