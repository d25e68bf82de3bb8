use core_config::{AppInfo, FromEnv, app_info, env_required};
use database::mongodb::MongoConfig;
use domain_events::VisibilityPolicy;

pub use core_config::Environment;

/// Digest worker configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub visibility: VisibilityPolicy,
    pub environment: Environment,
    /// Base URL the manage/unsubscribe links point at (DIGEST_BASE_URL)
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let visibility = VisibilityPolicy::from_env()?;
        let base_url = env_required("DIGEST_BASE_URL")?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            visibility,
            environment,
            base_url,
        })
    }
}
