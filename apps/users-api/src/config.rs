use core_config::{AppInfo, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// Only `APP_ENV` is read. The listener is always `0.0.0.0:3000`.
    pub fn from_env() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::from_env(),
        }
    }
}
