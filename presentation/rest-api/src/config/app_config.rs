use super::{
    cors_config, server_config::ServerConfig, storage_config::StorageConfig,
    store_api_config::StoreApiConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store_api: StoreApiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            store_api: StoreApiConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
