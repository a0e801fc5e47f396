//! config - 配置加载库

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀，嵌套字段用 `__` 分隔，例如 `WAREHOUSE_SERVER__PORT`
pub const ENV_PREFIX: &str = "WAREHOUSE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 仓库夹具数据配置
///
/// 存在时整体替换内置的参考数据，不做字段级合并。
#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseSettings {
    pub name: String,
    pub address: String,
    pub postal_code: i32,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub products: Vec<ProductSettings>,
}

/// 单个商品配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSettings {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    pub warehouse: Option<WarehouseSettings>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 合并顺序：`default.toml` -> `{APP_ENV}.toml` -> `WAREHOUSE_*` 环境变量
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
        Self::from_figment(Self::figment(config_dir, &env))
    }

    /// 构建配置来源，不执行提取
    pub fn figment(config_dir: &str, env: &str) -> Figment {
        Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
