//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, ServicesConfig};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "VISUAI";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VISUAI_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VISUAI_SERVER__PORT=8080`
/// - `VISUAI_SERVICES__SEGMENT__URL=http://segmenter:8000/api/segment`
/// - `VISUAI_GC__ENABLED=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 服务端点默认值，只覆盖部分字段（如超时）时 url 仍然存在
    let service_defaults = ServicesConfig::default();
    for (name, endpoint) in service_defaults.endpoints() {
        builder = builder
            .set_default(format!("services.{}.url", name), endpoint.url.as_str())?
            .set_default(
                format!("services.{}.timeout_secs", name),
                endpoint.timeout_secs,
            )?;
    }

    // 2. 添加配置文件（如果存在），其余缺省字段由 serde default 补齐
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 例如: VISUAI_SERVICES__IMAGE__TIMEOUT_SECS=120
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    for (name, endpoint) in config.services.endpoints() {
        if endpoint.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Service URL for '{}' cannot be empty",
                name
            )));
        }
    }

    if config.pipeline.max_chapter_chars == 0 {
        return Err(ConfigError::ValidationError(
            "max_chapter_chars cannot be 0".to_string(),
        ));
    }

    if config.gc.enabled && config.gc.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "GC interval cannot be 0 when GC is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Upload: {} bytes", config.server.max_upload_bytes);
    for (name, endpoint) in config.services.endpoints() {
        tracing::info!(
            "Service [{}]: {} (timeout {}s)",
            name,
            endpoint.url,
            endpoint.timeout_secs
        );
    }
    tracing::info!("Max Chapter Chars: {}", config.pipeline.max_chapter_chars);
    tracing::info!("GC Enabled: {}", config.gc.enabled);
    if config.gc.enabled {
        tracing::info!("GC Interval: {}s", config.gc.interval_secs);
        tracing::info!("Book Idle Expire: {}s", config.gc.book_idle_secs);
        tracing::info!("Audio Idle Expire: {}s", config.gc.audio_idle_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
