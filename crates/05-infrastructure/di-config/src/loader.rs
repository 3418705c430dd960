//! 配置文件加载
//!
//! 文件格式由扩展名决定，统一解析为 JSON 值后再转换为 [`ServiceConfig`]

use crate::service_config::{FactoryConfig, ServiceConfig};
use di_common::{service, ServiceProviderError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// 支持的配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
    /// `.yaml` 或 `.yml`
    Yaml,
}

impl ConfigFormat {
    /// 根据文件扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// 解析文本为 JSON 值
    pub fn parse(self, content: &str) -> Result<Value, ServiceProviderError> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| {
                ServiceProviderError::load_with(format!("JSON 解析失败: {e}"), Box::new(e))
            }),
            Self::Toml => toml::from_str(content).map_err(|e| {
                ServiceProviderError::load_with(format!("TOML 解析失败: {e}"), Box::new(e))
            }),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| {
                ServiceProviderError::load_with(format!("YAML 解析失败: {e}"), Box::new(e))
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

/// 配置文件的原始结构，未知的顶层键会被忽略
#[derive(Debug, Default, Deserialize)]
struct RawServiceConfig {
    #[serde(default)]
    services: Map<String, Value>,
    #[serde(default)]
    factories: Map<String, Value>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

impl ServiceConfig {
    /// 从 JSON 值构建配置
    ///
    /// 服务实例以 `serde_json::Value` 注册；工厂条目保留原样，注册时再解释
    pub fn from_value(value: Value) -> Result<Self, ServiceProviderError> {
        if !value.is_object() {
            return Err(ServiceProviderError::load("配置根节点必须是对象"));
        }

        let raw: RawServiceConfig = serde_json::from_value(value).map_err(|e| {
            ServiceProviderError::load_with(format!("配置结构无效: {e}"), Box::new(e))
        })?;

        let config = Self {
            services: raw
                .services
                .into_iter()
                .map(|(name, value)| (name, service(value)))
                .collect(),
            factories: raw
                .factories
                .into_iter()
                .map(|(name, value)| (name, FactoryConfig::Raw(value)))
                .collect(),
            aliases: raw.aliases.into_iter().collect(),
        };

        debug!(
            "解析服务配置: {} 个服务, {} 个工厂, {} 个别名",
            config.services.len(),
            config.factories.len(),
            config.aliases.len()
        );
        Ok(config)
    }

    /// 从指定格式的文本构建配置
    pub fn from_str_with_format(
        content: &str,
        format: ConfigFormat,
    ) -> Result<Self, ServiceProviderError> {
        Self::from_value(format.parse(content)?)
    }

    /// 从 JSON 文本构建配置
    pub fn from_json(content: &str) -> Result<Self, ServiceProviderError> {
        Self::from_str_with_format(content, ConfigFormat::Json)
    }

    /// 从配置文件构建配置，格式由扩展名决定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServiceProviderError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ServiceProviderError::load(format!("不支持的配置文件格式: {}", path.display()))
        })?;

        info!("加载 {} 服务配置文件: {}", format, path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServiceProviderError::load_with(
                format!("无法读取配置文件 {}: {e}", path.display()),
                Box::new(e),
            )
        })?;

        Self::from_str_with_format(&content, format)
    }
}
