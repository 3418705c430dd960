//! 基于声明式配置的服务提供者

use crate::service_config::{FactoryConfig, ServiceConfig};
use di_abstractions::{
    factory_fn, DelegateHandle, FactoryDefinition, ServiceProvider, ServiceRegistry,
    DEFAULT_FACTORY_METHOD,
};
use di_common::{ContainerError, ServiceProviderError};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// 配置服务提供者
///
/// 依次注册服务实例、工厂和别名，任何注册失败都会标明出错的配置节和名称
#[derive(Debug, Clone, Default)]
pub struct ConfigServiceProvider {
    config: ServiceConfig,
}

impl ConfigServiceProvider {
    /// 创建新的配置服务提供者
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// 从配置文件创建
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServiceProviderError> {
        ServiceConfig::from_file(path).map(Self::new)
    }

    /// 获取服务配置
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn register_factory(
        registry: &dyn ServiceRegistry,
        name: &str,
        factory: &FactoryConfig,
    ) -> Result<(), ServiceProviderError> {
        let wrap = |source: ContainerError| ServiceProviderError::Factory {
            name: name.to_string(),
            source,
        };

        match factory {
            FactoryConfig::Callable(factory) => registry
                .set_factory(name, FactoryDefinition::Callable(factory.clone()))
                .map_err(wrap),
            FactoryConfig::Class { class_name, method } => {
                Self::register_class(registry, name, class_name, method.as_deref()).map_err(wrap)
            }
            FactoryConfig::Delegate { handle, method } => {
                Self::register_delegate(registry, name, handle, method.as_deref())
            }
            FactoryConfig::Raw(value) => Self::register_raw(registry, name, value),
        }
    }

    fn register_class(
        registry: &dyn ServiceRegistry,
        name: &str,
        class_name: &str,
        method: Option<&str>,
    ) -> Result<(), ContainerError> {
        match method {
            None => registry.set_factory(name, FactoryDefinition::from(class_name)),
            Some(method) => {
                registry.set_factory_delegate(name, class_name, Some(method));
                Ok(())
            }
        }
    }

    fn register_delegate(
        registry: &dyn ServiceRegistry,
        name: &str,
        handle: &DelegateHandle,
        method: Option<&str>,
    ) -> Result<(), ServiceProviderError> {
        let method = method.filter(|method| *method != DEFAULT_FACTORY_METHOD);
        if !handle.supports(method) {
            return Err(ServiceProviderError::NotCallable {
                name: name.to_string(),
            });
        }

        let handle = handle.clone();
        let method = method.map(str::to_string);
        let factory = factory_fn(move |container, name, options| {
            handle.call(method.as_deref(), container, name, options)
        });

        registry
            .set_factory(name, FactoryDefinition::Callable(factory))
            .map_err(|source| ServiceProviderError::Factory {
                name: name.to_string(),
                source,
            })
    }

    /// 解释配置文件中的工厂条目
    ///
    /// 字符串为工厂委托类；数组第一项为类名，第二项（可选）为方法名
    fn register_raw(
        registry: &dyn ServiceRegistry,
        name: &str,
        value: &Value,
    ) -> Result<(), ServiceProviderError> {
        let (class_name, method) = match value {
            Value::String(class_name) => (class_name.as_str(), None),
            Value::Array(items) => {
                let class_name = items.first().and_then(Value::as_str).ok_or_else(|| {
                    ServiceProviderError::InvalidArrayConfig {
                        name: name.to_string(),
                    }
                })?;
                (class_name, items.get(1).and_then(Value::as_str))
            }
            _ => {
                return Err(ServiceProviderError::NotCallable {
                    name: name.to_string(),
                })
            }
        };

        Self::register_class(registry, name, class_name, method).map_err(|source| {
            ServiceProviderError::Factory {
                name: name.to_string(),
                source,
            }
        })
    }
}

impl ServiceProvider for ConfigServiceProvider {
    fn register_services(
        &self,
        registry: &dyn ServiceRegistry,
    ) -> Result<(), ServiceProviderError> {
        info!(
            "注册配置服务: {} 个服务, {} 个工厂, {} 个别名",
            self.config.services.len(),
            self.config.factories.len(),
            self.config.aliases.len()
        );

        for (name, value) in &self.config.services {
            if name.trim().is_empty() {
                return Err(ServiceProviderError::Service {
                    name: name.clone(),
                    source: ContainerError::invalid_argument(name.as_str(), "服务名不能为空"),
                });
            }
            registry.set(name, value.clone());
        }

        for (name, factory) in &self.config.factories {
            debug!("注册配置工厂: {} -> {:?}", name, factory);
            Self::register_factory(registry, name, factory)?;
        }

        for (alias, target) in &self.config.aliases {
            registry
                .set_alias(alias, target)
                .map_err(|source| ServiceProviderError::Alias {
                    alias: alias.clone(),
                    target: target.clone(),
                    source,
                })?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "ConfigServiceProvider"
    }
}
