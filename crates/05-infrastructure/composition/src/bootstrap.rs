//! 容器启动器

use crate::logging::LoggingConfig;
use di_abstractions::ServiceProvider;
use di_common::InfrastructureError;
use di_config::{ConfigServiceProvider, ServiceConfig};
use di_impl::{ClassRegistry, Container, ContainerBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 容器启动器
///
/// 组合日志、配置文件、代码配置和自定义服务提供者，构建可用的容器。
/// 注册顺序：配置文件（按添加顺序）、代码配置、自定义提供者。
pub struct ContainerBootstrap {
    builder: ContainerBuilder,
    /// 日志配置，`None` 表示不初始化日志
    logging: Option<LoggingConfig>,
    config_files: Vec<PathBuf>,
    service_configs: Vec<ServiceConfig>,
    providers: Vec<Box<dyn ServiceProvider>>,
}

impl ContainerBootstrap {
    /// 创建新的容器启动器
    pub fn new() -> Self {
        Self {
            builder: ContainerBuilder::new(),
            logging: None,
            config_files: Vec::new(),
            service_configs: Vec::new(),
            providers: Vec::new(),
        }
    }

    /// 配置日志，构建时初始化
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging = Some(config);
        self
    }

    /// 添加服务配置文件
    pub fn add_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, InfrastructureError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InfrastructureError::BootstrapFailed {
                message: format!("配置文件不存在: {}", path.display()),
            });
        }

        info!("添加服务配置文件: {}", path.display());
        self.config_files.push(path.to_path_buf());
        Ok(self)
    }

    /// 添加代码构建的服务配置
    pub fn add_service_config(mut self, config: ServiceConfig) -> Self {
        debug!("添加服务配置: {} 个条目", config.len());
        self.service_configs.push(config);
        self
    }

    /// 添加自定义服务提供者
    pub fn add_provider<P: ServiceProvider + 'static>(mut self, provider: P) -> Self {
        info!("添加自定义服务提供者: {}", provider.name());
        self.providers.push(Box::new(provider));
        self
    }

    /// 合并类注册表
    pub fn with_class_registry(mut self, registry: ClassRegistry) -> Self {
        self.builder = self.builder.with_class_registry(registry);
        self
    }

    /// 设置工厂委托的约定方法名
    pub fn with_default_factory_method(mut self, method: impl Into<String>) -> Self {
        self.builder = self.builder.with_default_factory_method(method);
        self
    }

    /// 构建容器
    pub fn build(self) -> Result<Container, InfrastructureError> {
        if let Some(logging) = &self.logging {
            logging.init()?;
        }

        info!("开始构建服务容器");
        let mut builder = self.builder;

        for path in &self.config_files {
            builder = builder.add_provider(ConfigServiceProvider::from_file(path)?);
        }

        for config in self.service_configs {
            builder = builder.add_provider(ConfigServiceProvider::new(config));
        }

        for provider in self.providers {
            builder = builder.add_boxed_provider(provider);
        }

        let container = builder.build()?;
        info!(
            "服务容器构建完成: {} 个已注册服务",
            container.registered_services().len()
        );
        Ok(container)
    }
}

impl Default for ContainerBootstrap {
    fn default() -> Self {
        Self::new()
    }
}
