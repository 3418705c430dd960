//! 容器构建器

use crate::{ClassRegistry, Container};
use di_abstractions::{ClassLoader, ContainerConfig, DelegateFactory, FactoryResult, ServiceProvider};
use di_common::{ContainerError, ServiceOptions};
use std::any::Any;
use std::sync::Arc;
use tracing::info;

/// 容器构建器
///
/// 使用建造者模式收集类登记、容器配置和服务提供者，`build` 时依次应用提供者
pub struct ContainerBuilder {
    config: ContainerConfig,
    classes: ClassRegistry,
    /// 外部类加载器，设置后替代内置的类注册表
    loader: Option<Arc<dyn ClassLoader>>,
    providers: Vec<Box<dyn ServiceProvider>>,
}

impl ContainerBuilder {
    /// 创建新的容器构建器
    pub fn new() -> Self {
        Self {
            config: ContainerConfig::default(),
            classes: ClassRegistry::new(),
            loader: None,
            providers: Vec::new(),
        }
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置工厂委托的约定方法名
    pub fn with_default_factory_method(mut self, method: impl Into<String>) -> Self {
        self.config = self.config.with_default_factory_method(method);
        self
    }

    /// 是否自动把工厂委托类注册为对象工厂
    pub fn auto_register_delegate_classes(mut self, enabled: bool) -> Self {
        self.config = self.config.with_auto_register_delegate_classes(enabled);
        self
    }

    /// 合并类注册表
    pub fn with_class_registry(mut self, registry: ClassRegistry) -> Self {
        self.classes.extend(registry);
        self
    }

    /// 使用外部类加载器
    pub fn with_class_loader(mut self, loader: Arc<dyn ClassLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// 登记类构造函数
    pub fn register_class<F>(mut self, class_name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(Option<&ServiceOptions>) -> FactoryResult + Send + Sync + 'static,
    {
        self.classes.register(class_name, constructor);
        self
    }

    /// 登记通过 `Default` 构造的类
    pub fn register_default_class<T>(mut self, class_name: impl Into<String>) -> Self
    where
        T: Default + Any + Send + Sync,
    {
        self.classes.register_default::<T>(class_name);
        self
    }

    /// 登记工厂委托类
    pub fn register_delegate_class<F>(mut self, class_name: impl Into<String>) -> Self
    where
        F: DelegateFactory + Default + 'static,
    {
        self.classes.register_delegate::<F>(class_name);
        self
    }

    /// 添加服务提供者
    pub fn add_provider<P: ServiceProvider + 'static>(mut self, provider: P) -> Self {
        info!("添加服务提供者: {}", provider.name());
        self.providers.push(Box::new(provider));
        self
    }

    /// 添加已装箱的服务提供者
    pub fn add_boxed_provider(mut self, provider: Box<dyn ServiceProvider>) -> Self {
        info!("添加服务提供者: {}", provider.name());
        self.providers.push(provider);
        self
    }

    /// 构建容器并按添加顺序应用所有服务提供者
    pub fn build(self) -> Result<Container, ContainerError> {
        let loader = match self.loader {
            Some(loader) => loader,
            None => Arc::new(self.classes),
        };

        let container = Container::with_config(self.config, loader);
        for provider in &self.providers {
            container.configure(provider.as_ref())?;
        }

        info!(
            "容器构建完成: {} 个提供者, {} 个已注册服务",
            self.providers.len(),
            container.registered_services().len()
        );
        Ok(container)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
