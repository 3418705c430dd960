//! 服务容器抽象接口
//!
//! 提供按名称解析服务的核心抽象

use crate::factory::DEFAULT_FACTORY_METHOD;
use di_common::{downcast_service, ContainerError, ServiceOptions, ServiceValue};
use std::any::Any;
use std::sync::Arc;

/// 服务容器 trait
///
/// 工厂策略在执行时会拿到此接口，用于解析自身的依赖
pub trait ServiceContainer: Send + Sync {
    /// 获取服务，新构建的服务会被缓存
    fn get(&self, name: &str) -> Result<ServiceValue, ContainerError>;

    /// 检查名称是否出现在任一注册表中
    fn has(&self, name: &str) -> bool;

    /// 总是通过工厂构建一个新的服务实例，不读写该名称的缓存
    fn build(
        &self,
        name: &str,
        options: Option<ServiceOptions>,
    ) -> Result<ServiceValue, ContainerError>;
}

/// 类型化访问扩展
pub trait ServiceContainerExt: ServiceContainer {
    /// 获取服务并转换为具体类型
    fn get_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>, ContainerError> {
        downcast_service(name, self.get(name)?)
    }

    /// 构建服务并转换为具体类型
    fn build_as<T: Any + Send + Sync>(
        &self,
        name: &str,
        options: Option<ServiceOptions>,
    ) -> Result<Arc<T>, ContainerError> {
        downcast_service(name, self.build(name, options)?)
    }
}

impl<C: ServiceContainer + ?Sized> ServiceContainerExt for C {}

/// 容器配置
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// 工厂委托未指定方法时调用的约定方法名
    pub default_factory_method: String,
    /// 是否自动以对象工厂注册尚未注册的工厂委托类
    pub auto_register_delegate_classes: bool,
}

impl ContainerConfig {
    /// 设置约定方法名
    pub fn with_default_factory_method(mut self, method: impl Into<String>) -> Self {
        self.default_factory_method = method.into();
        self
    }

    /// 设置是否自动注册工厂委托类
    pub fn with_auto_register_delegate_classes(mut self, enabled: bool) -> Self {
        self.auto_register_delegate_classes = enabled;
        self
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            default_factory_method: DEFAULT_FACTORY_METHOD.to_string(),
            auto_register_delegate_classes: true,
        }
    }
}
