//! 服务注册表抽象接口

use crate::factory::ServiceFactory;
use di_common::{ContainerError, ServiceValue};
use std::fmt;
use std::sync::Arc;

/// 工厂定义
///
/// 工厂可以是直接可调用的策略，也可以是一个类名；类名会被转为工厂委托注册
#[derive(Clone)]
pub enum FactoryDefinition {
    /// 可调用工厂
    Callable(Arc<dyn ServiceFactory>),
    /// 工厂委托类名
    ClassName(String),
}

impl FactoryDefinition {
    /// 从工厂策略创建定义
    pub fn callable<F: ServiceFactory + 'static>(factory: F) -> Self {
        Self::Callable(Arc::new(factory))
    }
}

impl From<Arc<dyn ServiceFactory>> for FactoryDefinition {
    fn from(factory: Arc<dyn ServiceFactory>) -> Self {
        Self::Callable(factory)
    }
}

impl From<&str> for FactoryDefinition {
    fn from(class_name: &str) -> Self {
        Self::ClassName(class_name.to_string())
    }
}

impl From<String> for FactoryDefinition {
    fn from(class_name: String) -> Self {
        Self::ClassName(class_name)
    }
}

impl fmt::Debug for FactoryDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable(<function>)"),
            Self::ClassName(class_name) => f.debug_tuple("ClassName").field(class_name).finish(),
        }
    }
}

/// 服务注册表 trait
///
/// 批量配置提供者只通过此接口向容器注册服务
pub trait ServiceRegistry: Send + Sync {
    /// 注册服务实例，覆盖已有实例
    fn set(&self, name: &str, service: ServiceValue);

    /// 注册工厂
    fn set_factory(&self, name: &str, factory: FactoryDefinition) -> Result<(), ContainerError>;

    /// 注册工厂委托类及其方法
    fn set_factory_delegate(&self, name: &str, class_name: &str, method: Option<&str>);

    /// 注册别名
    fn set_alias(&self, alias: &str, target: &str) -> Result<(), ContainerError>;
}
