//! 声明式服务配置
//!
//! 配置分为三个有序节：服务实例、工厂、别名

use di_abstractions::{DelegateFactory, DelegateHandle, FactoryResult, ServiceContainer, ServiceFactory};
use di_common::{service, ServiceOptions, ServiceValue};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 工厂配置项
#[derive(Clone)]
pub enum FactoryConfig {
    /// 可调用工厂
    Callable(Arc<dyn ServiceFactory>),
    /// 工厂委托类，可指定调用的方法
    Class {
        class_name: String,
        method: Option<String>,
    },
    /// 工厂委托对象，可指定调用的方法
    Delegate {
        handle: DelegateHandle,
        method: Option<String>,
    },
    /// 配置文件中的原始条目，注册时再解释
    Raw(Value),
}

impl FactoryConfig {
    /// 以闭包创建可调用工厂配置
    pub fn callable<F>(factory: F) -> Self
    where
        F: Fn(&dyn ServiceContainer, &str, Option<&ServiceOptions>) -> FactoryResult
            + Send
            + Sync
            + 'static,
    {
        Self::Callable(Arc::new(factory))
    }

    /// 工厂委托类，调用约定方法
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::Class {
            class_name: class_name.into(),
            method: None,
        }
    }

    /// 工厂委托类的指定方法
    pub fn class_method(class_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Class {
            class_name: class_name.into(),
            method: Some(method.into()),
        }
    }

    /// 工厂委托对象，`method` 为 `None` 时调用约定方法
    pub fn delegate<F: DelegateFactory + 'static>(factory: F, method: Option<&str>) -> Self {
        Self::Delegate {
            handle: DelegateHandle::new(factory),
            method: method.map(str::to_string),
        }
    }
}

impl fmt::Debug for FactoryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable(<factory>)"),
            Self::Class { class_name, method } => f
                .debug_struct("Class")
                .field("class_name", class_name)
                .field("method", method)
                .finish(),
            Self::Delegate { method, .. } => f
                .debug_struct("Delegate")
                .field("method", method)
                .finish_non_exhaustive(),
            Self::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
        }
    }
}

/// 服务配置
///
/// 各节保持添加顺序；注册时依次处理服务实例、工厂、别名
#[derive(Clone, Default)]
pub struct ServiceConfig {
    pub(crate) services: Vec<(String, ServiceValue)>,
    pub(crate) factories: Vec<(String, FactoryConfig)>,
    pub(crate) aliases: Vec<(String, String)>,
}

impl ServiceConfig {
    /// 创建空配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加服务实例
    pub fn with_service(mut self, name: impl Into<String>, value: ServiceValue) -> Self {
        self.services.push((name.into(), value));
        self
    }

    /// 添加任意值作为服务实例
    pub fn with_instance<T: Any + Send + Sync>(self, name: impl Into<String>, value: T) -> Self {
        self.with_service(name, service(value))
    }

    /// 添加工厂
    pub fn with_factory(mut self, name: impl Into<String>, factory: FactoryConfig) -> Self {
        self.factories.push((name.into(), factory));
        self
    }

    /// 添加别名
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// 追加另一份配置的全部条目
    pub fn merge(mut self, other: Self) -> Self {
        self.services.extend(other.services);
        self.factories.extend(other.factories);
        self.aliases.extend(other.aliases);
        self
    }

    /// 服务实例名称
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|(name, _)| name.as_str())
    }

    /// 工厂名称
    pub fn factory_names(&self) -> impl Iterator<Item = &str> {
        self.factories.iter().map(|(name, _)| name.as_str())
    }

    /// 别名与目标
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// 条目总数
    pub fn len(&self) -> usize {
        self.services.len() + self.factories.len() + self.aliases.len()
    }

    /// 是否没有任何条目
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("services", &self.service_names().collect::<Vec<_>>())
            .field("factories", &self.factories)
            .field("aliases", &self.aliases)
            .finish()
    }
}
