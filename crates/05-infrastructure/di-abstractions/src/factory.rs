//! 工厂策略抽象接口
//!
//! 工厂策略以 `(容器, 服务名, 参数)` 的形式被调用并返回服务值

use crate::container::ServiceContainer;
use di_common::{ServiceOptions, ServiceValue};
use std::fmt;
use std::sync::Arc;

/// 工厂调用结果
///
/// 工厂中出现的任意错误都可以直接用 `?` 返回；容器会区分容器自身的错误与其他错误
pub type FactoryResult = anyhow::Result<ServiceValue>;

/// 工厂委托未指定方法时调用的约定方法名
pub const DEFAULT_FACTORY_METHOD: &str = "invoke";

/// 工厂策略 trait
pub trait ServiceFactory: Send + Sync {
    /// 创建服务实例
    fn create(
        &self,
        container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult;
}

impl<F> ServiceFactory for F
where
    F: Fn(&dyn ServiceContainer, &str, Option<&ServiceOptions>) -> FactoryResult + Send + Sync,
{
    fn create(
        &self,
        container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        self(container, name, options)
    }
}

/// 将闭包包装为工厂策略
pub fn factory_fn<F>(factory: F) -> Arc<dyn ServiceFactory>
where
    F: Fn(&dyn ServiceContainer, &str, Option<&ServiceOptions>) -> FactoryResult
        + Send
        + Sync
        + 'static,
{
    Arc::new(factory)
}

/// 工厂委托 trait
///
/// 工厂委托本身也是容器中的服务，容器解析出它之后再调用其方法来创建目标服务。
/// 未指定方法名时调用 [`DelegateFactory::invoke`]。
pub trait DelegateFactory: Send + Sync {
    /// 约定方法
    fn invoke(
        &self,
        container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult;

    /// 是否支持指定名称的方法（约定方法之外）
    fn supports_method(&self, _method: &str) -> bool {
        false
    }

    /// 调用指定名称的方法
    fn call_method(
        &self,
        method: &str,
        _container: &dyn ServiceContainer,
        name: &str,
        _options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        Err(anyhow::anyhow!(
            "工厂方法 '{method}' 不可调用 (服务 '{name}')"
        ))
    }
}

/// 工厂委托句柄
///
/// 容器只把值为 `DelegateHandle` 的服务视为可调用的工厂委托
#[derive(Clone)]
pub struct DelegateHandle {
    factory: Arc<dyn DelegateFactory>,
}

impl DelegateHandle {
    /// 创建新的委托句柄
    pub fn new<F: DelegateFactory + 'static>(factory: F) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// 从共享的委托对象创建句柄
    pub fn from_arc(factory: Arc<dyn DelegateFactory>) -> Self {
        Self { factory }
    }

    /// 包装为服务值
    pub fn into_service(self) -> ServiceValue {
        Arc::new(self)
    }

    /// 获取委托对象
    pub fn factory(&self) -> &Arc<dyn DelegateFactory> {
        &self.factory
    }

    /// 是否支持指定方法；`None` 表示约定方法
    pub fn supports(&self, method: Option<&str>) -> bool {
        method.map_or(true, |method| self.factory.supports_method(method))
    }

    /// 调用指定方法；`None` 表示约定方法
    pub fn call(
        &self,
        method: Option<&str>,
        container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        match method {
            None => self.factory.invoke(container, name, options),
            Some(method) => self.factory.call_method(method, container, name, options),
        }
    }
}

impl fmt::Debug for DelegateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateHandle")
            .field("factory", &"<delegate>")
            .finish()
    }
}
