//! 已解析的工厂策略

use crate::object_factory::ObjectFactory;
use di_abstractions::{DelegateHandle, FactoryResult, ServiceContainer, ServiceFactory};
use di_common::ServiceOptions;
use std::sync::Arc;

/// 容器为某个服务名选定的工厂策略
pub(crate) enum FactoryStrategy {
    /// 直接注册的可调用工厂
    Callable(Arc<dyn ServiceFactory>),
    /// 工厂委托对象的某个方法，`None` 表示约定方法
    Delegate {
        handle: Arc<DelegateHandle>,
        method: Option<String>,
    },
    /// 按类标识符构造
    Object(ObjectFactory),
}

impl FactoryStrategy {
    pub(crate) fn invoke(
        &self,
        container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        match self {
            Self::Callable(factory) => factory.create(container, name, options),
            Self::Delegate { handle, method } => {
                handle.call(method.as_deref(), container, name, options)
            }
            Self::Object(factory) => factory.create(container, name, options),
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Callable(_) => "callable",
            Self::Delegate { .. } => "delegate",
            Self::Object(_) => "object",
        }
    }
}
