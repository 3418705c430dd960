//! 对象工厂
//!
//! 把请求的服务名当作类标识符，交给类加载器构造新实例

use di_abstractions::{ClassLoader, FactoryResult, ServiceContainer, ServiceFactory};
use di_common::{ContainerError, ServiceOptions};
use std::fmt;
use std::sync::Arc;

/// 按服务名构造对象的工厂
///
/// 传入参数时作为构造参数列表，未传入时调用无参构造
#[derive(Clone)]
pub struct ObjectFactory {
    loader: Arc<dyn ClassLoader>,
}

impl ObjectFactory {
    /// 创建新的对象工厂
    pub fn new(loader: Arc<dyn ClassLoader>) -> Self {
        Self { loader }
    }
}

impl ServiceFactory for ObjectFactory {
    fn create(
        &self,
        _container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        if !self.loader.class_exists(name) {
            return Err(ContainerError::construction_failed(
                name,
                format!("无法从请求的服务 '{name}' 创建对象: 该服务不是有效的类名"),
            )
            .into());
        }

        self.loader.instantiate(name, options)
    }
}

impl fmt::Debug for ObjectFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectFactory").finish_non_exhaustive()
    }
}
