//! 服务提供者抽象接口

use crate::registry::ServiceRegistry;
use di_common::ServiceProviderError;

/// 服务提供者 trait
///
/// 用于向容器批量注册服务
pub trait ServiceProvider: Send + Sync {
    /// 向注册表注册服务
    fn register_services(&self, registry: &dyn ServiceRegistry) -> Result<(), ServiceProviderError>;

    /// 获取提供者名称
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
