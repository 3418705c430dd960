//! 服务值与构建参数

use crate::errors::ContainerError;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 容器中保存的服务值
///
/// 所有服务都以 `Arc` 共享，同一服务的两次获取可以用 [`Arc::ptr_eq`] 判断是否为同一实例
pub type ServiceValue = Arc<dyn Any + Send + Sync>;

/// 将任意值包装为服务值
pub fn service<T: Any + Send + Sync>(value: T) -> ServiceValue {
    Arc::new(value)
}

/// 将服务值向下转型为具体类型
pub fn downcast_service<T: Any + Send + Sync>(
    name: &str,
    value: ServiceValue,
) -> Result<Arc<T>, ContainerError> {
    value
        .downcast::<T>()
        .map_err(|_| ContainerError::type_mismatch::<T>(name))
}

/// 构建服务时传入的有序参数
#[derive(Clone, Default)]
pub struct ServiceOptions {
    args: Vec<ServiceValue>,
}

impl ServiceOptions {
    /// 创建空参数列表
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// 从已有的服务值创建参数列表
    pub fn from_values(args: Vec<ServiceValue>) -> Self {
        Self { args }
    }

    /// 追加一个参数
    pub fn with_arg<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.args.push(Arc::new(value));
        self
    }

    /// 追加一个已包装的服务值
    pub fn with_value(mut self, value: ServiceValue) -> Self {
        self.args.push(value);
        self
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// 是否没有参数
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 获取指定位置的原始参数
    pub fn get(&self, index: usize) -> Option<&ServiceValue> {
        self.args.get(index)
    }

    /// 获取指定位置的参数并转换为具体类型
    pub fn arg<T: Any + Send + Sync>(&self, index: usize) -> Option<Arc<T>> {
        self.args.get(index)?.clone().downcast::<T>().ok()
    }

    /// 遍历所有参数
    pub fn iter(&self) -> impl Iterator<Item = &ServiceValue> {
        self.args.iter()
    }
}

impl fmt::Debug for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceOptions")
            .field("len", &self.args.len())
            .finish()
    }
}

impl FromIterator<ServiceValue> for ServiceOptions {
    fn from_iter<I: IntoIterator<Item = ServiceValue>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}
