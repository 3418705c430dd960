//! 按标识符构造对象的抽象接口
//!
//! 容器在找不到任何注册时，会把服务名当作类标识符交给 [`ClassLoader`] 构造

use crate::factory::FactoryResult;
use di_common::ServiceOptions;
use std::sync::Arc;

/// 类构造函数
///
/// 传入 `Some(options)` 时以参数列表构造，`None` 表示无参构造
pub type ClassConstructor =
    Arc<dyn Fn(Option<&ServiceOptions>) -> FactoryResult + Send + Sync>;

/// 类加载器 trait
pub trait ClassLoader: Send + Sync {
    /// 检查类标识符是否可以加载
    fn class_exists(&self, class_name: &str) -> bool;

    /// 构造指定类的实例
    fn instantiate(&self, class_name: &str, options: Option<&ServiceOptions>) -> FactoryResult;
}

/// 不认识任何类的加载器
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClassLoader;

impl ClassLoader for NoClassLoader {
    fn class_exists(&self, _class_name: &str) -> bool {
        false
    }

    fn instantiate(&self, class_name: &str, _options: Option<&ServiceOptions>) -> FactoryResult {
        Err(anyhow::anyhow!("类 '{class_name}' 不存在"))
    }
}
