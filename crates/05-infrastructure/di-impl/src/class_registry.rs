//! 类注册表
//!
//! 应用在启动时登记类标识符与构造函数的对应关系，容器据此按名称构造对象

use di_abstractions::{ClassConstructor, ClassLoader, DelegateFactory, DelegateHandle, FactoryResult};
use di_common::{service, ServiceOptions};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 基于构造函数表的类加载器
#[derive(Clone, Default)]
pub struct ClassRegistry {
    constructors: HashMap<String, ClassConstructor>,
}

impl ClassRegistry {
    /// 创建空的类注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记构造函数
    pub fn register<F>(&mut self, class_name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(Option<&ServiceOptions>) -> FactoryResult + Send + Sync + 'static,
    {
        let class_name = class_name.into();
        debug!("登记类: {}", class_name);
        self.constructors.insert(class_name, Arc::new(constructor));
        self
    }

    /// 登记通过 `Default` 无参构造的类，构造参数会被忽略
    pub fn register_default<T>(&mut self, class_name: impl Into<String>) -> &mut Self
    where
        T: Default + Any + Send + Sync,
    {
        self.register(class_name, |_| Ok(service(T::default())))
    }

    /// 登记工厂委托类，构造出的实例可作为工厂委托调用
    pub fn register_delegate<F>(&mut self, class_name: impl Into<String>) -> &mut Self
    where
        F: DelegateFactory + Default + 'static,
    {
        self.register(class_name, |_| Ok(DelegateHandle::new(F::default()).into_service()))
    }

    /// 合并另一个注册表，同名类以后者为准
    pub fn extend(&mut self, other: Self) -> &mut Self {
        self.constructors.extend(other.constructors);
        self
    }

    /// 已登记的类数量
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// 是否没有登记任何类
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// 所有已登记的类名（已排序）
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ClassLoader for ClassRegistry {
    fn class_exists(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    fn instantiate(&self, class_name: &str, options: Option<&ServiceOptions>) -> FactoryResult {
        let constructor = self
            .constructors
            .get(class_name)
            .ok_or_else(|| anyhow::anyhow!("类 '{class_name}' 未登记"))?;
        constructor(options)
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("classes", &self.class_names())
            .finish()
    }
}
