//! # 依赖注入具体实现
//!
//! 提供按名称解析的服务容器、注册表、对象工厂和类注册表实现。
//!
//! ## 解析顺序
//!
//! 1. 先解除别名
//! 2. 已有实例直接返回
//! 3. 正在构建中的名称视为循环依赖
//! 4. 依次尝试可调用工厂、工厂委托、对象工厂
//! 5. 都没有则报告服务未找到

mod builder;
mod class_registry;
mod container;
mod in_flight;
mod object_factory;
mod store;
mod strategy;

pub use builder::ContainerBuilder;
pub use class_registry::ClassRegistry;
pub use container::Container;
pub use object_factory::ObjectFactory;
pub use store::FactoryDelegate;
