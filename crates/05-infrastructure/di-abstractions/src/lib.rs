//! # Dependency Injection Abstractions
//!
//! 服务容器抽象层，定义服务注册和按名称解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ServiceContainer`] - 按名称获取和构建服务
//! - [`ServiceRegistry`] - 服务注册表接口
//! - [`ServiceFactory`] - 工厂策略接口
//! - [`DelegateFactory`] - 由容器解析的工厂委托对象
//! - [`ClassLoader`] - 按标识符构造对象的能力
//! - [`ServiceProvider`] - 批量注册服务的提供者

pub mod container;
pub mod factory;
pub mod provider;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use factory::*;
pub use provider::*;
pub use registry::*;
pub use resolver::*;
