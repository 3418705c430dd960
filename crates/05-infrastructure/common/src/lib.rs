//! # DI Common
//!
//! 这个 crate 提供了 Lorn DI 服务容器各层共享的基础类型。
//!
//! ## 核心类型
//!
//! - [`ServiceValue`] - 容器中保存的服务值
//! - [`ServiceOptions`] - 构建服务时传入的有序参数
//! - [`ContainerError`] - 容器解析与注册错误
//! - [`ServiceProviderError`] - 批量配置注册错误
//! - [`ServiceDescriptor`] - 已注册服务的描述信息
//!
//! ## 设计原则
//!
//! - 错误类型可按 [`ErrorKind`] 分支处理
//! - 服务值以 `Arc` 共享，通过指针比较判断实例身份

pub mod errors;
pub mod metadata;
pub mod value;

pub use errors::*;
pub use metadata::*;
pub use value::*;
