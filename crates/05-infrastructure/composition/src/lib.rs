//! # 容器组合层
//!
//! 把日志、声明式服务配置和自定义服务提供者组合成一个可用的服务容器。
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use di_composition::{ContainerBootstrap, LoggingConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let container = ContainerBootstrap::new()
//!         .with_logging(LoggingConfig::development())
//!         .add_config_file("config/services.toml")?
//!         .build()?;
//!
//!     println!("已注册服务: {}", container.registered_services().len());
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod logging;

pub use bootstrap::ContainerBootstrap;
pub use logging::LoggingConfig;
