//! # 声明式服务配置
//!
//! 从代码或配置文件（JSON、TOML、YAML）描述服务实例、工厂和别名，
//! 并通过 [`ConfigServiceProvider`] 批量注册到任意 [`di_abstractions::ServiceRegistry`]。
//!
//! ## 配置文件格式
//!
//! ```toml
//! [services]
//! "smtp.host" = "mail.local"
//!
//! [factories]
//! Mailer = "MailerFactory"
//! SmtpMailer = ["MailerFactory", "createSmtp"]
//!
//! [aliases]
//! mailer = "Mailer"
//! ```

mod loader;
mod provider;
mod service_config;

pub use loader::ConfigFormat;
pub use provider::ConfigServiceProvider;
pub use service_config::{FactoryConfig, ServiceConfig};
