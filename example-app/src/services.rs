//! 示例服务及其注册

use anyhow::Context;
use di_abstractions::{DelegateFactory, FactoryResult, ServiceContainer, ServiceContainerExt};
use di_common::{service, ServiceOptions, ServiceValue};
use di_config::{FactoryConfig, ServiceConfig};
use di_impl::ClassRegistry;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// 问候服务
#[derive(Debug)]
pub struct Greeter {
    greeting: String,
    formal: bool,
}

impl Greeter {
    /// 生成问候语
    pub fn greet(&self, who: &str) -> String {
        if self.formal {
            format!("{}，尊敬的 {who}", self.greeting)
        } else {
            format!("{}，{who}", self.greeting)
        }
    }
}

/// 问候服务的工厂委托
#[derive(Default)]
pub struct GreeterFactory;

impl GreeterFactory {
    fn create(container: &dyn ServiceContainer, formal: bool) -> FactoryResult {
        let greeting = if container.has("greeting") {
            let value = container.get_as::<Value>("greeting")?;
            value.as_str().unwrap_or("Hello").to_string()
        } else {
            "Hello".to_string()
        };
        Ok(service(Greeter { greeting, formal }))
    }
}

impl DelegateFactory for GreeterFactory {
    fn invoke(
        &self,
        container: &dyn ServiceContainer,
        _name: &str,
        _options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        Self::create(container, false)
    }

    fn supports_method(&self, method: &str) -> bool {
        method == "createFormal"
    }

    fn call_method(
        &self,
        _method: &str,
        container: &dyn ServiceContainer,
        _name: &str,
        _options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        Self::create(container, true)
    }
}

/// 邮件发送服务
#[derive(Debug)]
pub struct Mailer {
    host: String,
    port: u16,
}

impl fmt::Display for Mailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "smtp://{}:{}", self.host, self.port)
    }
}

/// 系统时钟
#[derive(Debug)]
pub struct SystemClock {
    started_at: SystemTime,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            started_at: SystemTime::now(),
        }
    }
}

/// 示例应用可按名称构造的类
pub fn class_registry() -> ClassRegistry {
    let mut classes = ClassRegistry::new();
    classes
        .register_delegate::<GreeterFactory>("GreeterFactory")
        .register_default::<SystemClock>("SystemClock");
    classes
}

/// 代码中声明的服务
pub fn service_config() -> ServiceConfig {
    ServiceConfig::new().with_factory(
        "Mailer",
        FactoryConfig::callable(|container, _, options| {
            let host = match options.and_then(|options| options.arg::<String>(0)) {
                Some(host) => host.as_str().to_string(),
                None if container.has("smtp.host") => container
                    .get_as::<Value>("smtp.host")?
                    .as_str()
                    .context("smtp.host 必须是字符串")?
                    .to_string(),
                None => "localhost".to_string(),
            };
            let port = if container.has("smtp.port") {
                let port = container.get_as::<Value>("smtp.port")?;
                let port = port.as_u64().context("smtp.port 必须是整数")?;
                u16::try_from(port).context("smtp.port 超出范围")?
            } else {
                25
            };
            Ok(service(Mailer { host, port }))
        }),
    )
}

/// 生成服务值的可读描述
pub fn describe(value: &ServiceValue) -> String {
    if let Some(value) = value.downcast_ref::<Value>() {
        return value.to_string();
    }
    if let Some(greeter) = value.downcast_ref::<Greeter>() {
        return greeter.greet("世界");
    }
    if let Some(mailer) = value.downcast_ref::<Mailer>() {
        return mailer.to_string();
    }
    if let Some(clock) = value.downcast_ref::<SystemClock>() {
        return format!("SystemClock(started_at: {:?})", clock.started_at);
    }
    if value.is::<di_abstractions::DelegateHandle>() {
        return "<工厂委托>".to_string();
    }
    format!("<服务值, 强引用数 {}>", Arc::strong_count(value))
}
