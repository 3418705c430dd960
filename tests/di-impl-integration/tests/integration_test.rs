//! 服务容器跨 crate 集成测试

use di_abstractions::{
    DelegateFactory, FactoryResult, ServiceContainer, ServiceContainerExt, ServiceProvider,
};
use di_common::{service, ErrorKind, InfrastructureError, ServiceOptions, ServiceProviderError};
use di_composition::ContainerBootstrap;
use di_config::{ConfigServiceProvider, FactoryConfig, ServiceConfig};
use di_impl::{ClassRegistry, Container};
use serde_json::Value;
use std::error::Error as _;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// 测试用连接池
#[derive(Debug)]
struct ConnectionPool {
    dsn: String,
    size: usize,
}

#[derive(Default)]
struct ConnectionPoolFactory;

impl DelegateFactory for ConnectionPoolFactory {
    fn invoke(
        &self,
        container: &dyn ServiceContainer,
        _name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        let dsn = container.get_as::<Value>("db.dsn")?;
        let size = options
            .and_then(|options| options.arg::<usize>(0))
            .map_or(4, |size| *size);
        Ok(service(ConnectionPool {
            dsn: dsn.as_str().unwrap_or_default().to_string(),
            size,
        }))
    }

    fn supports_method(&self, method: &str) -> bool {
        method == "createReadOnly"
    }

    fn call_method(
        &self,
        _method: &str,
        container: &dyn ServiceContainer,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> FactoryResult {
        let pool = self.invoke(container, name, options)?;
        let pool = pool
            .downcast::<ConnectionPool>()
            .map_err(|_| anyhow::anyhow!("连接池类型错误"))?;
        Ok(service(ConnectionPool {
            dsn: format!("{}?mode=ro", pool.dsn),
            size: pool.size,
        }))
    }
}

fn class_registry() -> ClassRegistry {
    let mut classes = ClassRegistry::new();
    classes.register_delegate::<ConnectionPoolFactory>("ConnectionPoolFactory");
    classes
}

fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_bootstrap_from_yaml_configuration() {
    let file = write_config(
        ".yaml",
        r#"
services:
  db.dsn: postgres://localhost/app
factories:
  Pool: ConnectionPoolFactory
  ReadOnlyPool: [ConnectionPoolFactory, createReadOnly]
aliases:
  db: Pool
"#,
    );

    let container = ContainerBootstrap::new()
        .with_class_registry(class_registry())
        .add_config_file(file.path())
        .unwrap()
        .build()
        .unwrap();

    let pool = container.get_as::<ConnectionPool>("db").unwrap();
    assert_eq!(pool.dsn, "postgres://localhost/app");
    assert_eq!(pool.size, 4);

    let read_only = container.get_as::<ConnectionPool>("ReadOnlyPool").unwrap();
    assert_eq!(read_only.dsn, "postgres://localhost/app?mode=ro");

    let sized = container
        .build_as::<ConnectionPool>("db", Some(ServiceOptions::new().with_arg(16_usize)))
        .unwrap();
    assert_eq!(sized.size, 16);
    assert_eq!(container.get_as::<ConnectionPool>("Pool").unwrap().size, 4);
}

#[test]
fn test_later_configuration_overrides_earlier() {
    let base = write_config(".json", r#"{"services": {"db.dsn": "sqlite::memory:"}}"#);
    let overlay = write_config(".toml", "[services]\n\"db.dsn\" = \"postgres://prod/app\"\n");

    let container = ContainerBootstrap::new()
        .with_class_registry(class_registry())
        .add_config_file(base.path())
        .unwrap()
        .add_config_file(overlay.path())
        .unwrap()
        .add_service_config(
            ServiceConfig::new().with_factory("Pool", FactoryConfig::class("ConnectionPoolFactory")),
        )
        .build()
        .unwrap();

    let pool = container.get_as::<ConnectionPool>("Pool").unwrap();
    assert_eq!(pool.dsn, "postgres://prod/app");
}

#[test]
fn test_custom_default_factory_method() {
    let container = ContainerBootstrap::new()
        .with_class_registry(class_registry())
        .with_default_factory_method("create")
        .add_service_config(
            ServiceConfig::new()
                .with_instance("db.dsn", Value::from("mysql://db"))
                .with_factory("Pool", FactoryConfig::class_method("ConnectionPoolFactory", "create")),
        )
        .build()
        .unwrap();

    let pool = container.get_as::<ConnectionPool>("Pool").unwrap();
    assert_eq!(pool.dsn, "mysql://db");
}

#[test]
fn test_cycle_across_config_and_code_factories() {
    let config = ServiceConfig::new()
        .with_factory(
            "Left",
            FactoryConfig::callable(|container, _, _| {
                container.get("Right")?;
                Ok(service(()))
            }),
        )
        .with_factory(
            "Right",
            FactoryConfig::callable(|container, _, _| {
                container.get("left")?;
                Ok(service(()))
            }),
        )
        .with_alias("left", "Left");

    let container = Container::new();
    container.configure(&ConfigServiceProvider::new(config)).unwrap();

    let error = container.get("left").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CircularDependency);
    assert_eq!(error.service_name(), "Left");
    assert!(error.to_string().contains("Left,Right"));
}

#[test]
fn test_errors_carry_their_cause() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let config = ServiceConfig::new().with_factory(
        "Remote",
        FactoryConfig::callable(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(anyhow::anyhow!("远程服务不可用"))
        }),
    );
    let container = Container::builder()
        .add_provider(ConfigServiceProvider::new(config))
        .build()
        .unwrap();

    for _ in 0..2 {
        let error = container.get("Remote").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConstructionFailed);
        assert!(error.source().is_some());
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_provider_errors_identify_section() {
    let provider = ConfigServiceProvider::new(ServiceConfig::new().with_alias("cache", "Redis"));
    let container = Container::new();

    let error = provider.register_services(&container).unwrap_err();
    assert!(matches!(error, ServiceProviderError::Alias { .. }));
    assert_eq!(error.section().map(|section| section.as_str()), Some("aliases"));

    let bootstrap_error = ContainerBootstrap::new()
        .add_provider(provider)
        .build()
        .unwrap_err();
    assert!(matches!(bootstrap_error, InfrastructureError::ContainerError { .. }));
}

#[test]
fn test_registered_services_lists_everything() {
    let container = ContainerBootstrap::new()
        .with_class_registry(class_registry())
        .add_service_config(
            ServiceConfig::new()
                .with_instance("db.dsn", Value::from("sqlite::memory:"))
                .with_factory("Pool", FactoryConfig::class("ConnectionPoolFactory"))
                .with_alias("db", "Pool"),
        )
        .build()
        .unwrap();

    container.get("db").unwrap();

    let names: Vec<String> = container
        .registered_services()
        .into_iter()
        .map(|descriptor| descriptor.name)
        .collect();
    assert_eq!(names, vec!["ConnectionPoolFactory", "Pool", "db", "db.dsn"]);
}
