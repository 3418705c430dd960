//! 服务容器实现
//!
//! 注册表的四张映射表作为一个整体受读写锁保护；调用用户工厂期间不持有锁，
//! 因此工厂可以重入容器解析自身的依赖。

use crate::builder::ContainerBuilder;
use crate::in_flight::InFlightGuard;
use crate::object_factory::ObjectFactory;
use crate::store::{FactoryDelegate, RegistrationStore};
use crate::strategy::FactoryStrategy;
use di_abstractions::{
    ClassLoader, ContainerConfig, DelegateHandle, FactoryDefinition, FactoryResult,
    NoClassLoader, ServiceContainer, ServiceProvider, ServiceRegistry,
};
use di_common::{service, ContainerError, ServiceDescriptor, ServiceOptions, ServiceValue};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// 按名称解析的服务容器
pub struct Container {
    /// 容器标识，用于区分不同容器的构建中服务
    id: Uuid,
    config: ContainerConfig,
    store: RwLock<RegistrationStore>,
    classes: Arc<dyn ClassLoader>,
}

impl Container {
    /// 创建不认识任何类的空容器
    pub fn new() -> Self {
        Self::with_class_loader(Arc::new(NoClassLoader))
    }

    /// 使用指定类加载器创建容器
    pub fn with_class_loader(classes: Arc<dyn ClassLoader>) -> Self {
        Self::with_config(ContainerConfig::default(), classes)
    }

    /// 使用指定配置和类加载器创建容器
    pub fn with_config(config: ContainerConfig, classes: Arc<dyn ClassLoader>) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            store: RwLock::new(RegistrationStore::default()),
            classes,
        }
    }

    /// 创建容器构建器
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// 容器标识
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 获取服务
    ///
    /// 已有实例直接返回；否则通过工厂策略构建并缓存
    pub fn get(&self, name: &str) -> Result<ServiceValue, ContainerError> {
        let name = self.store.read().resolve_alias(name)?;

        let cached = self.store.read().instance(&name);
        if let Some(service) = cached {
            trace!("命中服务缓存: {}", name);
            return Ok(service);
        }

        let (service, strategy) = {
            let _guard = InFlightGuard::enter(self.id, &name)?;
            let strategy = self.resolve_factory(&name)?.ok_or_else(|| {
                ContainerError::not_found(
                    name.as_str(),
                    format!("服务 '{name}' 未在容器中注册"),
                )
            })?;
            (self.invoke_factory(&strategy, &name, None)?, strategy)
        };

        self.store.write().insert_instance(&name, service.clone());
        debug!("服务已构建并缓存: {} ({})", name, strategy.describe());
        Ok(service)
    }

    /// 构建新的服务实例
    ///
    /// 总是重新调用工厂，不读取也不写入该名称的缓存；只有实例注册的服务无法构建
    pub fn build(
        &self,
        name: &str,
        options: Option<ServiceOptions>,
    ) -> Result<ServiceValue, ContainerError> {
        let name = self.store.read().resolve_alias(name)?;

        let strategy = self.resolve_factory(&name)?.ok_or_else(|| {
            ContainerError::not_found(
                name.as_str(),
                format!("无法构建服务 '{name}': 找不到有效的工厂"),
            )
        })?;

        debug!("构建服务: {} ({})", name, strategy.describe());
        self.invoke_factory(&strategy, &name, options.as_ref())
    }

    /// 检查名称是否出现在任一注册表中，不检查能否成功解析
    pub fn has(&self, name: &str) -> bool {
        self.store.read().has(name)
    }

    /// 注册服务实例，覆盖已有实例
    pub fn set(&self, name: &str, service: ServiceValue) -> &Self {
        debug!("注册服务实例: {}", name);
        self.store.write().insert_instance(name, service);
        self
    }

    /// 注册任意值为服务实例
    pub fn set_instance<T: Any + Send + Sync>(&self, name: &str, value: T) -> &Self {
        self.set(name, service(value))
    }

    /// 注册工厂
    ///
    /// 类名会被转为没有显式方法名的工厂委托
    pub fn set_factory(
        &self,
        name: &str,
        factory: impl Into<FactoryDefinition>,
    ) -> Result<&Self, ContainerError> {
        match factory.into() {
            FactoryDefinition::Callable(factory) => {
                debug!("注册工厂: {}", name);
                self.store.write().insert_factory(name, factory);
                Ok(self)
            }
            FactoryDefinition::ClassName(class_name) if class_name.trim().is_empty() => {
                Err(ContainerError::invalid_argument(
                    name,
                    format!("服务 '{name}' 的工厂参数必须是类名或可调用对象，提供了空字符串"),
                ))
            }
            FactoryDefinition::ClassName(class_name) => {
                Ok(self.set_factory_delegate(name, &class_name, None))
            }
        }
    }

    /// 以闭包注册工厂
    pub fn set_factory_fn<F>(&self, name: &str, factory: F) -> &Self
    where
        F: Fn(&dyn ServiceContainer, &str, Option<&ServiceOptions>) -> FactoryResult
            + Send
            + Sync
            + 'static,
    {
        debug!("注册工厂: {}", name);
        self.store.write().insert_factory(name, Arc::new(factory));
        self
    }

    /// 注册工厂委托类及其方法
    pub fn set_factory_delegate(&self, name: &str, class_name: &str, method: Option<&str>) -> &Self {
        debug!("注册工厂委托: {} -> {} ({:?})", name, class_name, method);
        self.store.write().insert_delegate(
            name,
            FactoryDelegate {
                class_name: class_name.to_string(),
                method: method.map(str::to_string),
            },
        );
        self
    }

    /// 注册别名
    ///
    /// 目标必须已注册为实例、工厂或工厂委托，且不能与别名相同
    pub fn set_alias(&self, alias: &str, target: &str) -> Result<&Self, ContainerError> {
        let mut store = self.store.write();

        if !store.is_alias_target(target) {
            return Err(ContainerError::invalid_argument(
                alias,
                format!("无法为未知服务 '{target}' 配置别名 '{alias}'"),
            ));
        }

        if alias == target {
            return Err(ContainerError::invalid_argument(
                alias,
                format!("无法配置与服务名 '{target}' 相同的别名 '{alias}'"),
            ));
        }

        debug!("注册别名: {} -> {}", alias, target);
        store.insert_alias(alias, target);
        Ok(self)
    }

    /// 使用服务提供者批量注册服务
    pub fn configure(&self, provider: &dyn ServiceProvider) -> Result<(), ContainerError> {
        info!("使用服务提供者注册服务: {}", provider.name());

        provider.register_services(self).map_err(|error| {
            ContainerError::construction_failed_with(
                provider.name(),
                format!(
                    "无法使用提供者 '{}' 注册服务: {}",
                    provider.name(),
                    error
                ),
                Box::new(error),
            )
        })
    }

    /// 获取所有已注册服务的描述符（按名称排序）
    pub fn registered_services(&self) -> Vec<ServiceDescriptor> {
        self.store.read().descriptors()
    }

    /// 按优先级选定工厂策略：可调用工厂、工厂委托、对象工厂
    fn resolve_factory(&self, name: &str) -> Result<Option<FactoryStrategy>, ContainerError> {
        let (factory, delegate) = {
            let store = self.store.read();
            (store.factory(name), store.delegate(name))
        };

        if let Some(factory) = factory {
            return Ok(Some(FactoryStrategy::Callable(factory)));
        }

        if let Some(delegate) = delegate {
            return self.resolve_delegate(name, &delegate).map(Some);
        }

        if self.classes.class_exists(name) {
            return Ok(Some(FactoryStrategy::Object(self.object_factory())));
        }

        Ok(None)
    }

    fn resolve_delegate(
        &self,
        name: &str,
        delegate: &FactoryDelegate,
    ) -> Result<FactoryStrategy, ContainerError> {
        let class_name = delegate.class_name.as_str();

        if class_name == name {
            return Err(ContainerError::construction_failed(
                name,
                format!("检测到服务 '{name}' 的循环配置依赖: 工厂委托指向自身"),
            ));
        }

        let registered = {
            let mut store = self.store.write();
            if self.config.auto_register_delegate_classes
                && !store.has(class_name)
                && self.classes.class_exists(class_name)
            {
                debug!("自动注册工厂委托类: {}", class_name);
                store.insert_factory(class_name, Arc::new(self.object_factory()));
            }
            store.has(class_name)
        };

        if !registered {
            return Err(ContainerError::construction_failed(
                name,
                format!(
                    "为服务 '{name}' 注册的工厂服务 '{class_name}' 不是有效的服务或类名"
                ),
            ));
        }

        let handle = self
            .get(class_name)?
            .downcast::<DelegateHandle>()
            .map_err(|_| {
                ContainerError::construction_failed(
                    name,
                    format!("为服务 '{name}' 注册的工厂 '{class_name}' 不可调用"),
                )
            })?;

        let method = delegate
            .method
            .as_deref()
            .filter(|method| *method != self.config.default_factory_method);

        if !handle.supports(method) {
            return Err(ContainerError::construction_failed(
                name,
                format!(
                    "为服务 '{name}' 注册的工厂 '{class_name}' 不支持方法 '{}'",
                    method.unwrap_or_default()
                ),
            ));
        }

        Ok(FactoryStrategy::Delegate {
            handle,
            method: method.map(str::to_string),
        })
    }

    /// 调用工厂策略；容器错误原样传播，其他错误包装为创建失败
    fn invoke_factory(
        &self,
        strategy: &FactoryStrategy,
        name: &str,
        options: Option<&ServiceOptions>,
    ) -> Result<ServiceValue, ContainerError> {
        strategy
            .invoke(self, name, options)
            .map_err(|error| match error.downcast::<ContainerError>() {
                Ok(container_error) => container_error,
                Err(error) => ContainerError::construction_failed_with(
                    name,
                    format!("服务 '{name}' 创建失败: {error}"),
                    error.into(),
                ),
            })
    }

    fn object_factory(&self) -> ObjectFactory {
        ObjectFactory::new(Arc::clone(&self.classes))
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("services", &self.registered_services().len())
            .finish_non_exhaustive()
    }
}

impl ServiceContainer for Container {
    fn get(&self, name: &str) -> Result<ServiceValue, ContainerError> {
        Container::get(self, name)
    }

    fn has(&self, name: &str) -> bool {
        Container::has(self, name)
    }

    fn build(
        &self,
        name: &str,
        options: Option<ServiceOptions>,
    ) -> Result<ServiceValue, ContainerError> {
        Container::build(self, name, options)
    }
}

impl ServiceRegistry for Container {
    fn set(&self, name: &str, service: ServiceValue) {
        Container::set(self, name, service);
    }

    fn set_factory(&self, name: &str, factory: FactoryDefinition) -> Result<(), ContainerError> {
        Container::set_factory(self, name, factory).map(|_| ())
    }

    fn set_factory_delegate(&self, name: &str, class_name: &str, method: Option<&str>) {
        Container::set_factory_delegate(self, name, class_name, method);
    }

    fn set_alias(&self, alias: &str, target: &str) -> Result<(), ContainerError> {
        Container::set_alias(self, alias, target).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_flight;
    use crate::ClassRegistry;
    use di_abstractions::{DelegateFactory, ServiceContainerExt, ServiceFactory};
    use di_common::ErrorKind;
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Mailer {
        sender: String,
    }

    #[derive(Default)]
    struct MailerFactory;

    impl DelegateFactory for MailerFactory {
        fn invoke(
            &self,
            _container: &dyn ServiceContainer,
            name: &str,
            _options: Option<&ServiceOptions>,
        ) -> FactoryResult {
            Ok(service(Mailer {
                sender: format!("{name}@invoke"),
            }))
        }

        fn supports_method(&self, method: &str) -> bool {
            method == "createSmtp"
        }

        fn call_method(
            &self,
            method: &str,
            _container: &dyn ServiceContainer,
            name: &str,
            _options: Option<&ServiceOptions>,
        ) -> FactoryResult {
            Ok(service(Mailer {
                sender: format!("{name}@{method}"),
            }))
        }
    }

    fn counting_factory(calls: &Arc<AtomicUsize>) -> Arc<dyn ServiceFactory> {
        let calls = Arc::clone(calls);
        di_abstractions::factory_fn(move |_, _, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(service(Mailer::default()))
        })
    }

    #[test]
    fn test_instance_wins_over_factory() {
        let container = Container::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let instance = service(Mailer::default());

        container.set("Mailer", instance.clone());
        container.set_factory("Mailer", counting_factory(&calls)).unwrap();

        let first = container.get("Mailer").unwrap();
        let second = container.get("Mailer").unwrap();

        assert!(Arc::ptr_eq(&first, &instance));
        assert!(Arc::ptr_eq(&second, &instance));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_factory_result_is_cached() {
        let container = Container::new();
        let calls = Arc::new(AtomicUsize::new(0));
        container.set_factory("Mailer", counting_factory(&calls)).unwrap();

        let first = container.get("Mailer").unwrap();
        let second = container.get("Mailer").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_build_bypasses_cache() {
        let container = Container::new();
        let calls = Arc::new(AtomicUsize::new(0));
        container.set_factory("Mailer", counting_factory(&calls)).unwrap();

        let cached = container.get("Mailer").unwrap();
        let built = container.build("Mailer", None).unwrap();
        let again = container.build("Mailer", None).unwrap();

        assert!(!Arc::ptr_eq(&cached, &built));
        assert!(!Arc::ptr_eq(&built, &again));
        assert!(Arc::ptr_eq(&cached, &container.get("Mailer").unwrap()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_build_requires_factory() {
        let container = Container::new();
        container.set_instance("Config", 1_u32);

        let error = container.build("Config", None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.service_name(), "Config");
    }

    #[test]
    fn test_alias_chain_resolves_to_same_instance() {
        let container = Container::new();
        container.set_instance("Database", String::from("pg"));
        container.set_alias("Db", "Database").unwrap();

        let database = container.get("Database").unwrap();
        let db = container.get("Db").unwrap();
        assert!(Arc::ptr_eq(&database, &db));

        // 别名不能直接指向别名，但已注册的目标可以再被重新指向
        assert!(container.set_alias("Storage", "Db").is_err());
        container.set_instance("Primary", String::from("replica"));
        container.set_alias("Database", "Primary").unwrap();

        let primary = container.get("Primary").unwrap();
        assert!(Arc::ptr_eq(&container.get("Db").unwrap(), &primary));
    }

    #[test]
    fn test_set_alias_validation() {
        let container = Container::new();
        container.set_instance("x", ());

        let identical = container.set_alias("x", "x").unwrap_err();
        assert_eq!(identical.kind(), ErrorKind::InvalidArgument);

        let unknown = container.set_alias("Alias", "Unknown").unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::InvalidArgument);
        assert!(unknown.to_string().contains("Unknown"));
        assert!(!container.has("Alias"));
    }

    #[test]
    fn test_set_factory_rejects_blank_class_name() {
        let container = Container::new();
        let error = container.set_factory("Mailer", "  ").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert!(!container.has("Mailer"));
    }

    #[test]
    fn test_string_factory_registers_delegate() {
        let container = Container::new();
        container.set_factory("Mailer", "MailerFactory").unwrap();

        let descriptor = container
            .registered_services()
            .into_iter()
            .find(|d| d.name == "Mailer")
            .unwrap();
        assert_eq!(descriptor.delegate_class.as_deref(), Some("MailerFactory"));
        assert_eq!(descriptor.delegate_method, None);
    }

    #[test]
    fn test_has_does_not_check_resolvability() {
        let container = Container::new();
        container.set_factory_delegate("Mailer", "NoSuchFactory", None);

        assert!(container.has("Mailer"));
        let error = container.get("Mailer").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConstructionFailed);
        assert!(error.to_string().contains("NoSuchFactory"));
    }

    #[test]
    fn test_self_delegation_fails_without_invocation() {
        let mut classes = ClassRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        classes.register("Mailer", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(DelegateHandle::new(MailerFactory).into_service())
        });
        let container = Container::with_class_loader(Arc::new(classes));
        container.set_factory_delegate("Mailer", "Mailer", None);

        let error = container.get("Mailer").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConstructionFailed);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_delegate_class_is_auto_registered_and_invoked() {
        let mut classes = ClassRegistry::new();
        classes.register_delegate::<MailerFactory>("MailerFactory");
        let container = Container::with_class_loader(Arc::new(classes));
        container.set_factory_delegate("Mailer", "MailerFactory", None);
        container.set_factory_delegate("SmtpMailer", "MailerFactory", Some("createSmtp"));

        let mailer = container.get_as::<Mailer>("Mailer").unwrap();
        let smtp = container.get_as::<Mailer>("SmtpMailer").unwrap();

        assert_eq!(mailer.sender, "Mailer@invoke");
        assert_eq!(smtp.sender, "SmtpMailer@createSmtp");
        assert!(container.has("MailerFactory"));
    }

    #[test]
    fn test_default_method_name_is_configurable() {
        let mut classes = ClassRegistry::new();
        classes.register_delegate::<MailerFactory>("MailerFactory");
        let config = ContainerConfig::default().with_default_factory_method("make");
        let container = Container::with_config(config, Arc::new(classes));
        container.set_factory_delegate("Mailer", "MailerFactory", Some("make"));

        let mailer = container.get_as::<Mailer>("Mailer").unwrap();
        assert_eq!(mailer.sender, "Mailer@invoke");
    }

    #[test]
    fn test_delegate_without_method_support_is_rejected() {
        let mut classes = ClassRegistry::new();
        classes.register_delegate::<MailerFactory>("MailerFactory");
        classes.register_default::<Mailer>("PlainObject");
        let container = Container::with_class_loader(Arc::new(classes));
        container.set_factory_delegate("Unsupported", "MailerFactory", Some("createPop3"));
        container.set_factory_delegate("NotInvokable", "PlainObject", None);

        let unsupported = container.get("Unsupported").unwrap_err();
        assert_eq!(unsupported.kind(), ErrorKind::ConstructionFailed);
        assert!(unsupported.to_string().contains("createPop3"));

        let not_invokable = container.get("NotInvokable").unwrap_err();
        assert_eq!(not_invokable.kind(), ErrorKind::ConstructionFailed);
        assert!(not_invokable.to_string().contains("不可调用"));
    }

    #[test]
    fn test_mutual_dependency_is_circular() {
        let container = Container::new();
        container.set_factory_fn("A", |container, _, _| {
            container.get("B")?;
            Ok(service(()))
        });
        container.set_factory_fn("B", |container, _, _| {
            container.get("A")?;
            Ok(service(()))
        });

        let error = container.get("A").unwrap_err();
        match &error {
            ContainerError::CircularDependency { name, chain } => {
                assert_eq!(name, "A");
                assert_eq!(chain, &vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("意外的错误: {other:?}"),
        }
        assert!(in_flight::chain(container.id()).is_empty());
        assert!(!container
            .registered_services()
            .iter()
            .any(|d| d.is(di_common::RegistrationKind::Instance)));
    }

    #[test]
    fn test_missing_service_is_not_found() {
        let container = Container::new();
        let error = container.get("Missing").unwrap_err();

        assert!(error.is_not_found());
        assert!(error.to_string().contains("Missing"));
    }

    #[test]
    fn test_class_name_is_constructed_and_cached() {
        let mut classes = ClassRegistry::new();
        classes.register_default::<Mailer>("Mailer");
        let container = Container::with_class_loader(Arc::new(classes));

        let first = container.get("Mailer").unwrap();
        let second = container.get("Mailer").unwrap();

        assert!(first.is::<Mailer>());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_build_passes_options_to_constructor() {
        let mut classes = ClassRegistry::new();
        classes.register("Mailer", |options| {
            let sender = options
                .and_then(|options| options.arg::<String>(0))
                .map_or_else(|| "default".to_string(), |sender| sender.as_str().to_string());
            Ok(service(Mailer { sender }))
        });
        let container = Container::with_class_loader(Arc::new(classes));

        let options = ServiceOptions::new().with_arg(String::from("ops"));
        let built = container.build_as::<Mailer>("Mailer", Some(options)).unwrap();
        let cached = container.get_as::<Mailer>("Mailer").unwrap();

        assert_eq!(built.sender, "ops");
        assert_eq!(cached.sender, "default");
    }

    #[test]
    fn test_foreign_error_is_wrapped() {
        let container = Container::new();
        container.set_factory_fn("Database", |_, _, _| Err(anyhow::anyhow!("连接被拒绝")));

        let error = container.get("Database").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ConstructionFailed);
        assert_eq!(error.service_name(), "Database");
        assert!(error.to_string().contains("连接被拒绝"));
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("连接被拒绝")
        );
        assert!(in_flight::chain(container.id()).is_empty());
    }

    #[test]
    fn test_nested_container_error_propagates_unchanged() {
        let container = Container::new();
        container.set_factory_fn("Repository", |container, _, _| {
            container.get("Database")?;
            Ok(service(()))
        });

        let error = container.get("Repository").unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.service_name(), "Database");
    }

    #[test]
    fn test_mutual_delegates_are_circular() {
        let container = Container::new();
        container.set_factory_delegate("X", "Y", None);
        container.set_factory_delegate("Y", "X", None);

        let error = container.get("X").unwrap_err();
        match &error {
            ContainerError::CircularDependency { name, chain } => {
                assert_eq!(name, "X");
                assert_eq!(chain, &vec!["X".to_string(), "Y".to_string()]);
            }
            other => panic!("意外的错误: {other:?}"),
        }
        assert!(in_flight::chain(container.id()).is_empty());

        let error = container.build("Y", None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CircularDependency);
        assert!(in_flight::chain(container.id()).is_empty());
    }

    #[test]
    fn test_delegate_factory_calling_back_is_circular() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let container = Container::new();
        container.set_factory_fn("ReportFactory", move |container, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            container.get("Report")?;
            Ok(DelegateHandle::new(MailerFactory).into_service())
        });
        container.set_factory_delegate("Report", "ReportFactory", None);

        let error = container.get("Report").unwrap_err();
        match &error {
            ContainerError::CircularDependency { name, chain } => {
                assert_eq!(name, "Report");
                assert_eq!(
                    chain,
                    &vec!["Report".to_string(), "ReportFactory".to_string()]
                );
            }
            other => panic!("意外的错误: {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(in_flight::chain(container.id()).is_empty());
    }

    #[test]
    fn test_alias_loop_is_reported() {
        let container = Container::new();
        container.set_instance("A", 1_u8);
        container.set_instance("B", 2_u8);
        container.set_alias("A", "B").unwrap();
        container.set_alias("B", "A").unwrap();

        let error = container.get("A").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CircularDependency);
    }
}
