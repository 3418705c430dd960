//! 服务注册表存储
//!
//! 四张互相独立的映射表：实例、可调用工厂、工厂委托、别名

use di_abstractions::ServiceFactory;
use di_common::{ContainerError, RegistrationKind, ServiceDescriptor, ServiceValue};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// 工厂委托描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryDelegate {
    /// 委托类名，本身也作为服务解析
    pub class_name: String,
    /// 调用的方法名，`None` 表示约定方法
    pub method: Option<String>,
}

#[derive(Default)]
pub(crate) struct RegistrationStore {
    instances: HashMap<String, ServiceValue>,
    factories: HashMap<String, Arc<dyn ServiceFactory>>,
    delegates: HashMap<String, FactoryDelegate>,
    aliases: HashMap<String, String>,
}

impl RegistrationStore {
    pub(crate) fn insert_instance(&mut self, name: &str, service: ServiceValue) {
        self.instances.insert(name.to_string(), service);
    }

    pub(crate) fn insert_factory(&mut self, name: &str, factory: Arc<dyn ServiceFactory>) {
        self.factories.insert(name.to_string(), factory);
    }

    pub(crate) fn insert_delegate(&mut self, name: &str, delegate: FactoryDelegate) {
        self.delegates.insert(name.to_string(), delegate);
    }

    pub(crate) fn insert_alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    pub(crate) fn instance(&self, name: &str) -> Option<ServiceValue> {
        self.instances.get(name).cloned()
    }

    pub(crate) fn factory(&self, name: &str) -> Option<Arc<dyn ServiceFactory>> {
        self.factories.get(name).cloned()
    }

    pub(crate) fn delegate(&self, name: &str) -> Option<FactoryDelegate> {
        self.delegates.get(name).cloned()
    }

    /// 是否出现在任一映射表中
    pub(crate) fn has(&self, name: &str) -> bool {
        self.is_alias_target(name) || self.aliases.contains_key(name)
    }

    /// 是否出现在实例、工厂或工厂委托中（别名只能指向这些名称）
    pub(crate) fn is_alias_target(&self, name: &str) -> bool {
        self.instances.contains_key(name)
            || self.factories.contains_key(name)
            || self.delegates.contains_key(name)
    }

    /// 沿别名链找到最终名称
    ///
    /// 别名被重新指向后可能形成环，此时返回循环依赖错误而不是无限跟随
    pub(crate) fn resolve_alias(&self, name: &str) -> Result<String, ContainerError> {
        let mut current = name;
        let mut hops: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        while let Some(target) = self.aliases.get(current) {
            if !seen.insert(current) {
                return Err(ContainerError::circular_dependency(name, hops));
            }
            hops.push(current.to_string());
            current = target;
        }

        Ok(current.to_string())
    }

    pub(crate) fn descriptors(&self) -> Vec<ServiceDescriptor> {
        let mut descriptors: BTreeMap<String, ServiceDescriptor> = BTreeMap::new();

        for name in self.instances.keys() {
            update_descriptor(&mut descriptors, name, |d| d.with_kind(RegistrationKind::Instance));
        }
        for name in self.factories.keys() {
            update_descriptor(&mut descriptors, name, |d| d.with_kind(RegistrationKind::Factory));
        }
        for (name, delegate) in &self.delegates {
            update_descriptor(&mut descriptors, name, |d| {
                d.with_delegate(delegate.class_name.as_str(), delegate.method.clone())
            });
        }
        for (alias, target) in &self.aliases {
            update_descriptor(&mut descriptors, alias, |d| d.with_alias_target(target.as_str()));
        }

        descriptors.into_values().collect()
    }
}

fn update_descriptor(
    descriptors: &mut BTreeMap<String, ServiceDescriptor>,
    name: &str,
    apply: impl FnOnce(ServiceDescriptor) -> ServiceDescriptor,
) {
    let current = descriptors
        .remove(name)
        .unwrap_or_else(|| ServiceDescriptor::new(name));
    descriptors.insert(name.to_string(), apply(current));
}

#[cfg(test)]
mod tests {
    use super::*;
    use di_common::{service, ErrorKind};

    #[test]
    fn test_has_covers_all_mappings() {
        let mut store = RegistrationStore::default();
        store.insert_instance("Config", service(1_u8));
        store.insert_delegate(
            "Mailer",
            FactoryDelegate {
                class_name: "NoSuchFactory".to_string(),
                method: None,
            },
        );
        store.insert_alias("Settings", "Config");

        assert!(store.has("Config"));
        assert!(store.has("Mailer"));
        assert!(store.has("Settings"));
        assert!(!store.has("Missing"));
        assert!(!store.is_alias_target("Settings"));
    }

    #[test]
    fn test_resolve_alias_follows_chain() {
        let mut store = RegistrationStore::default();
        store.insert_instance("Database", service("pg"));
        store.insert_alias("Db", "Database");
        store.insert_alias("Storage", "Db");

        assert_eq!(store.resolve_alias("Storage").unwrap(), "Database");
        assert_eq!(store.resolve_alias("Database").unwrap(), "Database");
        assert_eq!(store.resolve_alias("Unknown").unwrap(), "Unknown");
    }

    #[test]
    fn test_resolve_alias_detects_loop() {
        let mut store = RegistrationStore::default();
        store.insert_alias("A", "B");
        store.insert_alias("B", "A");

        let error = store.resolve_alias("A").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CircularDependency);
        match error {
            ContainerError::CircularDependency { chain, .. } => {
                assert_eq!(chain, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("意外的错误: {other:?}"),
        }
    }

    #[test]
    fn test_descriptors_are_sorted_and_merged() {
        let mut store = RegistrationStore::default();
        store.insert_instance("Zeta", service(()));
        store.insert_instance("Alpha", service(()));
        store.insert_delegate(
            "Alpha",
            FactoryDelegate {
                class_name: "AlphaFactory".to_string(),
                method: Some("create".to_string()),
            },
        );
        store.insert_alias("A", "Alpha");

        let descriptors = store.descriptors();
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "Alpha", "Zeta"]);

        let alpha = &descriptors[1];
        assert!(alpha.is(RegistrationKind::Instance));
        assert!(alpha.is(RegistrationKind::FactoryDelegate));
        assert_eq!(alpha.delegate_class.as_deref(), Some("AlphaFactory"));
        assert_eq!(alpha.delegate_method.as_deref(), Some("create"));
        assert_eq!(descriptors[0].alias_target.as_deref(), Some("Alpha"));
    }
}
