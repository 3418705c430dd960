//! 元数据定义
//!
//! 提供已注册服务和配置节的描述信息

use std::fmt;

/// 注册方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationKind {
    /// 已构建的实例
    Instance,
    /// 可调用工厂
    Factory,
    /// 工厂委托类
    FactoryDelegate,
    /// 别名
    Alias,
}

/// 已注册服务的描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// 服务名称
    pub name: String,
    /// 该名称出现在哪些注册表中
    pub kinds: Vec<RegistrationKind>,
    /// 别名指向的目标
    pub alias_target: Option<String>,
    /// 工厂委托类名
    pub delegate_class: Option<String>,
    /// 工厂委托方法名
    pub delegate_method: Option<String>,
}

impl ServiceDescriptor {
    /// 创建新的服务描述符
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kinds: Vec::new(),
            alias_target: None,
            delegate_class: None,
            delegate_method: None,
        }
    }

    /// 添加注册方式
    pub fn with_kind(mut self, kind: RegistrationKind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// 设置别名目标
    pub fn with_alias_target(mut self, target: impl Into<String>) -> Self {
        self.alias_target = Some(target.into());
        self.with_kind(RegistrationKind::Alias)
    }

    /// 设置工厂委托
    pub fn with_delegate(mut self, class_name: impl Into<String>, method: Option<String>) -> Self {
        self.delegate_class = Some(class_name.into());
        self.delegate_method = method;
        self.with_kind(RegistrationKind::FactoryDelegate)
    }

    /// 是否以指定方式注册
    pub fn is(&self, kind: RegistrationKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// 批量配置中的配置节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    /// 服务实例
    Services,
    /// 工厂
    Factories,
    /// 别名
    Aliases,
}

impl ConfigSection {
    /// 配置节在配置文件中的键名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Factories => "factories",
            Self::Aliases => "aliases",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
