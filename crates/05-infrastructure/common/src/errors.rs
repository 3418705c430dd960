//! 错误类型定义

use crate::metadata::ConfigSection;
use thiserror::Error;

/// 装箱的底层错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 容器错误种类
///
/// 调用方可以按种类分支处理，而不必匹配具体的变体字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 服务不存在
    NotFound,
    /// 循环依赖
    CircularDependency,
    /// 服务创建失败
    ConstructionFailed,
    /// 参数无效
    InvalidArgument,
    /// 服务类型不匹配
    TypeMismatch,
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("{message}")]
    NotFound { name: String, message: String },

    #[error("检测到服务 '{name}' 的循环依赖，依赖链: {}", .chain.join(","))]
    CircularDependency { name: String, chain: Vec<String> },

    #[error("{message}")]
    ConstructionFailed {
        name: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("{message}")]
    InvalidArgument { name: String, message: String },

    #[error("服务 '{name}' 类型不匹配: 期望 {expected}")]
    TypeMismatch { name: String, expected: &'static str },
}

impl ContainerError {
    /// 创建服务未找到错误
    pub fn not_found(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            message: message.into(),
        }
    }

    /// 创建循环依赖错误
    pub fn circular_dependency(name: impl Into<String>, chain: Vec<String>) -> Self {
        Self::CircularDependency {
            name: name.into(),
            chain,
        }
    }

    /// 创建服务创建失败错误
    pub fn construction_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            name: name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// 创建带底层原因的服务创建失败错误
    pub fn construction_failed_with(
        name: impl Into<String>,
        message: impl Into<String>,
        source: BoxError,
    ) -> Self {
        Self::ConstructionFailed {
            name: name.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// 创建参数无效错误
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: std::any::type_name::<T>(),
        }
    }

    /// 获取错误种类
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::CircularDependency { .. } => ErrorKind::CircularDependency,
            Self::ConstructionFailed { .. } => ErrorKind::ConstructionFailed,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// 获取出错的服务名称
    pub fn service_name(&self) -> &str {
        match self {
            Self::NotFound { name, .. }
            | Self::CircularDependency { name, .. }
            | Self::ConstructionFailed { name, .. }
            | Self::InvalidArgument { name, .. }
            | Self::TypeMismatch { name, .. } => name,
        }
    }

    /// 是否为服务未找到错误
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// 服务提供者错误类型
///
/// 批量注册过程中的任何注册表错误都会被包装为此类型，并保留原始错误
#[derive(Error, Debug)]
pub enum ServiceProviderError {
    #[error("无法注册服务 '{name}': {source}")]
    Service {
        name: String,
        #[source]
        source: ContainerError,
    },

    #[error("无法为服务 '{name}' 设置工厂: {source}")]
    Factory {
        name: String,
        #[source]
        source: ContainerError,
    },

    #[error("无法为服务 '{target}' 注册别名 '{alias}': {source}")]
    Alias {
        alias: String,
        target: String,
        #[source]
        source: ContainerError,
    },

    #[error("无法注册服务 '{name}': 提供的数组配置无效")]
    InvalidArrayConfig { name: String },

    #[error("无法注册服务 '{name}': 提供的工厂不可调用")]
    NotCallable { name: String },

    #[error("服务配置加载失败: {message}")]
    Load {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl ServiceProviderError {
    /// 创建配置加载错误
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带底层原因的配置加载错误
    pub fn load_with(message: impl Into<String>, source: BoxError) -> Self {
        Self::Load {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 获取出错的配置节
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            Self::Service { .. } => Some(ConfigSection::Services),
            Self::Factory { .. } | Self::InvalidArrayConfig { .. } | Self::NotCallable { .. } => {
                Some(ConfigSection::Factories)
            }
            Self::Alias { .. } => Some(ConfigSection::Aliases),
            Self::Load { .. } => None,
        }
    }

    /// 获取出错的服务名称（别名错误返回别名）
    pub fn service_name(&self) -> Option<&str> {
        match self {
            Self::Service { name, .. }
            | Self::Factory { name, .. }
            | Self::InvalidArrayConfig { name }
            | Self::NotCallable { name } => Some(name),
            Self::Alias { alias, .. } => Some(alias),
            Self::Load { .. } => None,
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("容器错误: {source}")]
    ContainerError {
        #[from]
        source: ContainerError,
    },

    #[error("服务提供者错误: {source}")]
    ProviderError {
        #[from]
        source: ServiceProviderError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ContainerResult<T> = Result<T, ContainerError>;
pub type ProviderResult<T> = Result<T, ServiceProviderError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
