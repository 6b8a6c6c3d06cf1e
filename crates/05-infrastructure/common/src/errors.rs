//! 错误类型定义

use crate::metadata::TypeKey;
use thiserror::Error;

/// 工厂与构造函数返回的通用错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {type_name}")]
    MissingBinding { type_name: String },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    Instantiation {
        type_name: String,
        #[source]
        source: BoxError,
    },

    #[error("注入字段赋值失败: {target}.{field}, 期望 {expected}, 实际 {actual}")]
    InjectionTarget {
        target: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error("循环依赖检测到: {chain}")]
    CircularDependency { chain: String },

    #[error("解析深度超过上限 {max_depth}: {type_name}")]
    DepthExceeded { type_name: String, max_depth: usize },

    #[error("类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn missing(key: TypeKey) -> Self {
        Self::MissingBinding {
            type_name: key.name().to_string(),
        }
    }

    /// 创建实例化错误
    pub fn instantiation(key: TypeKey, source: impl Into<BoxError>) -> Self {
        Self::Instantiation {
            type_name: key.name().to_string(),
            source: source.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(expected: TypeKey, actual: TypeKey) -> Self {
        Self::TypeMismatch {
            expected: expected.name().to_string(),
            actual: actual.name().to_string(),
        }
    }

    /// 出错的类型名称
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::MissingBinding { type_name }
            | Self::Instantiation { type_name, .. }
            | Self::DepthExceeded { type_name, .. } => Some(type_name.as_str()),
            Self::TypeMismatch { expected, .. } | Self::InjectionTarget { expected, .. } => {
                Some(expected.as_str())
            }
            Self::CircularDependency { .. } => None,
        }
    }

    /// 是否为未注册错误
    pub fn is_missing_binding(&self) -> bool {
        matches!(self, Self::MissingBinding { .. })
    }
}

/// 对象工厂创建失败
///
/// 对外部对象创建接口暴露的高层错误，包装底层解析错误。
#[derive(Error, Debug)]
#[error("创建实例失败: {type_name}")]
pub struct CreationError {
    pub type_name: String,
    #[source]
    pub source: DependencyError,
}

impl CreationError {
    /// 创建新的工厂错误
    pub fn new(key: TypeKey, source: DependencyError) -> Self {
        Self {
            type_name: key.name().to_string(),
            source,
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
