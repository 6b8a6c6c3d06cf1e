//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义模块声明和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Module`] - 绑定模块
//! - [`Binding`] - 提供者与别名绑定
//! - [`Injectable`] - 可注入构造函数
//! - [`Resolver`] - 依赖解析器接口
//! - [`InjectionTarget`] - 字段注入目标
//! - [`ObjectFactory`] - 对象工厂接口

pub mod binding;
pub mod dependencies;
pub mod factory;
pub mod injectable;
pub mod injection;
pub mod instance;
pub mod module;
pub mod resolver;

pub use binding::*;
pub use dependencies::*;
pub use factory::*;
pub use injectable::*;
pub use injection::*;
pub use instance::*;
pub use module::*;
pub use resolver::*;

pub use infrastructure_common::{BoxError, CreationError, DependencyError, Lifetime, TypeKey};

#[cfg(feature = "macros")]
pub use component_macros::{Injectable, InjectionTarget};
