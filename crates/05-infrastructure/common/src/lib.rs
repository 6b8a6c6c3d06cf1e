//! # Infrastructure Common
//!
//! 依赖注入引擎各层共享的基础类型。
//!
//! ## 核心类型
//!
//! - [`TypeKey`] - 类型键，所有绑定表与缓存的键
//! - [`Lifetime`] - 组件生命周期（单例 / 瞬时）
//! - [`DependencyError`] - 依赖解析错误
//! - [`CreationError`] - 对象工厂错误
//! - [`InfrastructureError`] - 启动层错误

pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
