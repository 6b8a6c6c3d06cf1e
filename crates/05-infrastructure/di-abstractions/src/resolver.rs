//! 组件解析器抽象接口
//!
//! 提供依赖解析和解析链跟踪的能力

use crate::instance::Instance;
use infrastructure_common::{DependencyError, TypeKey};
use std::sync::Arc;

/// 组件解析器 trait
///
/// 负责按类型键解析组件实例
pub trait Resolver: Send + Sync {
    /// 解析指定类型键的实例
    fn resolve_key(&self, key: TypeKey) -> Result<Instance, DependencyError>;

    /// 检查是否存在绑定或构造函数
    fn can_resolve(&self, key: TypeKey) -> bool;

    /// 解析指定类型的组件
    fn resolve<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: ?Sized + Send + Sync + 'static,
        Self: Sized,
    {
        self.resolve_key(TypeKey::of::<T>())?.downcast::<T>()
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve_key(&self, key: TypeKey) -> Result<Instance, DependencyError> {
        (**self).resolve_key(key)
    }

    fn can_resolve(&self, key: TypeKey) -> bool {
        (**self).can_resolve(key)
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve_key(&self, key: TypeKey) -> Result<Instance, DependencyError> {
        (**self).resolve_key(key)
    }

    fn can_resolve(&self, key: TypeKey) -> bool {
        (**self).can_resolve(key)
    }
}

/// 解析选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// 是否检测循环依赖
    pub detect_cycles: bool,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            max_depth: 100,
        }
    }
}

/// 解析上下文
///
/// 每次顶层解析创建一个，记录正在构造的类型链。
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    chain: Vec<TypeKey>,
    /// 解析选项
    options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            chain: Vec::new(),
            options,
        }
    }

    /// 添加类型到解析链
    pub fn push_type(&mut self, key: TypeKey) -> Result<(), DependencyError> {
        if self.options.detect_cycles && self.chain.contains(&key) {
            return Err(DependencyError::CircularDependency {
                chain: self.describe_cycle(key),
            });
        }
        if self.chain.len() >= self.options.max_depth {
            return Err(DependencyError::DepthExceeded {
                type_name: key.name().to_string(),
                max_depth: self.options.max_depth,
            });
        }
        self.chain.push(key);
        Ok(())
    }

    /// 从解析链中移除类型
    pub fn pop_type(&mut self) {
        self.chain.pop();
    }

    /// 当前深度
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// 当前解析链，最外层在前
    pub fn chain(&self) -> &[TypeKey] {
        &self.chain
    }

    /// 解析选项
    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    // 从首次出现处截取，形如 "A -> B -> A"
    fn describe_cycle(&self, key: TypeKey) -> String {
        let start = self.chain.iter().position(|k| *k == key).unwrap_or(0);
        self.chain[start..]
            .iter()
            .chain(std::iter::once(&key))
            .map(TypeKey::short_name)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
