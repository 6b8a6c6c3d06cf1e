//! 绑定描述
//!
//! 模块声明的两种绑定（提供者与别名）以及构造函数表条目

use crate::dependencies::Dependencies;
use crate::injectable::Injectable;
use crate::instance::Instance;
use infrastructure_common::{BoxError, DependencyError, Lifetime, TypeKey};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// 类型擦除的工厂函数，参数按声明顺序传入
pub type FactoryFn = Arc<dyn Fn(Vec<Instance>) -> Result<Instance, DependencyError> + Send + Sync>;

/// 类型擦除的向上转换函数
pub type UpcastFn = Arc<dyn Fn(Instance) -> Result<Instance, DependencyError> + Send + Sync>;

/// 提供者绑定
///
/// 由工厂函数生成 `key` 对应的实例，参数先行解析。
#[derive(Clone)]
pub struct ProviderBinding {
    key: TypeKey,
    parameters: Vec<TypeKey>,
    lifetime: Lifetime,
    factory: FactoryFn,
}

impl ProviderBinding {
    /// 使用类型擦除的工厂函数创建
    pub fn new<F>(key: TypeKey, parameters: Vec<TypeKey>, lifetime: Lifetime, factory: F) -> Self
    where
        F: Fn(Vec<Instance>) -> Result<Instance, DependencyError> + Send + Sync + 'static,
    {
        Self {
            key,
            parameters,
            lifetime,
            factory: Arc::new(factory),
        }
    }

    /// 使用强类型工厂函数创建
    ///
    /// 工厂返回的错误包装为 [`DependencyError::Instantiation`]。
    pub fn typed<T, D>(
        lifetime: Lifetime,
        factory: impl Fn(D) -> Result<Arc<T>, BoxError> + Send + Sync + 'static,
    ) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        D: Dependencies,
    {
        let key = TypeKey::of::<T>();
        Self::new(key, D::keys(), lifetime, move |instances| {
            let dependencies = D::from_instances(instances)?;
            factory(dependencies)
                .map(Instance::new)
                .map_err(|source| DependencyError::instantiation(key, source))
        })
    }

    /// 提供的类型键
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// 有序的参数类型
    pub fn parameters(&self) -> &[TypeKey] {
        &self.parameters
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 以解析好的参数调用工厂
    pub fn invoke(&self, arguments: Vec<Instance>) -> Result<Instance, DependencyError> {
        (self.factory)(arguments)
    }
}

impl fmt::Debug for ProviderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderBinding")
            .field("key", &self.key)
            .field("parameters", &self.parameters)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

/// 别名绑定
///
/// 接口类型 `key` 解析为实现类型 `target` 的实例。
#[derive(Clone)]
pub struct AliasBinding {
    key: TypeKey,
    target: TypeKey,
    lifetime: Lifetime,
    upcast: UpcastFn,
}

impl AliasBinding {
    /// 使用类型擦除的转换函数创建
    pub fn new<F>(key: TypeKey, target: TypeKey, lifetime: Lifetime, upcast: F) -> Self
    where
        F: Fn(Instance) -> Result<Instance, DependencyError> + Send + Sync + 'static,
    {
        Self {
            key,
            target,
            lifetime,
            upcast: Arc::new(upcast),
        }
    }

    /// 把实现 `T` 绑定到接口 `I`
    pub fn typed<I, T>(
        lifetime: Lifetime,
        upcast: impl Fn(Arc<T>) -> Arc<I> + Send + Sync + 'static,
    ) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: ?Sized + Send + Sync + 'static,
    {
        Self::new(TypeKey::of::<I>(), TypeKey::of::<T>(), lifetime, move |instance| {
            let implementation = instance.downcast::<T>()?;
            Ok(Instance::new(upcast(implementation)))
        })
    }

    /// 接口类型键
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// 实现类型
    pub fn target(&self) -> TypeKey {
        self.target
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 把实现实例转换为接口实例
    pub fn upcast(&self, instance: Instance) -> Result<Instance, DependencyError> {
        (self.upcast)(instance)
    }
}

impl fmt::Debug for AliasBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliasBinding")
            .field("key", &self.key)
            .field("target", &self.target)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

/// 绑定
#[derive(Debug, Clone)]
pub enum Binding {
    Provider(ProviderBinding),
    Alias(AliasBinding),
}

impl Binding {
    /// 绑定提供的类型
    pub fn key(&self) -> TypeKey {
        match self {
            Self::Provider(provider) => provider.key(),
            Self::Alias(alias) => alias.key(),
        }
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        match self {
            Self::Provider(provider) => provider.lifetime(),
            Self::Alias(alias) => alias.lifetime(),
        }
    }

    /// 诊断用的描述
    pub fn describe(&self) -> BindingDescriptor {
        match self {
            Self::Provider(provider) => BindingDescriptor {
                key: provider.key(),
                kind: BindingKind::Provider,
                lifetime: provider.lifetime(),
                parameters: provider.parameters().to_vec(),
                target: None,
            },
            Self::Alias(alias) => BindingDescriptor {
                key: alias.key(),
                kind: BindingKind::Alias,
                lifetime: alias.lifetime(),
                parameters: Vec::new(),
                target: Some(alias.target()),
            },
        }
    }
}

impl From<ProviderBinding> for Binding {
    fn from(binding: ProviderBinding) -> Self {
        Self::Provider(binding)
    }
}

impl From<AliasBinding> for Binding {
    fn from(binding: AliasBinding) -> Self {
        Self::Alias(binding)
    }
}

/// 构造函数种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorKind {
    /// 标记为可注入的构造函数
    Injectable,
    /// 无参构造（`Default`）
    ZeroArgument,
}

/// 构造函数表条目
///
/// 没有绑定的类型通过它直接构造。
#[derive(Clone)]
pub struct ConstructorSpec {
    key: TypeKey,
    kind: ConstructorKind,
    parameters: Vec<TypeKey>,
    lifetime: Lifetime,
    construct: FactoryFn,
}

impl ConstructorSpec {
    /// 使用类型擦除的构造函数创建
    pub fn new<F>(
        key: TypeKey,
        kind: ConstructorKind,
        parameters: Vec<TypeKey>,
        lifetime: Lifetime,
        construct: F,
    ) -> Self
    where
        F: Fn(Vec<Instance>) -> Result<Instance, DependencyError> + Send + Sync + 'static,
    {
        Self {
            key,
            kind,
            parameters,
            lifetime,
            construct: Arc::new(construct),
        }
    }

    /// 可注入构造函数
    pub fn injectable<T: Injectable>() -> Self {
        let key = TypeKey::of::<T>();
        Self::new(
            key,
            ConstructorKind::Injectable,
            T::Dependencies::keys(),
            T::LIFETIME,
            move |instances| {
                let dependencies = T::Dependencies::from_instances(instances)?;
                T::construct(dependencies)
                    .map(|value| Instance::new(Arc::new(value)))
                    .map_err(|source| DependencyError::instantiation(key, source))
            },
        )
    }

    /// 无参构造函数
    pub fn zero_argument<T>(lifetime: Lifetime) -> Self
    where
        T: Default + Send + Sync + 'static,
    {
        Self::new(
            TypeKey::of::<T>(),
            ConstructorKind::ZeroArgument,
            Vec::new(),
            lifetime,
            |_| Ok(Instance::new(Arc::new(T::default()))),
        )
    }

    /// 构造的类型键
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// 构造函数种类
    pub fn kind(&self) -> ConstructorKind {
        self.kind
    }

    /// 参数类型键，按声明顺序
    pub fn parameters(&self) -> &[TypeKey] {
        &self.parameters
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 以解析好的参数构造实例
    pub fn invoke(&self, arguments: Vec<Instance>) -> Result<Instance, DependencyError> {
        (self.construct)(arguments)
    }
}

impl fmt::Debug for ConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("parameters", &self.parameters)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

/// 绑定种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    Provider,
    Alias,
}

/// 可序列化的绑定描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingDescriptor {
    pub key: TypeKey,
    pub kind: BindingKind,
    pub lifetime: Lifetime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<TypeKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TypeKey>,
}
