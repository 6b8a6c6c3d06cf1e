//! 依赖注入容器
//!
//! 按 缓存 → 绑定 → 构造函数 的顺序递归解析实例

use crate::registry::BindingRegistry;
use crate::scope_cache::ScopeCache;
use di_abstractions::{Binding, Instance, Module, ResolveContext, ResolveOptions, Resolver};
use infrastructure_common::{DependencyError, Lifetime, TypeKey};
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// 容器统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContainerStats {
    /// 绑定数量
    pub bindings: usize,
    /// 拥有构造函数的类型数量
    pub constructors: usize,
    /// 已缓存的单例数量
    pub cached_singletons: usize,
    /// 顶层解析次数
    pub resolutions: u64,
    /// 失败的顶层解析次数
    pub failures: u64,
}

#[derive(Debug, Default)]
struct Counters {
    resolutions: u64,
    failures: u64,
}

struct ContainerInner {
    registry: BindingRegistry,
    cache: ScopeCache,
    options: ResolveOptions,
    counters: Mutex<Counters>,
}

/// 依赖注入容器
///
/// 由 [`ContainerBuilder::build`] 创建，注册表此后只读。克隆共享同一份注册表与单例缓存。
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl Container {
    /// 创建容器构建器
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// 解析指定类型的组件
    pub fn resolve<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_key(TypeKey::of::<T>())?.downcast::<T>()
    }

    /// 解析指定类型键的实例
    pub fn resolve_key(&self, key: TypeKey) -> Result<Instance, DependencyError> {
        let mut context = ResolveContext::new(self.inner.options);
        let result = self.resolve_in(key, &mut context);

        let mut counters = self.inner.counters.lock();
        counters.resolutions += 1;
        if let Err(error) = &result {
            counters.failures += 1;
            debug!("解析失败: {}, 原因: {}", key, error);
        }
        result
    }

    /// 是否存在绑定或构造函数
    pub fn can_resolve(&self, key: TypeKey) -> bool {
        self.inner.cache.contains(key) || self.inner.registry.contains(key)
    }

    /// 冻结后的注册表
    pub fn registry(&self) -> &BindingRegistry {
        &self.inner.registry
    }

    /// 解析选项
    pub fn options(&self) -> ResolveOptions {
        self.inner.options
    }

    /// 统计信息
    pub fn stats(&self) -> ContainerStats {
        let counters = self.inner.counters.lock();
        ContainerStats {
            bindings: self.inner.registry.len(),
            constructors: self.inner.registry.constructor_count(),
            cached_singletons: self.inner.cache.len(),
            resolutions: counters.resolutions,
            failures: counters.failures,
        }
    }

    fn resolve_in(&self, key: TypeKey, context: &mut ResolveContext) -> Result<Instance, DependencyError> {
        if let Some(instance) = self.inner.cache.get(key) {
            trace!("命中单例缓存: {}", key);
            return Ok(instance);
        }

        context.push_type(key)?;
        let result = self.produce(key, context);
        context.pop_type();
        result
    }

    fn produce(&self, key: TypeKey, context: &mut ResolveContext) -> Result<Instance, DependencyError> {
        let registry = &self.inner.registry;

        if let Some(binding) = registry.lookup(key) {
            return match binding {
                Binding::Provider(provider) => {
                    trace!("通过提供者解析: {}", key);
                    self.scoped(key, provider.lifetime(), context, |context| {
                        let arguments = self.resolve_all(provider.parameters(), context)?;
                        provider.invoke(arguments)
                    })
                }
                Binding::Alias(alias) => {
                    trace!("通过别名解析: {} -> {}", key, alias.target());
                    self.scoped(key, alias.lifetime(), context, |context| {
                        let target = self.resolve_in(alias.target(), context)?;
                        alias.upcast(target)
                    })
                }
            };
        }

        if let Some(constructor) = registry.constructor(key) {
            trace!("通过构造函数解析: {}", key);
            return self.scoped(key, constructor.lifetime(), context, |context| {
                let arguments = self.resolve_all(constructor.parameters(), context)?;
                constructor.invoke(arguments)
            });
        }

        Err(DependencyError::missing(key))
    }

    fn scoped<F>(
        &self,
        key: TypeKey,
        lifetime: Lifetime,
        context: &mut ResolveContext,
        create: F,
    ) -> Result<Instance, DependencyError>
    where
        F: FnOnce(&mut ResolveContext) -> Result<Instance, DependencyError>,
    {
        if !lifetime.is_singleton() {
            return create(context);
        }

        // 同一线程重入正在初始化的单例会在 OnceCell 上死锁，关闭循环检测时也要拒绝
        let chain = context.chain();
        if chain[..chain.len().saturating_sub(1)].contains(&key) {
            return Err(DependencyError::CircularDependency {
                chain: describe_chain(chain),
            });
        }

        self.inner.cache.get_or_create(key, || create(context))
    }

    fn resolve_all(
        &self,
        parameters: &[TypeKey],
        context: &mut ResolveContext,
    ) -> Result<Vec<Instance>, DependencyError> {
        parameters
            .iter()
            .map(|parameter| self.resolve_in(*parameter, context))
            .collect()
    }
}

fn describe_chain(chain: &[TypeKey]) -> String {
    chain
        .iter()
        .map(TypeKey::short_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl Resolver for Container {
    fn resolve_key(&self, key: TypeKey) -> Result<Instance, DependencyError> {
        Container::resolve_key(self, key)
    }

    fn can_resolve(&self, key: TypeKey) -> bool {
        Container::can_resolve(self, key)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("options", &self.inner.options)
            .field("stats", &self.stats())
            .finish()
    }
}

/// 容器构建器
///
/// 注册阶段可变，[`build`](Self::build) 后注册表冻结。
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    registry: BindingRegistry,
    options: ResolveOptions,
}

impl ContainerBuilder {
    /// 创建新的容器构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册模块
    pub fn register_module(mut self, module: Module) -> Self {
        self.registry.register(module);
        self
    }

    /// 按顺序注册多个模块
    pub fn register_modules<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = Module>,
    {
        for module in modules {
            self.registry.register(module);
        }
        self
    }

    /// 设置解析选项
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// 启用或关闭循环依赖检测
    pub fn detect_cycles(mut self, enabled: bool) -> Self {
        self.options.detect_cycles = enabled;
        self
    }

    /// 设置最大解析深度
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// 注册阶段的注册表
    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    /// 构建容器
    pub fn build(self) -> Container {
        info!(
            "构建容器: {} 个模块, {} 个绑定, {} 个构造函数",
            self.registry.modules().len(),
            self.registry.len(),
            self.registry.constructor_count()
        );

        Container {
            inner: Arc::new(ContainerInner {
                registry: self.registry,
                cache: ScopeCache::new(),
                options: self.options,
                counters: Mutex::new(Counters::default()),
            }),
        }
    }
}
