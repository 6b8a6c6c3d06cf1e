//! 模块定义
//!
//! 模块是一组绑定与构造函数的声明，注册到容器后生效

use crate::binding::{AliasBinding, Binding, ConstructorSpec, ProviderBinding};
use crate::dependencies::Dependencies;
use crate::injectable::Injectable;
use infrastructure_common::{BoxError, Lifetime};
use std::sync::Arc;

/// 绑定模块
///
/// ```ignore
/// let module = Module::new("LoggerModule")
///     .injectable::<DebugLogger>()
///     .binds::<dyn Logger, DebugLogger>(Lifetime::Singleton, |logger| logger);
/// ```
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    bindings: Vec<Binding>,
    constructors: Vec<ConstructorSpec>,
}

impl Module {
    /// 创建空模块
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// 声明提供者：由工厂函数生成 `T`，参数类型为 `D`
    pub fn provides<T, D>(
        self,
        lifetime: Lifetime,
        factory: impl Fn(D) -> Result<Arc<T>, BoxError> + Send + Sync + 'static,
    ) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        D: Dependencies,
    {
        self.with_binding(ProviderBinding::typed::<T, D>(lifetime, factory))
    }

    /// 声明别名：请求 `I` 时解析 `T` 并转换
    pub fn binds<I, T>(
        self,
        lifetime: Lifetime,
        upcast: impl Fn(Arc<T>) -> Arc<I> + Send + Sync + 'static,
    ) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: ?Sized + Send + Sync + 'static,
    {
        self.with_binding(AliasBinding::typed::<I, T>(lifetime, upcast))
    }

    /// 登记可注入构造函数
    pub fn injectable<T: Injectable>(self) -> Self {
        self.with_constructor(ConstructorSpec::injectable::<T>())
    }

    /// 登记无参构造函数
    pub fn zero_argument<T>(self, lifetime: Lifetime) -> Self
    where
        T: Default + Send + Sync + 'static,
    {
        self.with_constructor(ConstructorSpec::zero_argument::<T>(lifetime))
    }

    /// 添加绑定
    pub fn with_binding(mut self, binding: impl Into<Binding>) -> Self {
        self.bindings.push(binding.into());
        self
    }

    /// 添加构造函数
    pub fn with_constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// 模块名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 模块中的绑定
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// 模块中的构造函数
    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.constructors
    }

    /// 绑定与构造函数的总数
    pub fn len(&self) -> usize {
        self.bindings.len() + self.constructors.len()
    }

    /// 模块是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 拆分为名称、绑定与构造函数
    pub fn into_parts(self) -> (String, Vec<Binding>, Vec<ConstructorSpec>) {
        (self.name, self.bindings, self.constructors)
    }
}
