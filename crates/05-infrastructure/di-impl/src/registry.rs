//! 绑定注册表

use di_abstractions::{Binding, BindingDescriptor, ConstructorKind, ConstructorSpec, Module};
use infrastructure_common::{Lifetime, TypeKey};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// 同一类型的两个构造函数槽位
#[derive(Debug, Clone, Default)]
struct ConstructorSlots {
    injectable: Option<ConstructorSpec>,
    zero_argument: Option<ConstructorSpec>,
}

impl ConstructorSlots {
    fn preferred(&self) -> Option<&ConstructorSpec> {
        self.injectable.as_ref().or(self.zero_argument.as_ref())
    }
}

/// 绑定注册表
///
/// 每个类型键最多对应一个绑定，后注册的覆盖先注册的。
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: HashMap<TypeKey, Binding>,
    constructors: HashMap<TypeKey, ConstructorSlots>,
    modules: Vec<String>,
}

impl BindingRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册模块中的全部绑定与构造函数，返回安装的条目数
    pub fn register(&mut self, module: Module) -> usize {
        let (name, bindings, constructors) = module.into_parts();
        let installed = bindings.len() + constructors.len();
        info!("注册模块: {} ({} 项)", name, installed);

        for binding in bindings {
            self.insert_binding(binding);
        }
        for constructor in constructors {
            self.insert_constructor(constructor);
        }

        self.modules.push(name);
        installed
    }

    /// 安装单个绑定
    pub fn insert_binding(&mut self, binding: Binding) {
        let key = binding.key();
        if self.bindings.insert(key, binding).is_some() {
            debug!("替换已有绑定: {}", key);
        }
    }

    /// 安装单个构造函数
    pub fn insert_constructor(&mut self, constructor: ConstructorSpec) {
        let key = constructor.key();
        let slots = self.constructors.entry(key).or_default();
        let slot = match constructor.kind() {
            ConstructorKind::Injectable => &mut slots.injectable,
            ConstructorKind::ZeroArgument => &mut slots.zero_argument,
        };
        if slot.replace(constructor).is_some() {
            debug!("替换已有构造函数: {}", key);
        }
    }

    /// 查找绑定
    pub fn lookup(&self, key: TypeKey) -> Option<&Binding> {
        self.bindings.get(&key)
    }

    /// 查找构造函数，可注入构造函数优先
    pub fn constructor(&self, key: TypeKey) -> Option<&ConstructorSpec> {
        self.constructors.get(&key).and_then(ConstructorSlots::preferred)
    }

    /// 是否存在绑定或构造函数
    pub fn contains(&self, key: TypeKey) -> bool {
        self.bindings.contains_key(&key) || self.constructor(key).is_some()
    }

    /// 绑定数量
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// 是否没有任何绑定和构造函数
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.constructors.is_empty()
    }

    /// 拥有构造函数的类型数量
    pub fn constructor_count(&self) -> usize {
        self.constructors.len()
    }

    /// 已注册模块名称，按注册顺序
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// 生成可序列化的注册表快照，按类型名称排序
    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut bindings: Vec<_> = self.bindings.values().map(Binding::describe).collect();
        bindings.sort_by(|a, b| a.key.name().cmp(b.key.name()));

        let mut constructors: Vec<_> = self
            .constructors
            .values()
            .filter_map(ConstructorSlots::preferred)
            .map(|spec| ConstructorDescriptor {
                key: spec.key(),
                kind: spec.kind(),
                lifetime: spec.lifetime(),
                parameters: spec.parameters().to_vec(),
            })
            .collect();
        constructors.sort_by(|a, b| a.key.name().cmp(b.key.name()));

        RegistrySnapshot {
            modules: self.modules.clone(),
            bindings,
            constructors,
        }
    }
}

/// 构造函数描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorDescriptor {
    pub key: TypeKey,
    pub kind: ConstructorKind,
    pub lifetime: Lifetime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<TypeKey>,
}

/// 注册表快照
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub modules: Vec<String>,
    pub bindings: Vec<BindingDescriptor>,
    pub constructors: Vec<ConstructorDescriptor>,
}
