//! 字段注入抽象
//!
//! 外部创建的对象通过 [`InjectionTarget`] 暴露可注入字段

use crate::instance::Instance;
use infrastructure_common::{DependencyError, TypeKey};
use std::sync::Arc;

/// 可写入实例的字段槽
pub trait InjectSlot {
    /// 字段期望的类型
    fn expected(&self) -> TypeKey;

    /// 写入实例，类型不符时原样返回
    fn accept(&mut self, instance: Instance) -> Result<(), Instance>;
}

impl<T> InjectSlot for Option<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    fn expected(&self) -> TypeKey {
        TypeKey::of::<T>()
    }

    fn accept(&mut self, instance: Instance) -> Result<(), Instance> {
        match instance.downcast::<T>() {
            Ok(value) => {
                *self = Some(value);
                Ok(())
            }
            Err(_) => Err(instance),
        }
    }
}

/// 注入点
///
/// 一个可写字段及其请求的类型键。
pub struct InjectionPoint<'a> {
    owner: &'static str,
    field: &'static str,
    key: TypeKey,
    slot: &'a mut dyn InjectSlot,
}

impl<'a> InjectionPoint<'a> {
    /// 请求类型与字段类型一致
    pub fn new(owner: &'static str, field: &'static str, slot: &'a mut dyn InjectSlot) -> Self {
        let key = slot.expected();
        Self {
            owner,
            field,
            key,
            slot,
        }
    }

    /// 显式指定请求的类型键
    pub fn with_key(
        owner: &'static str,
        field: &'static str,
        key: TypeKey,
        slot: &'a mut dyn InjectSlot,
    ) -> Self {
        Self {
            owner,
            field,
            key,
            slot,
        }
    }

    /// 要解析的类型键
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// 声明该字段的类型名称
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// 字段名称
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// 写入已解析的实例
    pub fn assign(self, instance: Instance) -> Result<(), DependencyError> {
        let expected = self.slot.expected();
        self.slot
            .accept(instance)
            .map_err(|rejected| DependencyError::InjectionTarget {
                target: self.owner.to_string(),
                field: self.field.to_string(),
                expected: expected.name().to_string(),
                actual: rejected.key().name().to_string(),
            })
    }
}

impl std::fmt::Debug for InjectionPoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionPoint")
            .field("owner", &self.owner)
            .field("field", &self.field)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// 注入目标
///
/// 通常由 `#[derive(InjectionTarget)]` 生成。注入点顺序为自身字段在前，父级字段在后。
pub trait InjectionTarget {
    /// 目标类型名称
    fn type_name(&self) -> &'static str;

    /// 是否为入口点，入口点在创建时由框架注入
    fn is_entry_point(&self) -> bool {
        false
    }

    /// 列出全部注入点
    fn injection_points(&mut self) -> Vec<InjectionPoint<'_>>;
}
