//! 类型擦除的组件实例

use infrastructure_common::{DependencyError, TypeKey};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 已解析的组件实例
///
/// 内部保存一个 `Arc<T>`（`T` 可以是 `dyn Trait`），克隆只增加引用计数。
/// 单例缓存与所有调用方共享同一个对象。
#[derive(Clone)]
pub struct Instance {
    key: TypeKey,
    value: Arc<dyn Any + Send + Sync>,
    address: usize,
}

impl Instance {
    /// 包装一个共享实例
    pub fn new<T>(value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let address = Arc::as_ptr(&value) as *const () as usize;
        Self {
            key: TypeKey::of::<T>(),
            value: Arc::new(value),
            address,
        }
    }

    /// 实例对应的类型键
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// 还原为具体的共享指针
    pub fn downcast<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.value
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| DependencyError::type_mismatch(TypeKey::of::<T>(), self.key))
    }

    /// 两个实例是否指向同一个对象
    ///
    /// 接口别名与实现共享同一块内存，因此 `dyn Logger` 与 `DebugLogger` 的实例可以比较。
    pub fn same_object(&self, other: &Instance) -> bool {
        self.address == other.address
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("key", &self.key)
            .field("address", &format_args!("{:#x}", self.address))
            .finish()
    }
}
