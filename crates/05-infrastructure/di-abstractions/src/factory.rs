//! 对象工厂抽象接口
//!
//! 供外部框架按类型创建对象，错误统一为 [`CreationError`]

use crate::instance::Instance;
use infrastructure_common::{CreationError, TypeKey};
use std::sync::Arc;

/// 对象工厂 trait
pub trait ObjectFactory: Send + Sync {
    /// 创建指定类型的实例
    fn create(&self, key: TypeKey) -> Result<Instance, CreationError>;

    /// 创建并还原为具体类型
    fn create_typed<T>(&self) -> Result<Arc<T>, CreationError>
    where
        T: ?Sized + Send + Sync + 'static,
        Self: Sized,
    {
        let key = TypeKey::of::<T>();
        self.create(key)?
            .downcast::<T>()
            .map_err(|source| CreationError::new(key, source))
    }
}
