//! 参数依赖列表
//!
//! 把工厂或构造函数的参数元组与有序的 [`TypeKey`] 列表对应起来

use crate::instance::Instance;
use infrastructure_common::{DependencyError, TypeKey};
use std::sync::Arc;

/// 依赖参数元组
///
/// 为 `()` 以及最多 8 个 `Arc<T>` 组成的元组实现，`T` 可以是 `dyn Trait`。
pub trait Dependencies: Sized + Send + 'static {
    /// 按声明顺序排列的参数类型键
    fn keys() -> Vec<TypeKey>;

    /// 从已解析的实例构建参数元组
    fn from_instances(instances: Vec<Instance>) -> Result<Self, DependencyError>;
}

impl Dependencies for () {
    #[inline]
    fn keys() -> Vec<TypeKey> {
        Vec::new()
    }

    #[inline]
    fn from_instances(_: Vec<Instance>) -> Result<Self, DependencyError> {
        Ok(())
    }
}

#[inline]
fn take<T>(instances: &mut impl Iterator<Item = Instance>) -> Result<Arc<T>, DependencyError>
where
    T: ?Sized + Send + Sync + 'static,
{
    instances
        .next()
        .ok_or_else(|| DependencyError::missing(TypeKey::of::<T>()))?
        .downcast::<T>()
}

macro_rules! define_dependencies {
    ($($T:ident),+) => {
        impl<$($T),+> Dependencies for ($(Arc<$T>,)+)
        where
            $($T: ?Sized + Send + Sync + 'static,)+
        {
            #[inline]
            fn keys() -> Vec<TypeKey> {
                vec![$(TypeKey::of::<$T>()),+]
            }

            #[inline]
            fn from_instances(instances: Vec<Instance>) -> Result<Self, DependencyError> {
                let mut instances = instances.into_iter();
                Ok(($(take::<$T>(&mut instances)?,)+))
            }
        }
    };
}

define_dependencies! { T1 }
define_dependencies! { T1, T2 }
define_dependencies! { T1, T2, T3 }
define_dependencies! { T1, T2, T3, T4 }
define_dependencies! { T1, T2, T3, T4, T5 }
define_dependencies! { T1, T2, T3, T4, T5, T6 }
define_dependencies! { T1, T2, T3, T4, T5, T6, T7 }
define_dependencies! { T1, T2, T3, T4, T5, T6, T7, T8 }
