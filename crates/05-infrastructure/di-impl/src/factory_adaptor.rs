//! 对象工厂适配器
//!
//! 把容器的解析能力暴露给只支持无参构造的外部对象创建接口

use crate::container::Container;
use di_abstractions::{Instance, ObjectFactory};
use infrastructure_common::{CreationError, TypeKey};
use tracing::warn;

/// 基于容器的对象工厂
#[derive(Debug, Clone)]
pub struct ContainerObjectFactory {
    container: Container,
}

impl ContainerObjectFactory {
    /// 基于容器创建对象工厂
    pub fn new(container: Container) -> Self {
        Self { container }
    }

    /// 底层容器
    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl ObjectFactory for ContainerObjectFactory {
    fn create(&self, key: TypeKey) -> Result<Instance, CreationError> {
        self.container.resolve_key(key).map_err(|source| {
            warn!("创建实例失败: {}, 原因: {}", key, source);
            CreationError::new(key, source)
        })
    }
}
