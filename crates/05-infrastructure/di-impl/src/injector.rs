//! 字段注入器

use di_abstractions::{InjectionTarget, Resolver};
use infrastructure_common::DependencyError;
use tracing::{debug, trace};

/// 字段注入器
///
/// 为外部创建的对象填充注入字段，顺序为派生类型在前、父级在后。
#[derive(Debug, Clone)]
pub struct FieldInjector<R> {
    resolver: R,
}

impl<R: Resolver> FieldInjector<R> {
    /// 基于解析器创建注入器
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// 底层解析器
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// 注入全部字段，返回填充的字段数
    ///
    /// 任一字段解析失败即中止，之前已写入的字段保持写入后的状态。
    pub fn inject(&self, target: &mut dyn InjectionTarget) -> Result<usize, DependencyError> {
        let type_name = target.type_name();
        let points = target.injection_points();
        let total = points.len();

        for point in points {
            trace!("注入字段: {}.{} <- {}", point.owner(), point.field(), point.key());
            let instance = self.resolver.resolve_key(point.key())?;
            point.assign(instance)?;
        }

        debug!("注入完成: {} ({} 个字段)", type_name, total);
        Ok(total)
    }
}
