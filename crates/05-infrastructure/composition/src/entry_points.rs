//! 入口点生命周期钩子

use di_abstractions::InjectionTarget;
use di_impl::{Container, FieldInjector};
use infrastructure_common::DependencyResult;
use tracing::{debug, trace, warn};

/// 入口点钩子
///
/// 外部框架创建对象后调用 [`on_created`](Self::on_created)，只有标记为入口点的对象会被注入。
#[derive(Debug, Clone)]
pub struct EntryPointHook {
    injector: FieldInjector<Container>,
}

impl EntryPointHook {
    /// 基于字段注入器创建钩子
    pub fn new(injector: FieldInjector<Container>) -> Self {
        Self { injector }
    }

    /// 对象创建回调，返回是否执行了注入
    pub fn on_created(&self, target: &mut dyn InjectionTarget) -> DependencyResult<bool> {
        let type_name = target.type_name();
        if !target.is_entry_point() {
            trace!("跳过非入口点: {}", type_name);
            return Ok(false);
        }

        match self.injector.inject(target) {
            Ok(count) => {
                debug!("入口点注入完成: {} ({} 个字段)", type_name, count);
                Ok(true)
            }
            Err(e) => {
                warn!("入口点注入失败: {}, 原因: {}", type_name, e);
                Err(e)
            }
        }
    }
}
