//! 应用描述

use di_abstractions::Module;

/// 应用描述
///
/// 列出启动时要注册的全部模块，注册顺序即返回顺序。
pub trait Application {
    /// 应用名称
    fn name(&self) -> &str;

    /// 应用模块
    fn modules(&self) -> Vec<Module>;
}
