//! 可注入构造函数
//!
//! 通常由 `#[derive(Injectable)]` 生成实现

use crate::dependencies::Dependencies;
use infrastructure_common::{BoxError, Lifetime};

/// 带有可注入构造函数的组件
///
/// 构造参数通过 [`Dependencies`] 元组声明，容器按顺序解析后传入。
///
/// ```ignore
/// struct QuoteViewModel {
///     repository: Arc<dyn QuoteRepository>,
/// }
///
/// impl Injectable for QuoteViewModel {
///     type Dependencies = (Arc<dyn QuoteRepository>,);
///
///     fn construct((repository,): Self::Dependencies) -> Result<Self, BoxError> {
///         Ok(Self { repository })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// 组件生命周期，标记为单例的类型只构造一次
    const LIFETIME: Lifetime = Lifetime::Transient;

    /// 构造参数
    type Dependencies: Dependencies;

    /// 使用已解析的依赖构造实例
    fn construct(dependencies: Self::Dependencies) -> Result<Self, BoxError>;
}
