//! # Component Macros
//!
//! 这个 crate 提供了生成依赖注入描述的派生宏。
//!
//! ## 核心宏
//!
//! - [`Injectable`] - 生成可注入构造函数
//! - [`InjectionTarget`] - 生成字段注入点表
//!
//! ## 使用示例
//!
//! ```ignore
//! use di_abstractions::{Injectable, InjectionTarget};
//! use std::sync::Arc;
//!
//! #[derive(Injectable)]
//! #[injectable(singleton)]
//! pub struct QuoteViewModel {
//!     repository: Arc<dyn QuoteRepository>,
//! }
//!
//! #[derive(InjectionTarget)]
//! #[inject(entry_point)]
//! pub struct MainScreen {
//!     #[inject]
//!     view_model: Option<Arc<QuoteViewModel>>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod injection_target;
mod utils;

/// 可注入构造函数派生宏
///
/// 为结构体实现 `Injectable`，每个 `Arc<T>` 字段按声明顺序成为构造参数。
///
/// # 参数
///
/// - `#[injectable(singleton)]` - 单例生命周期（默认瞬时）
/// - 字段上的 `#[injectable(default)]` - 使用 `Default::default()` 初始化，不参与解析
///
/// # 示例
///
/// ```ignore
/// #[derive(Injectable)]
/// #[injectable(singleton)]
/// pub struct DebugLogger {
///     #[injectable(default)]
///     lines: AtomicUsize,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 注入目标派生宏
///
/// 为结构体实现 `InjectionTarget`。
///
/// # 参数
///
/// - 字段上的 `#[inject]` - 注入字段，类型必须是 `Option<Arc<T>>`
/// - 字段上的 `#[inject(parent)]` - 父级注入目标，其注入点排在自身字段之后
/// - 结构体上的 `#[inject(entry_point)]` - 标记为入口点
///
/// # 示例
///
/// ```ignore
/// #[derive(InjectionTarget)]
/// #[inject(entry_point)]
/// pub struct MainScreen {
///     #[inject]
///     view_model: Option<Arc<QuoteViewModel>>,
///     #[inject(parent)]
///     base: BaseScreen,
/// }
/// ```
#[proc_macro_derive(InjectionTarget, attributes(inject))]
pub fn derive_injection_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injection_target::derive_injection_target_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
