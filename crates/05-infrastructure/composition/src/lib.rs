//! # 基础设施组合层
//!
//! 负责把配置、日志和依赖注入容器组合成可运行的应用。
//!
//! ## 主要功能
//!
//! - **应用描述**: 声明要注册的模块
//! - **配置加载**: TOML 文件与环境变量
//! - **启动器**: 按顺序完成配置、日志、模块注册和容器构建
//! - **入口点钩子**: 外部对象创建后执行字段注入
//!
//! ## 基本使用
//!
//! ```rust,ignore
//! use infrastructure_composition::{Application, Bootstrapper};
//!
//! struct QuoteApp;
//!
//! impl Application for QuoteApp {
//!     fn name(&self) -> &str {
//!         "quote-app"
//!     }
//!
//!     fn modules(&self) -> Vec<Module> {
//!         vec![app_module(), logger_module()]
//!     }
//! }
//!
//! let context = Bootstrapper::new().with_logging(true).bootstrap(&QuoteApp)?;
//! let repository = context.container().resolve::<dyn QuoteRepository>()?;
//! ```

pub mod application;
pub mod bootstrapper;
pub mod entry_points;
pub mod logging;
pub mod settings;

// 重新导出主要类型
pub use application::Application;
pub use bootstrapper::{AppContext, Bootstrapper};
pub use entry_points::EntryPointHook;
pub use logging::initialize_logging;
pub use settings::{ContainerSettings, LoggingSettings, ResolutionSettings};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
