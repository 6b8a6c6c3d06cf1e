//! 名言示例应用的组件与模块

use di_abstractions::{Injectable, InjectionTarget, Lifetime, Module};
use infrastructure_composition::Application;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

pub const QUOTE: &str = "Life is simpler than you think.";

/// 日志接口
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// 调试日志
#[derive(Injectable)]
#[injectable(singleton)]
pub struct DebugLogger {
    #[injectable(default)]
    lines: AtomicUsize,
}

impl DebugLogger {
    pub fn lines(&self) -> usize {
        self.lines.load(Ordering::Relaxed)
    }
}

impl Logger for DebugLogger {
    fn log(&self, message: &str) {
        let line = self.lines.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(line, "{}", message);
    }
}

/// 名言仓库接口
pub trait QuoteRepository: Send + Sync {
    fn get_quote(&self) -> String;
}

pub struct QuoteRepositoryImpl {
    logger: Arc<dyn Logger>,
}

impl QuoteRepositoryImpl {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl QuoteRepository for QuoteRepositoryImpl {
    fn get_quote(&self) -> String {
        self.logger.log("QuoteRepository: 读取名言");
        QUOTE.to_string()
    }
}

/// 名言页面的视图模型
#[derive(Injectable)]
pub struct QuoteViewModel {
    repository: Arc<dyn QuoteRepository>,
}

impl QuoteViewModel {
    pub fn quote(&self) -> String {
        self.repository.get_quote()
    }
}

/// 页面基类，所有页面共享日志
#[derive(Default, InjectionTarget)]
pub struct BaseScreen {
    #[inject]
    logger: Option<Arc<dyn Logger>>,
}

impl BaseScreen {
    pub fn logger(&self) -> Option<&Arc<dyn Logger>> {
        self.logger.as_ref()
    }
}

/// 主页面
#[derive(Default, InjectionTarget)]
#[inject(entry_point)]
pub struct MainScreen {
    #[inject]
    view_model: Option<Arc<QuoteViewModel>>,
    #[inject(parent)]
    base: BaseScreen,
}

impl MainScreen {
    /// 页面显示的文本，未注入时为空
    pub fn render(&self) -> Option<String> {
        let quote = self.view_model.as_ref()?.quote();
        if let Some(logger) = self.base.logger() {
            logger.log("MainScreen: 渲染名言");
        }
        Some(quote)
    }
}

/// 日志模块
pub fn logger_module() -> Module {
    Module::new("LoggerModule")
        .injectable::<DebugLogger>()
        .binds::<dyn Logger, DebugLogger>(Lifetime::Singleton, |logger| logger)
}

/// 应用模块
pub fn app_module() -> Module {
    Module::new("AppModule").provides::<dyn QuoteRepository, (Arc<dyn Logger>,)>(
        Lifetime::Singleton,
        |(logger,)| Ok(Arc::new(QuoteRepositoryImpl::new(logger))),
    )
}

/// 视图模型模块
pub fn view_model_module() -> Module {
    Module::new("ViewModelModule").injectable::<QuoteViewModel>()
}

/// 名言应用
pub struct QuoteApp;

impl Application for QuoteApp {
    fn name(&self) -> &str {
        "quote-app"
    }

    fn modules(&self) -> Vec<Module> {
        vec![app_module(), logger_module(), view_model_module()]
    }
}
