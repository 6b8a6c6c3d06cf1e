//! 派生宏与容器的集成测试

use di_abstractions::{Injectable, InjectionTarget, Lifetime, Module};
use di_impl::{Container, FieldInjector};
use infrastructure_common::DependencyError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn lines(&self) -> usize;
}

#[derive(Injectable)]
#[injectable(singleton)]
pub struct DebugLogger {
    #[injectable(default)]
    lines: AtomicUsize,
}

impl Logger for DebugLogger {
    fn log(&self, _message: &str) {
        self.lines.fetch_add(1, Ordering::SeqCst);
    }

    fn lines(&self) -> usize {
        self.lines.load(Ordering::SeqCst)
    }
}

#[derive(Injectable)]
pub struct QuoteService {
    logger: Arc<dyn Logger>,
    #[injectable(default)]
    served: AtomicUsize,
}

impl QuoteService {
    pub fn quote(&self) -> &'static str {
        self.served.fetch_add(1, Ordering::SeqCst);
        self.logger.log("quote");
        "Life is simpler than you think."
    }
}

#[derive(Default, InjectionTarget)]
pub struct BaseScreen {
    #[inject]
    logger: Option<Arc<dyn Logger>>,
}

#[derive(Default, InjectionTarget)]
#[inject(entry_point)]
pub struct MainScreen {
    #[inject]
    service: Option<Arc<QuoteService>>,
    #[inject(parent)]
    base: BaseScreen,
    title: String,
}

fn container() -> Container {
    Container::builder()
        .register_module(
            Module::new("LoggerModule")
                .injectable::<DebugLogger>()
                .binds::<dyn Logger, DebugLogger>(Lifetime::Singleton, |logger| logger),
        )
        .register_module(Module::new("Services").injectable::<QuoteService>())
        .build()
}

#[test]
fn test_derived_lifetimes() {
    assert_eq!(DebugLogger::LIFETIME, Lifetime::Singleton);
    assert_eq!(QuoteService::LIFETIME, Lifetime::Transient);
}

#[test]
fn test_derived_constructor_resolves_dependencies() {
    let container = container();

    let first = container.resolve::<QuoteService>().unwrap();
    let second = container.resolve::<QuoteService>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.logger, &second.logger));
    assert_eq!(first.quote(), "Life is simpler than you think.");
    assert_eq!(second.logger.lines(), 1);
}

#[test]
fn test_derived_singleton_marker_caches_concrete_type() {
    let container = container();

    let first = container.resolve::<DebugLogger>().unwrap();
    let second = container.resolve::<DebugLogger>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_derived_injection_target() {
    let container = container();
    let injector = FieldInjector::new(container.clone());

    let mut screen = MainScreen {
        title: "main".to_string(),
        ..Default::default()
    };
    assert!(screen.is_entry_point());
    assert_eq!(screen.type_name(), "MainScreen");
    assert!(!screen.base.is_entry_point());

    assert_eq!(injector.inject(&mut screen).unwrap(), 2);

    let service = screen.service.as_ref().unwrap();
    let logger = screen.base.logger.as_ref().unwrap();
    service.quote();
    assert_eq!(logger.lines(), 1);
    assert_eq!(screen.title, "main");
}

#[test]
fn test_derived_injection_reports_missing_binding() {
    let container = Container::builder()
        .register_module(Module::new("Services").injectable::<QuoteService>())
        .build();
    let injector = FieldInjector::new(container);

    let mut screen = MainScreen::default();
    let error = injector.inject(&mut screen).unwrap_err();

    assert!(matches!(error, DependencyError::MissingBinding { .. }));
    assert!(screen.service.is_none());
}
