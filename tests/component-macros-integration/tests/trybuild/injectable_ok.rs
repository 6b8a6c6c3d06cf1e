use di_abstractions::{Injectable, Lifetime};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

pub trait Logger: Send + Sync {}

#[derive(Injectable)]
#[injectable(singleton)]
pub struct DebugLogger {
    #[injectable(default)]
    lines: AtomicUsize,
}

impl Logger for DebugLogger {}

#[derive(Injectable)]
pub struct Repository {
    logger: Arc<dyn Logger>,
    settings: std::sync::Arc<DebugLogger>,
}

#[derive(Injectable)]
pub struct Marker;

fn main() {
    assert!(matches!(<DebugLogger as Injectable>::LIFETIME, Lifetime::Singleton));
    assert!(matches!(<Repository as Injectable>::LIFETIME, Lifetime::Transient));

    let logger = Arc::new(DebugLogger::construct(()).unwrap());
    let shared: Arc<dyn Logger> = logger.clone();
    let repository = Repository::construct((shared, logger.clone())).unwrap();
    assert!(Arc::ptr_eq(&repository.settings, &logger));

    let _marker = Marker::construct(()).unwrap();
}
