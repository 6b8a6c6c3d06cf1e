use di_abstractions::InjectionTarget;
use std::sync::Arc;

pub trait Logger: Send + Sync {}

pub struct QuoteViewModel;

#[derive(Default, InjectionTarget)]
pub struct BaseScreen {
    #[inject]
    logger: Option<Arc<dyn Logger>>,
}

#[derive(Default, InjectionTarget)]
#[inject(entry_point)]
pub struct MainScreen {
    #[inject]
    view_model: Option<Arc<QuoteViewModel>>,
    #[inject(parent)]
    base: BaseScreen,
    title: String,
}

#[derive(InjectionTarget)]
pub struct Empty;

fn main() {
    let mut screen = MainScreen::default();
    assert!(screen.is_entry_point());
    assert_eq!(screen.injection_points().len(), 2);
    assert!(screen.title.is_empty());
    assert!(screen.base.logger.is_none());

    let mut empty = Empty;
    assert!(empty.injection_points().is_empty());
}
