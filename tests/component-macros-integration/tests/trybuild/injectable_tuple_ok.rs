use di_abstractions::Injectable;
use std::sync::Arc;

pub struct Settings;

#[derive(Injectable)]
pub struct Wrapper(Arc<Settings>, #[injectable(default)] Vec<String>);

fn main() {
    let wrapper = <Wrapper as Injectable>::construct((Arc::new(Settings),)).ok().unwrap();
    assert!(wrapper.1.is_empty());
}
