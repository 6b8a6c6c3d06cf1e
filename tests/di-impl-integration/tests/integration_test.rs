//! 跨 crate 的解析场景测试

use di_abstractions::{
    AliasBinding, Binding, ConstructorKind, ConstructorSpec, Injectable, InjectionPoint, InjectionTarget,
    Instance, Module, ObjectFactory, ProviderBinding, Resolver,
};
use di_impl::{Container, ContainerObjectFactory, FieldInjector};
use infrastructure_common::{BoxError, DependencyError, Lifetime, TypeKey};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

trait Storage: Send + Sync {
    fn name(&self) -> &str;
}

struct MemoryStorage {
    name: String,
}

impl Storage for MemoryStorage {
    fn name(&self) -> &str {
        &self.name
    }
}

struct Settings {
    storage_name: String,
}

struct Catalog {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

impl Injectable for Catalog {
    type Dependencies = (Arc<dyn Storage>,);

    fn construct((storage,): Self::Dependencies) -> Result<Self, BoxError> {
        Ok(Self { storage })
    }
}

struct Checkout {
    catalog: Arc<Catalog>,
    settings: Arc<Settings>,
}

impl std::fmt::Debug for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout").finish_non_exhaustive()
    }
}

impl Injectable for Checkout {
    const LIFETIME: Lifetime = Lifetime::Singleton;
    type Dependencies = (Arc<Catalog>, Arc<Settings>);

    fn construct((catalog, settings): Self::Dependencies) -> Result<Self, BoxError> {
        if settings.storage_name.is_empty() {
            return Err("storage name must not be empty".into());
        }
        Ok(Self { catalog, settings })
    }
}

fn storage_module(storage_name: &str) -> Module {
    let name = storage_name.to_string();
    Module::new("StorageModule")
        .provides::<Settings, ()>(Lifetime::Singleton, move |()| {
            Ok(Arc::new(Settings {
                storage_name: name.clone(),
            }))
        })
        .provides::<MemoryStorage, (Arc<Settings>,)>(Lifetime::Singleton, |(settings,)| {
            Ok(Arc::new(MemoryStorage {
                name: settings.storage_name.clone(),
            }))
        })
        .binds::<dyn Storage, MemoryStorage>(Lifetime::Transient, |storage| storage)
}

fn shop_module() -> Module {
    Module::new("ShopModule").injectable::<Catalog>().injectable::<Checkout>()
}

#[test]
fn test_graph_of_providers_aliases_and_constructors() {
    let container = Container::builder()
        .register_module(storage_module("orders"))
        .register_module(shop_module())
        .build();

    let checkout = container.resolve::<Checkout>().unwrap();
    assert_eq!(checkout.catalog.storage.name(), "orders");
    assert_eq!(checkout.settings.storage_name, "orders");

    // 非单例别名转发到单例实现
    let first = container.resolve::<dyn Storage>().unwrap();
    let second = container.resolve::<dyn Storage>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &checkout.catalog.storage));

    assert!(Arc::ptr_eq(&checkout, &container.resolve::<Checkout>().unwrap()));
}

#[test]
fn test_constructor_failure_is_instantiation_error() {
    let container = Container::builder()
        .register_module(storage_module(""))
        .register_module(shop_module())
        .build();

    let error = container.resolve::<Checkout>().unwrap_err();
    match &error {
        DependencyError::Instantiation { type_name, source } => {
            assert!(type_name.ends_with("Checkout"));
            assert_eq!(source.to_string(), "storage name must not be empty");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(container.stats().cached_singletons, 2);
}

#[test]
fn test_later_module_overrides_binding() {
    let container = Container::builder()
        .register_module(storage_module("orders"))
        .register_module(storage_module("archive"))
        .build();

    assert_eq!(container.resolve::<dyn Storage>().unwrap().name(), "archive");
    assert_eq!(container.registry().modules().len(), 2);
    assert_eq!(container.registry().len(), 3);
}

#[test]
fn test_raw_descriptors() {
    let key = TypeKey::of::<Settings>();
    let module = Module::new("Raw")
        .with_binding(ProviderBinding::new(key, Vec::new(), Lifetime::Transient, |_| {
            Ok(Instance::new(Arc::new(Settings {
                storage_name: "raw".to_string(),
            })))
        }))
        .with_binding(Binding::Alias(AliasBinding::new(
            TypeKey::of::<dyn Storage>(),
            key,
            Lifetime::Transient,
            |instance| Ok(instance),
        )))
        .with_constructor(ConstructorSpec::new(
            TypeKey::of::<Catalog>(),
            ConstructorKind::Injectable,
            vec![TypeKey::of::<dyn Storage>()],
            Lifetime::Transient,
            |arguments| {
                let storage = arguments[0].downcast::<dyn Storage>()?;
                Ok(Instance::new(Arc::new(Catalog { storage })))
            },
        ));
    let container = Container::builder().register_module(module).build();

    assert_eq!(container.resolve::<Settings>().unwrap().storage_name, "raw");

    // 别名目标实例类型与接口不符
    let error = container.resolve::<Catalog>().unwrap_err();
    assert!(matches!(error, DependencyError::TypeMismatch { .. }));
}

#[test]
fn test_resolver_trait_object() {
    let container = Container::builder()
        .register_module(storage_module("orders"))
        .build();
    let resolver: Arc<dyn Resolver> = Arc::new(container);

    assert!(resolver.can_resolve(TypeKey::of::<dyn Storage>()));
    assert!(!resolver.can_resolve(TypeKey::of::<Catalog>()));

    let instance = resolver.resolve_key(TypeKey::of::<dyn Storage>()).unwrap();
    assert_eq!(instance.downcast::<dyn Storage>().unwrap().name(), "orders");
    assert_eq!(resolver.resolve::<Settings>().unwrap().storage_name, "orders");
}

struct Level1 {
    storage: Option<Arc<dyn Storage>>,
}

struct Level2 {
    settings: Option<Arc<Settings>>,
    parent: Level1,
}

struct Level3 {
    catalog: Option<Arc<Catalog>>,
    parent: Level2,
}

impl InjectionTarget for Level1 {
    fn type_name(&self) -> &'static str {
        "Level1"
    }

    fn injection_points(&mut self) -> Vec<InjectionPoint<'_>> {
        vec![InjectionPoint::new("Level1", "storage", &mut self.storage)]
    }
}

impl InjectionTarget for Level2 {
    fn type_name(&self) -> &'static str {
        "Level2"
    }

    fn injection_points(&mut self) -> Vec<InjectionPoint<'_>> {
        let mut points = vec![InjectionPoint::new("Level2", "settings", &mut self.settings)];
        points.extend(self.parent.injection_points());
        points
    }
}

impl InjectionTarget for Level3 {
    fn type_name(&self) -> &'static str {
        "Level3"
    }

    fn is_entry_point(&self) -> bool {
        true
    }

    fn injection_points(&mut self) -> Vec<InjectionPoint<'_>> {
        let mut points = vec![InjectionPoint::new("Level3", "catalog", &mut self.catalog)];
        points.extend(self.parent.injection_points());
        points
    }
}

#[test]
fn test_injection_walks_three_levels_derived_first() {
    let container = Container::builder()
        .register_module(storage_module("orders"))
        .register_module(shop_module())
        .build();

    let mut target = Level3 {
        catalog: None,
        parent: Level2 {
            settings: None,
            parent: Level1 { storage: None },
        },
    };

    let order: Vec<_> = target.injection_points().iter().map(|point| point.owner()).collect();
    assert_eq!(order, vec!["Level3", "Level2", "Level1"]);

    let injected = FieldInjector::new(container).inject(&mut target).unwrap();
    assert_eq!(injected, 3);
    assert_eq!(target.catalog.unwrap().storage.name(), "orders");
    assert_eq!(target.parent.settings.unwrap().storage_name, "orders");
    assert_eq!(target.parent.parent.storage.unwrap().name(), "orders");
}

#[test]
fn test_injection_point_with_explicit_key() {
    let container = Container::builder()
        .register_module(storage_module("orders"))
        .build();

    struct Mislabeled {
        slot: Option<Arc<Settings>>,
    }

    impl InjectionTarget for Mislabeled {
        fn type_name(&self) -> &'static str {
            "Mislabeled"
        }

        fn injection_points(&mut self) -> Vec<InjectionPoint<'_>> {
            vec![InjectionPoint::with_key(
                "Mislabeled",
                "slot",
                TypeKey::of::<dyn Storage>(),
                &mut self.slot,
            )]
        }
    }

    let mut target = Mislabeled { slot: None };
    let error = FieldInjector::new(container).inject(&mut target).unwrap_err();

    match error {
        DependencyError::InjectionTarget { target, field, .. } => {
            assert_eq!(target, "Mislabeled");
            assert_eq!(field, "slot");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_factory_adaptor_across_threads() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();
    let container = Container::builder()
        .register_module(Module::new("Counted").provides::<Settings, ()>(Lifetime::Singleton, move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Settings {
                storage_name: "shared".to_string(),
            }))
        }))
        .build();
    let factory = Arc::new(ContainerObjectFactory::new(container));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let factory = factory.clone();
            thread::spawn(move || factory.create_typed::<Settings>().unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().storage_name, "shared");
    }
    assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn test_snapshot_lists_every_registration() {
    let container = Container::builder()
        .register_module(storage_module("orders"))
        .register_module(shop_module())
        .build();

    let json = serde_json::to_value(container.registry().snapshot()).unwrap();
    assert_eq!(json["modules"], serde_json::json!(["StorageModule", "ShopModule"]));
    assert_eq!(json["bindings"].as_array().unwrap().len(), 3);
    assert_eq!(json["constructors"].as_array().unwrap().len(), 2);
}
