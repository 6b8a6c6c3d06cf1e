//! # 依赖注入具体实现
//!
//! 提供绑定注册表、单例缓存、递归解析器、字段注入器和对象工厂适配器的实现
//!
//! ```ignore
//! let container = Container::builder()
//!     .register_module(logger_module())
//!     .register_module(app_module())
//!     .build();
//!
//! let repository = container.resolve::<dyn QuoteRepository>()?;
//! ```

pub mod container;
pub mod factory_adaptor;
pub mod injector;
pub mod registry;
pub mod scope_cache;

pub use container::{Container, ContainerBuilder, ContainerStats};
pub use factory_adaptor::ContainerObjectFactory;
pub use injector::FieldInjector;
pub use registry::{BindingRegistry, ConstructorDescriptor, RegistrySnapshot};
pub use scope_cache::ScopeCache;
