//! 应用启动器

use crate::application::Application;
use crate::entry_points::EntryPointHook;
use crate::logging::initialize_logging;
use crate::settings::ContainerSettings;
use di_impl::{Container, ContainerObjectFactory, FieldInjector};
use infrastructure_common::InfrastructureResult;
use std::path::Path;
use tracing::{info, warn};

/// 应用启动器
///
/// 负责协调启动顺序：配置 → 日志 → 模块注册 → 容器构建
#[derive(Debug, Clone, Default)]
pub struct Bootstrapper {
    /// 容器配置
    settings: ContainerSettings,
    /// 是否启用日志初始化
    logging_enabled: bool,
}

impl Bootstrapper {
    /// 创建新的启动器，使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置
    pub fn with_settings(mut self, settings: ContainerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 从配置文件与环境变量加载配置
    pub fn load_settings(mut self, path: Option<&Path>, env_prefix: &str) -> InfrastructureResult<Self> {
        self.settings = ContainerSettings::load(path, env_prefix)?;
        Ok(self)
    }

    /// 设置是否初始化日志
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// 当前配置
    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }

    /// 启动应用
    pub fn bootstrap<A: Application + ?Sized>(self, application: &A) -> InfrastructureResult<AppContext> {
        // 第一步：验证配置
        self.settings.validate()?;

        // 第二步：初始化日志，避免在测试环境中重复初始化
        if self.logging_enabled {
            initialize_logging(&self.settings.logging)?;
        }

        info!("开始启动应用: {}", application.name());

        // 第三步：注册模块并冻结容器
        let modules = application.modules();
        if modules.is_empty() {
            warn!("应用没有声明任何模块: {}", application.name());
        }
        let container = Container::builder()
            .with_options(self.settings.resolve_options())
            .register_modules(modules)
            .build();

        let injector = FieldInjector::new(container.clone());
        let context = AppContext {
            factory: ContainerObjectFactory::new(container.clone()),
            hook: EntryPointHook::new(injector.clone()),
            injector,
            container,
            settings: self.settings,
        };

        info!("应用启动完成: {}", application.name());
        Ok(context)
    }
}

/// 启动后的应用上下文
#[derive(Debug, Clone)]
pub struct AppContext {
    container: Container,
    injector: FieldInjector<Container>,
    factory: ContainerObjectFactory,
    hook: EntryPointHook,
    settings: ContainerSettings,
}

impl AppContext {
    /// 已构建的容器
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// 字段注入器
    pub fn injector(&self) -> &FieldInjector<Container> {
        &self.injector
    }

    /// 对象工厂
    pub fn factory(&self) -> &ContainerObjectFactory {
        &self.factory
    }

    /// 入口点钩子
    pub fn entry_points(&self) -> &EntryPointHook {
        &self.hook
    }

    /// 启动时使用的配置
    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }
}
