//! 容器配置
//!
//! 从 TOML 文件与环境变量加载，所有字段都有默认值

use config::{Config, Environment, File, FileFormat};
use di_abstractions::ResolveOptions;
use infrastructure_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 容器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// 解析配置
    pub resolution: ResolutionSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 解析配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionSettings {
    /// 是否检测循环依赖
    pub detect_cycles: bool,
    /// 最大解析深度
    pub max_depth: usize,
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        let options = ResolveOptions::default();
        Self {
            detect_cycles: options.detect_cycles,
            max_depth: options.max_depth,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 日志级别
    pub level: String,
    /// 是否使用 JSON 格式
    pub json_format: bool,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl LoggingSettings {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            show_target: true,
            show_thread_ids: true,
            show_file: true,
            show_line_number: true,
        }
    }

    /// 解析日志级别
    pub fn level(&self) -> ConfigResult<tracing::Level> {
        self.level.parse().map_err(|_| {
            ConfigError::validation(format!(
                "未知的日志级别: {}，可用级别: trace, debug, info, warn, error",
                self.level
            ))
        })
    }
}

impl ContainerSettings {
    /// 从配置文件与环境变量加载
    ///
    /// 显式指定的文件必须存在；环境变量形如 `{PREFIX}__RESOLUTION__MAX_DEPTH`。
    pub fn load(path: Option<&Path>, env_prefix: &str) -> ConfigResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            debug!("加载配置文件: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(parse_error)?;
        Self::from_config(config)
    }

    /// 从 TOML 文本加载
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .map_err(parse_error)?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> ConfigResult<Self> {
        let settings: Self = config.try_deserialize().map_err(parse_error)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.resolution.max_depth == 0 {
            return Err(ConfigError::validation("resolution.max_depth 必须大于 0"));
        }
        self.logging.level()?;
        Ok(())
    }

    /// 转换为解析选项
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            detect_cycles: self.resolution.detect_cycles,
            max_depth: self.resolution.max_depth,
        }
    }
}

fn parse_error(source: config::ConfigError) -> ConfigError {
    error!("配置解析失败: {}", source);
    ConfigError::ParseError {
        source: Box::new(source),
    }
}
