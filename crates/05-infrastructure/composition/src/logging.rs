//! 日志初始化

use crate::settings::LoggingSettings;
use infrastructure_common::{InfrastructureError, InfrastructureResult};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 初始化日志系统
///
/// `RUST_LOG` 存在时优先使用，否则使用配置中的级别。全局订阅者已存在时保留原订阅者并返回成功。
pub fn initialize_logging(settings: &LoggingSettings) -> InfrastructureResult<()> {
    let level = settings.level()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.show_target)
        .with_thread_ids(settings.show_thread_ids)
        .with_file(settings.show_file)
        .with_line_number(settings.show_line_number);

    let result = if settings.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    match result {
        Ok(()) => {
            info!("日志系统初始化完成, 级别: {}", level);
            Ok(())
        }
        Err(e) if tracing::dispatcher::has_been_set() => {
            debug!("日志系统已初始化, 跳过: {}", e);
            Ok(())
        }
        Err(e) => Err(InfrastructureError::BootstrapFailed {
            message: format!("日志初始化失败: {}", e),
        }),
    }
}
