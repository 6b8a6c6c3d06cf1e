//! # 示例应用程序
//!
//! 演示模块注册、对象工厂和入口点注入

mod app;

use anyhow::Context;
use app::{MainScreen, QuoteApp, QuoteViewModel};
use clap::Parser;
use di_abstractions::ObjectFactory;
use infrastructure_composition::{Bootstrapper, ContainerSettings};
use std::path::PathBuf;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "quote-app")]
#[command(about = "依赖注入示例：名言页面")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,

    /// 以 JSON 输出注册表快照后退出
    #[arg(long)]
    dump_bindings: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = ContainerSettings::load(args.config.as_deref(), "QUOTE_APP")
        .context("加载配置失败")?;
    if let Some(level) = args.log_level {
        settings.logging.level = level;
    }

    let context = Bootstrapper::new()
        .with_settings(settings)
        .with_logging(!args.dump_bindings)
        .bootstrap(&QuoteApp)
        .context("启动应用失败")?;

    if args.dump_bindings {
        let snapshot = context.container().registry().snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    // 外部框架通过对象工厂创建视图模型
    let view_model = context
        .factory()
        .create_typed::<QuoteViewModel>()
        .context("创建视图模型失败")?;
    info!("视图模型创建完成: {}", view_model.quote());

    // 外部框架创建页面后触发入口点注入
    let mut screen = MainScreen::default();
    context.entry_points().on_created(&mut screen)?;

    match screen.render() {
        Some(quote) => println!("{}", quote),
        None => anyhow::bail!("主页面未完成注入"),
    }

    let stats = context.container().stats();
    info!(
        resolutions = stats.resolutions,
        cached_singletons = stats.cached_singletons,
        "应用运行完成"
    );
    Ok(())
}
