//! # 示例应用程序
//!
//! 演示如何使用配置文件、代码配置和类注册表组装服务容器，并按名称解析服务

mod services;

use clap::Parser;
use di_composition::{ContainerBootstrap, LoggingConfig};
use di_impl::Container;
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn DI 示例应用")]
struct Args {
    /// 服务配置文件路径（JSON、TOML 或 YAML），可重复指定
    #[arg(short, long = "config")]
    configs: Vec<String>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,

    /// 要解析的服务名称，未指定时解析所有已注册服务
    services: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logging = LoggingConfig::default()
        .with_level_name(&args.log_level)?
        .with_json_format(args.json_logs);

    let container = build_container(&args, logging)?;
    info!("启动 Lorn DI 示例应用");

    let names = if args.services.is_empty() {
        container
            .registered_services()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect()
    } else {
        args.services.clone()
    };

    let failures = resolve_services(&container, &names);
    if failures > 0 {
        anyhow::bail!("{failures} 个服务解析失败");
    }

    info!("应用已退出");
    Ok(())
}

/// 构建服务容器
fn build_container(args: &Args, logging: LoggingConfig) -> anyhow::Result<Container> {
    let mut bootstrap = ContainerBootstrap::new()
        .with_logging(logging)
        .with_class_registry(services::class_registry())
        .add_service_config(services::service_config());

    for path in &args.configs {
        bootstrap = bootstrap.add_config_file(path)?;
    }

    Ok(bootstrap.build()?)
}

/// 依次解析服务并打印结果，返回失败数量
fn resolve_services(container: &Container, names: &[String]) -> usize {
    let mut failures = 0;

    for name in names {
        match container.get(name) {
            Ok(value) => println!("{name}: {}", services::describe(&value)),
            Err(e) => {
                error!(kind = ?e.kind(), "解析服务 '{}' 失败: {}", name, e);
                failures += 1;
            }
        }
    }

    failures
}
