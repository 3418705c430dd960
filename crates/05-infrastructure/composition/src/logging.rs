//! 日志配置

use di_common::InfrastructureError;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: tracing::Level,
    /// 额外的过滤指令，例如 `di_impl=trace`
    pub directives: Vec<String>,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            directives: Vec::new(),
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            directives: Vec::new(),
            show_target: true,
            show_thread_ids: true,
            show_file: true,
            show_line_number: true,
            json_format: false,
        }
    }

    /// 创建生产环境日志配置
    pub fn production() -> Self {
        Self {
            level: tracing::Level::INFO,
            directives: Vec::new(),
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: true,
        }
    }

    /// 按名称设置日志级别（trace、debug、info、warn、error）
    pub fn with_level_name(mut self, level: &str) -> Result<Self, InfrastructureError> {
        self.level = tracing::Level::from_str(level).map_err(|_| {
            InfrastructureError::BootstrapFailed {
                message: format!("无效的日志级别: {level}"),
            }
        })?;
        Ok(self)
    }

    /// 添加过滤指令
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// 设置是否使用 JSON 格式
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// 组装过滤器：全局级别加上额外指令
    pub fn env_filter(&self) -> Result<EnvFilter, InfrastructureError> {
        let mut filter = EnvFilter::new(self.level.as_str().to_ascii_lowercase());
        for directive in &self.directives {
            let directive = directive.parse::<Directive>().map_err(|e| {
                InfrastructureError::BootstrapFailed {
                    message: format!("无效的日志过滤指令 '{directive}': {e}"),
                }
            })?;
            filter = filter.add_directive(directive);
        }
        Ok(filter)
    }

    /// 初始化全局日志订阅者
    pub fn init(&self) -> Result<(), InfrastructureError> {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter()?)
            .with_target(self.show_target)
            .with_thread_ids(self.show_thread_ids)
            .with_file(self.show_file)
            .with_line_number(self.show_line_number);

        if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志初始化失败: {e}"),
        })?;

        info!("日志系统初始化完成");
        Ok(())
    }
}
