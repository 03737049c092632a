//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志走 stderr，
//! 不和计算结果混在一起。

use std::io;

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 使用指定格式和日志配置初始化日志系统
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("ratlab::tokenizer", log_config.level_for("ratlab::tokenizer"))
        .with_target("ratlab::parser", log_config.level_for("ratlab::parser"))
        .with_target("ratlab::evaluator", log_config.level_for("ratlab::evaluator"))
        .with_target("ratlab::api", log_config.global)
        .with_target("ratlab::cli", log_config.global);

    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets);
    tracing_subscriber::registry().with(stderr_layer).init();
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
