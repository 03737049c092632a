//! CLI 配置
//!
//! 包含 CLI 特有的配置：按阶段的日志级别

use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub tokenizer: Option<Level>,
    pub parser: Option<Level>,
    pub evaluator: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            tokenizer: None,
            parser: None,
            evaluator: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "ratlab::tokenizer" => self.tokenizer.unwrap_or(self.global),
            "ratlab::parser" => self.parser.unwrap_or(self.global),
            "ratlab::evaluator" => self.evaluator.unwrap_or(self.global),
            _ => self.global,
        }
    }
}
