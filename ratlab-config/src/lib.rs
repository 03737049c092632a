//! Ratlab Config - Pure configuration data structures
//!
//! 本 crate 只包含数据结构，不含逻辑和全局状态。
//! 它是各 ratlab crate 之间共享的配置词汇表。

use serde::{Deserialize, Serialize};

/// 结果显示配置
///
/// 控制有理数近似值（f64）的渲染样式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 小数位数
    pub precision: usize,
    /// 整数部分逗号分隔间隔（None 表示不加逗号）
    pub comma_interval: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            comma_interval: None,
        }
    }
}

/// 计算管线阶段，用于按阶段配置日志
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Tokenizer,
    Parser,
    Evaluator,
}

impl Phase {
    /// 阶段名
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Tokenizer => "tokenizer",
            Phase::Parser => "parser",
            Phase::Evaluator => "evaluator",
        }
    }

    /// 该阶段的日志 target 名
    pub fn target(&self) -> String {
        format!("ratlab::{}", self.as_str())
    }
}
