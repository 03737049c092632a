//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use thiserror::Error;

pub use ratlab_core::MathError;

/// Ratlab 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 计算核心的故障（结构化）
    #[error("{0}")]
    Math(#[from] MathError),
}

impl ApiError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            // 未定义符号只会在字符到符号的转换阶段出现
            ApiError::Math(MathError::Undefined(_)) => "tokenizer",
            ApiError::Math(_) => "evaluator",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// 适用于 Web API 等需要结构化数据的场景。
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let ApiError::Math(err) = self;
        ErrorReport {
            phase: self.phase(),
            error_kind: err.kind().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、Web）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// 错误阶段: tokenizer, evaluator
    pub phase: &'static str,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} error: {}", self.phase, self.error_kind, self.message)
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式（Web API 使用）
    ///
    /// 不依赖 serde，手动构建 JSON 字符串。
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"phase":"{}","error_kind":"{}","message":"{}"}}"#,
            self.phase,
            escape_json(&self.error_kind),
            escape_json(&self.message)
        )
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

/// 简单的 JSON 字符串转义
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_classification() {
        let tokenizer = ApiError::Math(MathError::Undefined("'@' at position 1".to_string()));
        assert_eq!(tokenizer.phase(), "tokenizer");

        let evaluator = ApiError::Math(MathError::Syntax("unmatched ')'".to_string()));
        assert_eq!(evaluator.phase(), "evaluator");
    }

    #[test]
    fn test_to_report() {
        let err = ApiError::Math(MathError::Syntax("0 cannot be a divisor".to_string()));
        let report = err.to_report();
        assert_eq!(report.phase, "evaluator");
        assert_eq!(report.error_kind, "syntax");
        assert_eq!(report.message, "0 cannot be a divisor");
    }

    #[test]
    fn test_error_report_display() {
        let report = ErrorReport {
            phase: "evaluator",
            error_kind: "syntax".to_string(),
            message: "unmatched ')'".to_string(),
        };
        let display = format!("{}", report);
        assert!(display.contains("[evaluator]"));
        assert!(display.contains("unmatched ')'"));
    }

    #[test]
    fn test_error_report_to_json() {
        let report = ErrorReport {
            phase: "tokenizer",
            error_kind: "undefined".to_string(),
            message: "'@' at position 1".to_string(),
        };
        let json = report.to_json();
        assert!(json.contains("\"phase\":\"tokenizer\""));
        assert!(json.contains("\"error_kind\":\"undefined\""));
        assert!(json.contains("'@' at position 1"));
    }

    #[test]
    fn test_error_report_to_short() {
        let report = ErrorReport {
            phase: "evaluator",
            error_kind: "syntax".to_string(),
            message: "empty expression".to_string(),
        };
        assert_eq!(report.to_short(), "evaluator: empty expression");
    }

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("hello"), "hello");
        assert_eq!(escape_json("hello\"world"), "hello\\\"world");
        assert_eq!(escape_json("hello\\world"), "hello\\\\world");
        assert_eq!(escape_json("hello\nworld"), "hello\\nworld");
    }
}
