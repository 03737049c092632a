//! 统一故障类型
//!
//! 五类故障的语义：
//! - `Syntax`：数学上无定义，与运行时取值无关（0 作分母、0 的 0 次方等）
//! - `Logical`：数值上成立但约定禁止（整数核心上的普通除法等）
//! - `Undefined`：出现了未定义的符号或操作数种类
//! - `Overflow`：窄化转换放不下目标值
//! - `Unknown`：意料之外的底层故障，保留原始起因的文本
//!
//! 无失败语义的纯函数直接返回值；有失败语义的函数返回 `Result`，从不用哨兵值。

use thiserror::Error;

/// 计算核心的故障类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// 数学上无定义的运算
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// 约定上禁止的运算
    #[error("Logical error: {0}")]
    Logical(String),

    /// 未定义的符号
    #[error("Undefined symbol: {0}")]
    Undefined(String),

    /// 窄化转换溢出
    #[error("Overflow: {0}")]
    Overflow(String),

    /// 意料之外的故障（保留起因文本）
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl MathError {
    /// 故障种类名，供结构化报告使用
    pub fn kind(&self) -> &'static str {
        match self {
            MathError::Syntax(_) => "syntax",
            MathError::Logical(_) => "logical",
            MathError::Undefined(_) => "undefined",
            MathError::Overflow(_) => "overflow",
            MathError::Unknown(_) => "unknown",
        }
    }

    /// 人类可读的故障描述（不带种类前缀）
    pub fn message(&self) -> &str {
        match self {
            MathError::Syntax(msg)
            | MathError::Logical(msg)
            | MathError::Undefined(msg)
            | MathError::Overflow(msg)
            | MathError::Unknown(msg) => msg,
        }
    }
}

/// 计算结果类型别名
pub type MathResult<T> = Result<T, MathError>;
