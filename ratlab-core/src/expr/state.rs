//! 求值器状态与产物
//!
//! 状态转移：
//! - `Init`：尚未接受任何符号。每次求值开始时回到这里，
//!   出错后的求值器因此不需要显式恢复。
//! - `Normal`：已接受符号，正在消费符号流
//! - `End`：遇到 `=` 并成功产出结果
//! - `Error`：任一阶段出错，本次求值终止

use std::fmt;

use crate::error::MathError;
use crate::operand::Rational;
use crate::symbol::Symbol;

/// 求值器的四个状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorState {
    #[default]
    Init,
    Normal,
    End,
    Error,
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalculatorState::Init => "init",
            CalculatorState::Normal => "normal",
            CalculatorState::End => "end",
            CalculatorState::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// 一次求值的完整产物
#[derive(Debug, Clone)]
pub struct CalculationOutput {
    /// 求值结束时的状态（`End` 或 `Error`）
    pub state: CalculatorState,
    /// 状态的文字描述
    pub state_msg: String,
    /// 给使用者看的提示：出错时是故障描述，成功时是完成提示
    pub prompt_msg: String,
    /// 已被接受的符号串
    pub process: String,
    /// 精确结果，出错时为 None
    pub result: Option<Rational>,
}

/// 求值过程中的事件，按发生顺序记录
#[derive(Debug, Clone)]
pub enum StepEvent {
    /// 接受了一个符号
    SymbolAccepted(Symbol),
    /// 组装出一个完整操作数
    OperandCompleted(Rational),
    /// 产出最终结果
    ResultReady(Rational),
    /// 求值失败
    Faulted(MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_init() {
        assert_eq!(CalculatorState::default(), CalculatorState::Init);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(CalculatorState::Init.to_string(), "init");
        assert_eq!(CalculatorState::Normal.to_string(), "normal");
        assert_eq!(CalculatorState::End.to_string(), "end");
        assert_eq!(CalculatorState::Error.to_string(), "error");
    }
}
