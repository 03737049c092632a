//! 表达式求值
//!
//! 符号流进，`CalculationOutput` 出。求值器本身是一个四态状态机，
//! 见 `state` 模块。

mod evaluator;
mod state;

pub use evaluator::Evaluator;
pub use state::{CalculationOutput, CalculatorState, StepEvent};
