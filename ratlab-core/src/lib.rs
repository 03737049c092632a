//! Ratlab 计算核心
//!
//! 一个精确计算器：十进制表达式进，最简有理数出，全程无浮点误差。
//!
//! 分层结构（下层不依赖上层）：
//! - [`bignum`]：无界整数
//! - [`operand`]：整数 / 有理数 / 十进制字面量三种操作数
//! - [`operation`]：操作数上的纯运算
//! - [`algorithm`]：防溢出的比值换算
//! - [`symbol`]：字符到符号的转换与符号流
//! - [`expr`]：双栈求值器与状态机
//! - [`extend`]：组合数学扩展
//! - [`kit`]：字符串修饰等杂项
//!
//! # 用法
//!
//! ```
//! use ratlab_core::{CalculatorState, Evaluator};
//!
//! let mut evaluator = Evaluator::new();
//! let output = evaluator.evaluate("1/3+1/6=");
//! assert_eq!(output.state, CalculatorState::End);
//! assert_eq!(output.result.unwrap().to_plain_string(), "1/2");
//! ```

pub mod algorithm;
pub mod bignum;
pub mod error;
pub mod expr;
pub mod extend;
pub mod kit;
pub mod operand;
pub mod operation;
pub mod symbol;

pub use bignum::BigInt;
pub use error::{MathError, MathResult};
pub use expr::{CalculationOutput, CalculatorState, Evaluator, StepEvent};
pub use operand::{Decimal, Figure, Operand, Rational};
pub use symbol::{Symbol, SymbolStream};

pub use ratlab_config::{OutputConfig, Phase};
