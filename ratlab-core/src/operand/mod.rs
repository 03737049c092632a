//! 操作数类型
//!
//! - [`Figure`]：带小整数快路径的任意精度整数
//! - [`Rational`]：恒约分的有理数
//! - [`Decimal`]：十进制字面量，解析为 Rational
//! - [`Operand`]：三者共享的符号判断能力

mod decimal;
mod figure;
mod rational;
mod traits;

pub use decimal::Decimal;
pub use figure::Figure;
pub use rational::Rational;
pub use traits::Operand;
