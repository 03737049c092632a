//! 操作数共享能力

/// 操作数的符号判断
///
/// `is_zero` 与 `is_positive` 不得依赖 `is_negative`，否则会造成循环依赖；
/// `is_negative` 由二者推导，实现方一般不需要重写。
pub trait Operand {
    fn is_zero(&self) -> bool;

    fn is_positive(&self) -> bool;

    /// 非零且非正即为负
    fn is_negative(&self) -> bool {
        !(self.is_zero() || self.is_positive())
    }
}
