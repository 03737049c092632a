//! 组合数学扩展运算
//!
//! 全部建立在整数核心之上，阶乘结果超出 i64 时自动走无界表示。

use crate::error::{MathError, MathResult};
use crate::operand::{Figure, Operand};
use crate::operation::figure as figure_op;

/// 阶乘。0! = 1! = 1，负数无定义
pub fn factorial(num: &Figure) -> MathResult<Figure> {
    if num.is_negative() {
        return Err(MathError::Syntax(
            "factorial of a negative number is undefined".to_string(),
        ));
    }
    let mut result = Figure::ONE;
    let mut factor = Figure::TWO;
    while figure_op::less_or_equal(&factor, num) {
        result = figure_op::multiply(&result, &factor);
        factor.increase_one();
    }
    Ok(result)
}

/// 排列数 A(n, m) = n! / (n - m)!
pub fn arrangement(total: &Figure, selected: &Figure) -> MathResult<Figure> {
    if total.is_negative() || selected.is_negative() {
        return Err(MathError::Syntax(
            "arrangement requires non-negative operands".to_string(),
        ));
    }
    if figure_op::less_than(total, selected) {
        return Err(MathError::Syntax(
            "cannot select more elements than available".to_string(),
        ));
    }
    // (n - m + 1) 到 n 的连乘
    let mut result = Figure::ONE;
    let mut factor = figure_op::subtract(total, selected);
    factor.increase_one();
    while figure_op::less_or_equal(&factor, total) {
        result = figure_op::multiply(&result, &factor);
        factor.increase_one();
    }
    Ok(result)
}

/// 组合数 C(n, m) = A(n, m) / m!，商必然整除
pub fn combination(total: &Figure, selected: &Figure) -> MathResult<Figure> {
    let numerator = arrangement(total, selected)?;
    let denominator = factorial(selected)?;
    figure_op::mods_quotient(&numerator, &denominator)
}
