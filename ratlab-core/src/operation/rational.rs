//! 有理数运算
//!
//! 加法通分走最小公倍数而不是分母直乘，中间值更小。
//! 所有构造出的结果都经过 `Rational` 的约分，自动保持最简形式。

use crate::error::{MathError, MathResult};
use crate::operand::{Figure, Operand, Rational};
use crate::operation::figure as figure_op;

// ==================== 加减 ====================

/// 加法：以分母的最小公倍数为公分母
pub fn add(first: &Rational, second: &Rational) -> Rational {
    let common = figure_op::lcm(first.denominator(), second.denominator());
    // 分母非零，公倍数必非零
    let (left_scale, _) = figure_op::div_rem_nonzero(&common, first.denominator());
    let (right_scale, _) = figure_op::div_rem_nonzero(&common, second.denominator());
    let numerator = figure_op::add(
        &figure_op::multiply(first.numerator(), &left_scale),
        &figure_op::multiply(second.numerator(), &right_scale),
    );
    Rational::from_parts(numerator, common)
}

pub fn subtract(first: &Rational, second: &Rational) -> Rational {
    add(first, &opposite(second))
}

// ==================== 乘除 ====================

pub fn multiply(first: &Rational, second: &Rational) -> Rational {
    Rational::from_parts(
        figure_op::multiply(first.numerator(), second.numerator()),
        figure_op::multiply(first.denominator(), second.denominator()),
    )
}

/// 有理数乘整数
pub fn multiply_figure(first: &Rational, factor: &Figure) -> Rational {
    Rational::from_parts(
        figure_op::multiply(first.numerator(), factor),
        first.denominator().clone(),
    )
}

/// 除法：0 不能作除数
pub fn divide(first: &Rational, second: &Rational) -> MathResult<Rational> {
    if second.is_zero() {
        return Err(MathError::Syntax("0 cannot be a divisor".to_string()));
    }
    Ok(Rational::from_parts(
        figure_op::multiply(first.numerator(), second.denominator()),
        figure_op::multiply(first.denominator(), second.numerator()),
    ))
}

/// 倒数：0 没有倒数
pub fn reciprocal(num: &Rational) -> MathResult<Rational> {
    if num.is_zero() {
        return Err(MathError::Syntax("0 does not have a reciprocal".to_string()));
    }
    Ok(Rational::from_parts(
        num.denominator().clone(),
        num.numerator().clone(),
    ))
}

// ==================== 一元运算 ====================

pub fn opposite(num: &Rational) -> Rational {
    Rational::from_parts(
        figure_op::opposite(num.numerator()),
        num.denominator().clone(),
    )
}

pub fn absolute(num: &Rational) -> Rational {
    if num.is_negative() {
        opposite(num)
    } else {
        num.clone()
    }
}

// ==================== 比较 ====================

pub fn less_than(first: &Rational, second: &Rational) -> bool {
    subtract(first, second).is_negative()
}

pub fn less_or_equal(first: &Rational, second: &Rational) -> bool {
    let diff = subtract(first, second);
    diff.is_negative() || diff.is_zero()
}

pub fn greater_than(first: &Rational, second: &Rational) -> bool {
    subtract(first, second).is_positive()
}

pub fn greater_or_equal(first: &Rational, second: &Rational) -> bool {
    let diff = subtract(first, second);
    diff.is_positive() || diff.is_zero()
}

// ==================== 乘方 ====================

/// 整数次乘方。负指数先按正指数计算再取倒数；
/// 0 的 0 次方与 0 的负数次方均无定义
pub fn power(base: &Rational, exponent: &Figure) -> MathResult<Rational> {
    if base.is_zero() {
        if exponent.is_zero() {
            return Err(MathError::Syntax(
                "0 to the power of 0 is undefined".to_string(),
            ));
        }
        if exponent.is_negative() {
            return Err(MathError::Syntax(
                "0 cannot be raised to a negative power".to_string(),
            ));
        }
        return Ok(Rational::ZERO);
    }
    let magnitude = figure_op::absolute(exponent);
    let raised = Rational::from_parts(
        figure_op::power(base.numerator(), &magnitude)?,
        figure_op::power(base.denominator(), &magnitude)?,
    );
    if exponent.is_negative() {
        reciprocal(&raised)
    } else {
        Ok(raised)
    }
}

// ==================== 取整 ====================

/// 向下取整（数学意义上的 floor）
pub fn round_down(num: &Rational) -> Figure {
    let (quotient, remainder) = figure_op::div_rem_nonzero(num.numerator(), num.denominator());
    if remainder.is_negative() {
        figure_op::subtract(&quotient, &Figure::ONE)
    } else {
        quotient
    }
}

/// 向上取整（数学意义上的 ceil）
pub fn round_up(num: &Rational) -> Figure {
    let (quotient, remainder) = figure_op::div_rem_nonzero(num.numerator(), num.denominator());
    if remainder.is_positive() {
        figure_op::add(&quotient, &Figure::ONE)
    } else {
        quotient
    }
}
