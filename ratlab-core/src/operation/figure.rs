//! 整数运算
//!
//! 加、减、乘先走 i64 快路径（中间值放宽到 i128，不可能溢出），
//! 任一操作数已是无界表示时改走无界路径，结果总存进最小可容纳表示。

use crate::bignum::BigInt;
use crate::error::{MathError, MathResult};
use crate::operand::{Figure, Operand};

// ==================== 加减乘 ====================

pub fn add(first: &Figure, second: &Figure) -> Figure {
    match (first.as_i64(), second.as_i64()) {
        (Some(a), Some(b)) => Figure::from_i128(a as i128 + b as i128),
        _ => Figure::from_big(first.to_big().add(&second.to_big())),
    }
}

pub fn subtract(first: &Figure, second: &Figure) -> Figure {
    match (first.as_i64(), second.as_i64()) {
        (Some(a), Some(b)) => Figure::from_i128(a as i128 - b as i128),
        _ => Figure::from_big(first.to_big().sub(&second.to_big())),
    }
}

pub fn multiply(first: &Figure, second: &Figure) -> Figure {
    match (first.as_i64(), second.as_i64()) {
        (Some(a), Some(b)) => Figure::from_i128(a as i128 * b as i128),
        _ => Figure::from_big(first.to_big().mul(&second.to_big())),
    }
}

/// 整数不支持普通除法：除法有余数，调用方应使用有理数引擎
/// 或显式的商余运算
pub fn divide(_first: &Figure, _second: &Figure) -> MathResult<Figure> {
    Err(MathError::Logical(
        "integers do not support plain division".to_string(),
    ))
}

// ==================== 商余 ====================

/// 商余运算，向零截断，余数与被除数同号
pub fn divide_and_remainder(first: &Figure, second: &Figure) -> MathResult<(Figure, Figure)> {
    if second.is_zero() {
        return Err(MathError::Syntax("0 cannot be a divisor".to_string()));
    }
    Ok(div_rem_nonzero(first, second))
}

/// 内部商余：调用方保证除数非零
pub(crate) fn div_rem_nonzero(first: &Figure, second: &Figure) -> (Figure, Figure) {
    match (first.as_i64(), second.as_i64()) {
        (Some(a), Some(b)) => (
            Figure::from_i128(a as i128 / b as i128),
            Figure::from_i128(a as i128 % b as i128),
        ),
        _ => {
            let (q, r) = first.to_big().div_rem(&second.to_big());
            (Figure::from_big(q), Figure::from_big(r))
        }
    }
}

/// 余数
pub fn modulo(first: &Figure, second: &Figure) -> MathResult<Figure> {
    divide_and_remainder(first, second).map(|(_, remainder)| remainder)
}

/// 求余运算的商
pub fn mods_quotient(first: &Figure, second: &Figure) -> MathResult<Figure> {
    divide_and_remainder(first, second).map(|(quotient, _)| quotient)
}

// ==================== 一元运算 ====================

/// 相反数
pub fn opposite(num: &Figure) -> Figure {
    match num.as_i64() {
        Some(n) => Figure::from_i128(-(n as i128)),
        None => Figure::from_big(num.to_big().neg()),
    }
}

/// 绝对值
pub fn absolute(num: &Figure) -> Figure {
    if num.is_negative() {
        opposite(num)
    } else {
        num.clone()
    }
}

// ==================== 比较 ====================

pub fn less_than(first: &Figure, second: &Figure) -> bool {
    subtract(first, second).is_negative()
}

pub fn less_or_equal(first: &Figure, second: &Figure) -> bool {
    let diff = subtract(first, second);
    diff.is_negative() || diff.is_zero()
}

pub fn greater_than(first: &Figure, second: &Figure) -> bool {
    subtract(first, second).is_positive()
}

pub fn greater_or_equal(first: &Figure, second: &Figure) -> bool {
    let diff = subtract(first, second);
    diff.is_positive() || diff.is_zero()
}

// ==================== 乘方 ====================

/// 非负整数次乘方。0^0 与负指数均无定义
pub fn power(base: &Figure, exponent: &Figure) -> MathResult<Figure> {
    if base.is_zero() && exponent.is_zero() {
        return Err(MathError::Syntax(
            "0 to the power of 0 is undefined".to_string(),
        ));
    }
    if exponent.is_negative() {
        return Err(MathError::Syntax(
            "integer power does not support negative exponents".to_string(),
        ));
    }
    let exp = exponent.to_i64()?;
    let exp = u32::try_from(exp)
        .map_err(|_| MathError::Overflow(format!("exponent {exp} is too large")))?;
    Ok(Figure::from_big(base.to_big().pow(exp)))
}

/// 10 的非负整数次幂，十进制字面量解析用
pub(crate) fn pow10(exponent: u32) -> Figure {
    Figure::from_big(BigInt::from_i64(10).pow(exponent))
}

// ==================== 最大公约数 / 最小公倍数 ====================

/// 最大公约数。结果恒非负；gcd(a, 0) = |a|；gcd(0, 0) = 0
pub fn gcd(first: &Figure, second: &Figure) -> Figure {
    match (first.as_i64(), second.as_i64()) {
        (Some(a), Some(b)) => {
            let mut x = a.unsigned_abs();
            let mut y = b.unsigned_abs();
            while y != 0 {
                let r = x % y;
                x = y;
                y = r;
            }
            Figure::from_i128(x as i128)
        }
        _ => Figure::from_big(first.to_big().gcd(&second.to_big())),
    }
}

/// 最小公倍数：|a / gcd(a, b) * b|。任一操作数为零时结果为零
pub fn lcm(first: &Figure, second: &Figure) -> Figure {
    if first.is_zero() || second.is_zero() {
        return Figure::ZERO;
    }
    let common = gcd(first, second);
    let (factor, _) = first.to_big().abs().div_rem(&common.to_big());
    Figure::from_big(factor.mul(&second.to_big().abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fig(n: i64) -> Figure {
        Figure::from(n)
    }

    #[test]
    fn test_add_then_subtract_is_identity() {
        let cases = [(0i64, 0i64), (5, 7), (-5, 7), (i64::MAX, 1), (i64::MIN, -1)];
        for (a, b) in cases {
            let sum = add(&fig(a), &fig(b));
            assert_eq!(subtract(&sum, &fig(b)), fig(a), "({a}+{b})-{b} != {a}");
        }
    }

    #[test]
    fn test_multiply_commutative() {
        let a = fig(i64::MAX);
        let b = fig(-12345);
        assert_eq!(multiply(&a, &b), multiply(&b, &a));
    }

    #[test]
    fn test_overflow_promotes() {
        let sum = add(&fig(i64::MAX), &fig(i64::MAX));
        assert!(!sum.is_small());
        assert_eq!(sum, Figure::from_i128(i64::MAX as i128 * 2));

        let product = multiply(&fig(i64::MAX), &fig(2));
        assert_eq!(product, sum);
    }

    #[test]
    fn test_divide_is_logical_fault() {
        assert!(matches!(
            divide(&fig(6), &fig(2)),
            Err(MathError::Logical(_))
        ));
    }

    #[test]
    fn test_divide_and_remainder_truncates() {
        let (q, r) = divide_and_remainder(&fig(-7), &fig(2)).unwrap();
        assert_eq!(q, fig(-3));
        assert_eq!(r, fig(-1));

        let (q, r) = divide_and_remainder(&fig(7), &fig(-2)).unwrap();
        assert_eq!(q, fig(-3));
        assert_eq!(r, fig(1));
    }

    #[test]
    fn test_divide_and_remainder_zero_divisor() {
        assert!(matches!(
            divide_and_remainder(&fig(7), &Figure::ZERO),
            Err(MathError::Syntax(_))
        ));
    }

    #[test]
    fn test_div_rem_min_by_minus_one() {
        // i64 快路径上最刁钻的一组：商超出 i64
        let (q, r) = divide_and_remainder(&fig(i64::MIN), &fig(-1)).unwrap();
        assert_eq!(q, Figure::from_i128(-(i64::MIN as i128)));
        assert!(r.is_zero());
    }

    #[test]
    fn test_opposite_and_absolute() {
        assert_eq!(opposite(&fig(5)), fig(-5));
        assert_eq!(opposite(&fig(i64::MIN)), Figure::from_i128(-(i64::MIN as i128)));
        assert_eq!(absolute(&fig(-5)), fig(5));
        assert_eq!(absolute(&fig(5)), fig(5));
        assert_eq!(absolute(&Figure::ZERO), Figure::ZERO);
    }

    #[test]
    fn test_comparisons() {
        assert!(less_than(&fig(1), &fig(2)));
        assert!(less_or_equal(&fig(2), &fig(2)));
        assert!(greater_than(&fig(3), &fig(-3)));
        assert!(greater_or_equal(&fig(-3), &fig(-3)));
        assert!(!less_than(&fig(2), &fig(2)));
    }

    #[test]
    fn test_gcd_properties() {
        let a = fig(36);
        let b = fig(-24);
        let g = gcd(&a, &b);
        assert_eq!(g, fig(12));
        // g 整除二者
        assert!(modulo(&a, &g).unwrap().is_zero());
        assert!(modulo(&b, &g).unwrap().is_zero());

        assert_eq!(gcd(&fig(-7), &Figure::ZERO), fig(7));
        assert_eq!(gcd(&Figure::ZERO, &Figure::ZERO), Figure::ZERO);
    }

    #[test]
    fn test_lcm_standard_identity() {
        assert_eq!(lcm(&fig(4), &fig(6)), fig(12));
        assert_eq!(lcm(&fig(-4), &fig(6)), fig(12));
        assert_eq!(lcm(&fig(7), &fig(13)), fig(91));
        assert_eq!(lcm(&fig(0), &fig(5)), Figure::ZERO);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(&fig(2), &fig(10)).unwrap(), fig(1024));
        assert_eq!(power(&fig(10), &fig(0)).unwrap(), Figure::ONE);
        assert_eq!(power(&fig(-3), &fig(3)).unwrap(), fig(-27));
        assert!(matches!(
            power(&Figure::ZERO, &Figure::ZERO),
            Err(MathError::Syntax(_))
        ));
        assert!(matches!(
            power(&fig(2), &fig(-1)),
            Err(MathError::Syntax(_))
        ));
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), Figure::ONE);
        assert_eq!(pow10(3), fig(1000));
        assert_eq!(pow10(19), Figure::from_i128(10i128.pow(19)));
    }
}
