//! 有理数操作数
//!
//! 不变量：分母恒非零；任何构造或改变分数的运算之后，分数都处于
//! 最简形式且分母严格为正（零归一化为 0/1）。约分幂等。

use std::fmt;

use ratlab_config::OutputConfig;

use crate::algorithm;
use crate::error::{MathError, MathResult};
use crate::kit::digit_string;
use crate::operand::{Figure, Operand};
use crate::operation::figure as figure_op;
use crate::operation::rational as rational_op;

/// 有理数（分子 / 分母）
#[derive(Debug, Clone)]
pub struct Rational {
    numerator: Figure,
    denominator: Figure,
}

impl Rational {
    /// 常量零（0/1）
    pub const ZERO: Rational = Rational {
        numerator: Figure::ZERO,
        denominator: Figure::ONE,
    };
    /// 常量一（1/1）
    pub const ONE: Rational = Rational {
        numerator: Figure::ONE,
        denominator: Figure::ONE,
    };

    /// 从分子、分母构造。0 不能作分母
    pub fn new(numerator: Figure, denominator: Figure) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::Syntax("0 cannot be a denominator".to_string()));
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    /// 内部构造：调用方保证分母非零
    pub(crate) fn from_parts(numerator: Figure, denominator: Figure) -> Self {
        debug_assert!(!denominator.is_zero());
        let mut rational = Self {
            numerator,
            denominator,
        };
        rational.reduce();
        rational
    }

    pub fn numerator(&self) -> &Figure {
        &self.numerator
    }

    pub fn denominator(&self) -> &Figure {
        &self.denominator
    }

    /// 约分：分子分母同除以最大公约数；若分母为负，分子分母同时取反。
    /// 幂等
    fn reduce(&mut self) {
        match (self.numerator.as_i64(), self.denominator.as_i64()) {
            (Some(n), Some(d)) => {
                // i64 快路径放宽到 i128，避免 i64::MIN 取反溢出
                let (mut n, mut d) = (n as i128, d as i128);
                let g = gcd_u128(n.unsigned_abs(), d.unsigned_abs()) as i128;
                n /= g;
                d /= g;
                if d < 0 {
                    n = -n;
                    d = -d;
                }
                self.numerator = Figure::from_i128(n);
                self.denominator = Figure::from_i128(d);
            }
            _ => {
                let n = self.numerator.to_big();
                let d = self.denominator.to_big();
                let g = n.gcd(&d);
                let (mut n, _) = n.div_rem(&g);
                let (mut d, _) = d.div_rem(&g);
                if d.is_negative() {
                    n = n.neg();
                    d = d.neg();
                }
                self.numerator = Figure::from_big(n);
                self.denominator = Figure::from_big(d);
            }
        }
    }

    /// 是否是真分数（|值| < 1）
    pub fn is_proper_fraction(&self) -> bool {
        if self.is_zero() {
            return true;
        }
        figure_op::less_than(&figure_op::absolute(&self.numerator), &self.denominator)
    }

    /// 转换为 f64
    ///
    /// 分子分母都在 i64 范围内时直接用原生除法；任一超出时改走
    /// 防溢出递归算法，精度可能略降但不会溢出
    pub fn to_f64(&self) -> f64 {
        match (self.numerator.as_i64(), self.denominator.as_i64()) {
            (Some(n), Some(d)) => n as f64 / d as f64,
            _ => algorithm::div_big_ratio(&self.numerator, 0.0, &self.denominator, 0.0),
        }
    }

    /// 按显示配置渲染 f64 近似值
    pub fn to_f64_string(&self, config: &OutputConfig) -> String {
        let rendered = format!("{:.*}", config.precision, self.to_f64());
        match config.comma_interval {
            Some(interval) => digit_string::add_comma(&rendered, interval),
            None => rendered,
        }
    }

    /// 不带括号的渲染：整数只输出分子，否则输出 `n/d`
    pub fn to_plain_string(&self) -> String {
        if self.denominator == Figure::ONE {
            self.numerator.to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<Figure> for Rational {
    fn from(numerator: Figure) -> Self {
        Self {
            numerator,
            denominator: Figure::ONE,
        }
    }
}

impl From<i64> for Rational {
    fn from(numerator: i64) -> Self {
        Self::from(Figure::from(numerator))
    }
}

impl Operand for Rational {
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    fn is_positive(&self) -> bool {
        // 约分后分母恒正，符号完全由分子决定
        self.numerator.is_positive()
    }
}

/// 相等判定：相减结果为零即相等
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        rational_op::subtract(self, other).is_zero()
    }
}

impl Eq for Rational {}

/// 带括号的渲染：负整数与非整数比值加方括号
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == Figure::ONE {
            if self.numerator.is_negative() {
                write!(f, "[{}]", self.numerator)
            } else {
                write!(f, "{}", self.numerator)
            }
        } else {
            write!(f, "[{}/{}]", self.numerator, self.denominator)
        }
    }
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
