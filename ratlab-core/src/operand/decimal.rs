//! 十进制字面量
//!
//! 字面量先验证再持有：构造成功的 `Decimal` 一定能无损换算成有理数。
//! 合法形式：可选负号 + 数字串 + 可选的小数点及数字串；
//! 前导零只允许出现在 `0` 与 `0.xxx` 两种形式里。

use std::fmt;

use tracing::trace;

use crate::error::{MathError, MathResult};
use crate::operand::{Figure, Rational};
use crate::operation::figure as figure_op;
use crate::operation::rational as rational_op;
use crate::symbol::Symbol;

/// 已验证的十进制字面量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    integer_part: Vec<Symbol>,
    decimal_part: Vec<Symbol>,
}

impl Decimal {
    pub fn from_str(literal: &str) -> MathResult<Self> {
        let mut symbols = Vec::with_capacity(literal.len());
        for ch in literal.chars() {
            match Symbol::from_char(ch) {
                Some(symbol) => symbols.push(symbol),
                None => {
                    return Err(MathError::Undefined(format!(
                        "'{ch}' in numeric literal"
                    )));
                }
            }
        }
        Self::from_symbols(&symbols)
    }

    pub fn from_symbols(symbols: &[Symbol]) -> MathResult<Self> {
        if symbols.is_empty() {
            return Err(MathError::Syntax("empty numeric literal".to_string()));
        }
        let (negative, unsigned) = match symbols[0] {
            Symbol::Subtract => (true, &symbols[1..]),
            _ => (false, symbols),
        };
        if unsigned.is_empty() {
            return Err(MathError::Syntax(
                "numeric literal has no digits".to_string(),
            ));
        }
        // 可选负号之后必须紧跟数字，小数点不能打头
        if !unsigned[0].is_digit() {
            return Err(MathError::Syntax(format!(
                "numeric literal must start with a digit, got '{}'",
                unsigned[0]
            )));
        }

        let mut dot_index = None;
        for (index, symbol) in unsigned.iter().enumerate() {
            if symbol.is_digit() {
                continue;
            } else if *symbol == Symbol::Dot {
                if dot_index.is_some() {
                    return Err(MathError::Syntax(format!(
                        "more than one decimal point in '{}'",
                        render(symbols)
                    )));
                }
                dot_index = Some(index);
            } else {
                return Err(MathError::Syntax(format!(
                    "'{symbol}' cannot appear in a numeric literal"
                )));
            }
        }
        // 前导零只允许 `0` 和 `0.xxx`
        if unsigned[0] == Symbol::Zero
            && unsigned.len() > 1
            && (unsigned.len() == 2 || unsigned[1] != Symbol::Dot)
        {
            return Err(MathError::Syntax(format!(
                "malformed numeric literal '{}'",
                render(symbols)
            )));
        }

        let (integer_part, decimal_part) = match dot_index {
            Some(index) => (unsigned[..index].to_vec(), unsigned[index + 1..].to_vec()),
            None => (unsigned.to_vec(), Vec::new()),
        };
        trace!(target: "ratlab::parser", literal = %render(symbols), "parsed numeric literal");
        Ok(Self {
            negative,
            integer_part,
            decimal_part,
        })
    }

    /// 无损换算成有理数：整数部分按权累加，小数部分按 10 的负幂累加
    pub fn to_rational(&self) -> Rational {
        let mut integer = Figure::ZERO;
        for (order, symbol) in self.integer_part.iter().rev().enumerate() {
            if let Some(digit) = symbol.digit_value() {
                let weighted =
                    figure_op::multiply(&Figure::from(digit), &figure_op::pow10(order as u32));
                integer = figure_op::add(&integer, &weighted);
            }
        }
        let mut value = Rational::from(integer);
        for (order, symbol) in self.decimal_part.iter().enumerate() {
            if let Some(digit) = symbol.digit_value() {
                let term =
                    Rational::from_parts(Figure::from(digit), figure_op::pow10(order as u32 + 1));
                value = rational_op::add(&value, &term);
            }
        }
        if self.negative {
            rational_op::opposite(&value)
        } else {
            value
        }
    }
}

fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|symbol| symbol.to_char()).collect()
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", render(&self.integer_part))?;
        if !self.decimal_part.is_empty() {
            write!(f, ".{}", render(&self.decimal_part))?;
        }
        Ok(())
    }
}
