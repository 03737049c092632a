//! 整数操作数
//!
//! 双表示：`Small` 为 i64 快路径，`Big` 为无界表示。任何构造都把值
//! 存进能精确容纳它的最小表示，因此 `Big` 变体里的值必然超出 i64 范围。
//! 对外可见的值与内部表示无关，恒为精确值。
//!
//! 因为整数除法有余数，本类型不支持普通除法，见 `operation::figure`。

use std::fmt;

use crate::bignum::BigInt;
use crate::error::{MathError, MathResult};
use crate::operand::Operand;
use crate::operation::figure as figure_op;

/// 内部表示
#[derive(Debug, Clone)]
enum Repr {
    Small(i64),
    Big(BigInt),
}

/// 整数
#[derive(Debug, Clone)]
pub struct Figure {
    repr: Repr,
}

impl Figure {
    /// 常量零。常量是不可变值，自增自减只存在于 `&mut` 绑定上
    pub const ZERO: Figure = Figure {
        repr: Repr::Small(0),
    };
    /// 常量一
    pub const ONE: Figure = Figure {
        repr: Repr::Small(1),
    };
    /// 常量二
    pub const TWO: Figure = Figure {
        repr: Repr::Small(2),
    };

    /// 从无界表示构造。能放进 i64 时自动降级为快路径
    pub fn from_big(big: BigInt) -> Self {
        match big.to_i64() {
            Some(small) => Self {
                repr: Repr::Small(small),
            },
            None => Self {
                repr: Repr::Big(big),
            },
        }
    }

    /// 从 i128 构造（快路径运算的中间值宽度）
    pub fn from_i128(num: i128) -> Self {
        match i64::try_from(num) {
            Ok(small) => Self {
                repr: Repr::Small(small),
            },
            Err(_) => Self {
                repr: Repr::Big(BigInt::from_i128(num)),
            },
        }
    }

    /// 当前是否处于小整数快路径
    pub fn is_small(&self) -> bool {
        matches!(self.repr, Repr::Small(_))
    }

    /// 快路径值。`Big` 变体必然超出 i64，返回 None
    pub fn as_i64(&self) -> Option<i64> {
        match &self.repr {
            Repr::Small(n) => Some(*n),
            Repr::Big(_) => None,
        }
    }

    /// 窄化为 i64，放不下时报 Overflow
    pub fn to_i64(&self) -> MathResult<i64> {
        self.as_i64().ok_or_else(|| {
            MathError::Overflow(format!("{self} does not fit into an i64"))
        })
    }

    /// 转换为无界表示（副本）
    pub fn to_big(&self) -> BigInt {
        match &self.repr {
            Repr::Small(n) => BigInt::from_i64(*n),
            Repr::Big(b) => b.clone(),
        }
    }

    /// 自增 1。跨过 i64::MAX 时提升为无界表示
    pub fn increase_one(&mut self) -> &mut Self {
        match &mut self.repr {
            Repr::Small(n) => {
                if *n == i64::MAX {
                    self.repr = Repr::Big(BigInt::from_i128(i64::MAX as i128 + 1));
                } else {
                    *n += 1;
                }
            }
            Repr::Big(b) => {
                let next = b.add(&BigInt::one());
                self.repr = match next.to_i64() {
                    Some(small) => Repr::Small(small),
                    None => Repr::Big(next),
                };
            }
        }
        self
    }

    /// 自减 1。跨过 i64::MIN 时提升为无界表示
    pub fn decrease_one(&mut self) -> &mut Self {
        match &mut self.repr {
            Repr::Small(n) => {
                if *n == i64::MIN {
                    self.repr = Repr::Big(BigInt::from_i128(i64::MIN as i128 - 1));
                } else {
                    *n -= 1;
                }
            }
            Repr::Big(b) => {
                let next = b.sub(&BigInt::one());
                self.repr = match next.to_i64() {
                    Some(small) => Repr::Small(small),
                    None => Repr::Big(next),
                };
            }
        }
        self
    }
}

impl From<i64> for Figure {
    fn from(num: i64) -> Self {
        Self {
            repr: Repr::Small(num),
        }
    }
}

impl Operand for Figure {
    fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Small(n) => *n == 0,
            Repr::Big(b) => b.is_zero(),
        }
    }

    fn is_positive(&self) -> bool {
        match &self.repr {
            Repr::Small(n) => *n > 0,
            Repr::Big(b) => b.is_positive(),
        }
    }
}

/// 相等判定：相减结果为零即相等，两种表示下的同一值因此恒相等
impl PartialEq for Figure {
    fn eq(&self, other: &Self) -> bool {
        figure_op::subtract(self, other).is_zero()
    }
}

impl Eq for Figure {}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Small(n) => write!(f, "{n}"),
            Repr::Big(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(Figure::ZERO.is_zero());
        assert!(Figure::ONE.is_positive());
        assert_eq!(Figure::TWO, Figure::from(2));
    }

    #[test]
    fn test_smallest_representation() {
        // 能放进 i64 的 BigInt 构造后降级为快路径
        let demoted = Figure::from_big(BigInt::from_i64(42));
        assert!(demoted.is_small());
        assert_eq!(demoted.as_i64(), Some(42));

        let promoted = Figure::from_i128(i64::MAX as i128 + 1);
        assert!(!promoted.is_small());
        assert_eq!(promoted.as_i64(), None);
    }

    #[test]
    fn test_equality_across_representations() {
        let small = Figure::from(7);
        let via_big = Figure::from_big(BigInt::from_i64(7));
        assert_eq!(small, via_big);
        assert_ne!(small, Figure::from(8));
    }

    #[test]
    fn test_increase_promotes_past_i64_max() {
        let mut x = Figure::from(i64::MAX);
        x.increase_one();
        assert!(!x.is_small());
        assert_eq!(x, Figure::from_i128(i64::MAX as i128 + 1));
        // 与直接以无界表示构造的同一值相等
        assert_eq!(x, Figure::from_big(BigInt::from_i128(i64::MAX as i128 + 1)));
    }

    #[test]
    fn test_decrease_demotes_back_to_small() {
        let mut x = Figure::from_i128(i64::MAX as i128 + 1);
        x.decrease_one();
        assert!(x.is_small());
        assert_eq!(x.as_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_increase_then_decrease_is_identity() {
        for n in [0i64, -5, i64::MAX - 1, i64::MIN + 1] {
            let mut x = Figure::from(n);
            let original = x.clone();
            x.increase_one();
            x.decrease_one();
            assert_eq!(x, original);
        }
    }

    #[test]
    fn test_decrease_promotes_past_i64_min() {
        let mut x = Figure::from(i64::MIN);
        x.decrease_one();
        assert!(!x.is_small());
        x.increase_one();
        assert!(x.is_small());
        assert_eq!(x.as_i64(), Some(i64::MIN));
    }

    #[test]
    fn test_to_i64_overflow() {
        let big = Figure::from_i128(i64::MAX as i128 + 1);
        assert!(matches!(big.to_i64(), Err(MathError::Overflow(_))));
        assert_eq!(Figure::from(12).to_i64().unwrap(), 12);
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Figure::from(-3).is_negative());
        assert!(!Figure::from(0).is_negative());
        let big_negative = Figure::from_i128(-(i64::MAX as i128) - 10);
        assert!(big_negative.is_negative());
        assert!(!big_negative.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Figure::from(-42).to_string(), "-42");
        assert_eq!(
            Figure::from_i128(170141183460469231731687303715884105727).to_string(),
            "170141183460469231731687303715884105727"
        );
    }
}
