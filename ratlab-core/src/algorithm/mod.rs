//! 数值算法
//!
//! 目前只有一个：超出 i64 的比值到 f64 的防溢出换算。

use crate::operand::Figure;

/// 计算 (a1 + b1) / (a2 + b2) 的 f64 近似值，a 为任意大的整数，
/// b 为绝对值小于 1 的修正项。
///
/// 两个 a 都在 i64 范围内时直接换算；否则把二者同时分解为
/// `q * i64::MAX + r`，余数并入修正项后对商递归。分子分母同除以
/// i64::MAX 不改变比值，每层递归都缩小约 63 位，必然终止。
pub fn div_big_ratio(a1: &Figure, b1: f64, a2: &Figure, b2: f64) -> f64 {
    match (a1.as_i64(), a2.as_i64()) {
        (Some(n), Some(d)) => (n as f64 + b1) / (d as f64 + b2),
        _ => {
            let (a1, b1) = shrink(a1, b1);
            let (a2, b2) = shrink(a2, b2);
            div_big_ratio(&a1, b1, &a2, b2)
        }
    }
}

/// 把 (a + b) 换算成 (q + carry) * i64::MAX，carry 的绝对值小于 1
fn shrink(a: &Figure, b: f64) -> (Figure, f64) {
    let (quotient, remainder) = a.to_big().div_rem_i64(i64::MAX);
    (
        Figure::from_big(quotient),
        (remainder as f64 + b) / i64::MAX as f64,
    )
}
